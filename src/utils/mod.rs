// Utility functions
pub mod error;
pub mod js_number;

pub use error::*;
