pub mod health;
pub mod metrics;
pub mod swagger;
pub mod users;

use crate::{config::IdStrategy, database::JsonStore};

/// Estado compartilhado pelos handlers de /api/users
pub struct AppState {
    pub store: JsonStore,
    pub id_strategy: IdStrategy,
}
