mod api;
mod app;
mod config;
mod database;
mod middleware;
mod models;
mod services;
mod utils;

use actix_web::{web, HttpServer};
use dotenv::dotenv;

use crate::{api::AppState, config::AppConfig, database::JsonStore};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = AppConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    log::info!("🚀 Starting Users Service...");
    log::info!("💾 Data file: {}", config.data_file.display());
    log::info!("🔢 Id strategy: {:?}", config.id_strategy);

    if !config.data_file.exists() {
        log::warn!("⚠️  Data file not found, requests will fail until it is created");
    }

    let state = web::Data::new(AppState {
        store: JsonStore::new(config.data_file.clone()),
        id_strategy: config.id_strategy,
    });

    let bind_address = config.bind_address();
    log::info!("🌐 Server running on http://{}", bind_address);
    log::info!("📚 Swagger UI available at: http://{}/swagger-ui/", bind_address);

    HttpServer::new(move || app::create_app(state.clone()))
        .bind(bind_address)?
        .run()
        .await
}
