use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::api::AppState;

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    /// `healthy` quando o arquivo de dados existe, `degraded` caso contrário
    pub status: String,
    pub service: String,
    pub version: String,
    pub data_file: String,
    pub data_file_present: bool,
    pub timestamp: i64,
}

impl HealthResponse {
    pub fn for_state(state: &AppState) -> Self {
        let path = state.store.path();
        let present = path.is_file();

        Self {
            status: if present { "healthy" } else { "degraded" }.to_string(),
            service: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            data_file: path.display().to_string(),
            data_file_present: present,
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}

/// Sempre 200: um arquivo ausente só degrada o status, as rotas de usuários
/// é que respondem 500
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service status and data file presence", body = HealthResponse)
    )
)]
pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let health = HealthResponse::for_state(&state);
    if !health.data_file_present {
        log::warn!("⚠️  Health check: data file {} not found", health.data_file);
    }
    HttpResponse::Ok().json(health)
}
