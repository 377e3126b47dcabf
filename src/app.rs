use actix_cors::Cors;
use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App, Error,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{api, api::AppState, middleware::RequestMetrics};

/// Monta a aplicação completa: CORS aberto, métricas, access log, Swagger,
/// health/metrics e as rotas de usuários
pub fn create_app(
    state: web::Data<AppState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(state)
        .wrap(Cors::permissive())
        .wrap(RequestMetrics)
        .wrap(Logger::default())
        .service(
            SwaggerUi::new("/swagger-ui/{_:.*}")
                .url("/api-docs/openapi.json", api::swagger::ApiDoc::openapi())
        )
        // Health check
        .route("/health", web::get().to(api::health::health_check))
        // Metrics
        .route("/metrics", web::get().to(api::metrics::get_metrics))
        // Users CRUD
        .configure(api::users::configure)
}
