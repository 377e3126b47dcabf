use actix_web::{web, HttpMessage, HttpRequest, HttpResponse};
use serde_json::{Map, Value};

use crate::{
    api::AppState,
    models::{ListUsersQuery, User, UsersPage},
    services::user_service,
    utils::{AppError, ErrorBody},
};

/// Registra as rotas de /api/users. A barra final é opcional, como no
/// roteamento não estrito do Express.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/users")
            .route("", web::get().to(list_users))
            .route("/", web::get().to(list_users))
            .route("", web::post().to(create_user))
            .route("/", web::post().to(create_user))
            .route("/{id}", web::get().to(get_user))
            .route("/{id}/", web::get().to(get_user))
            .route("/{id}", web::put().to(update_user))
            .route("/{id}/", web::put().to(update_user))
            .route("/{id}", web::delete().to(delete_user))
            .route("/{id}/", web::delete().to(delete_user)),
    );
}

/// Body enviado. Sem `Content-Type: application/json` (ou com body vazio)
/// vale `{}`. Objetos e arrays são aceitos; JSON inválido ou escalar é 400.
fn parse_body(req: &HttpRequest, body: &[u8]) -> Result<Value, AppError> {
    if req.content_type() != "application/json" || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }

    match serde_json::from_slice::<Value>(body) {
        Ok(value @ (Value::Object(_) | Value::Array(_))) => Ok(value),
        Ok(_) => Err(AppError::InvalidRequest("body must be a JSON object or array".to_string())),
        Err(e) => Err(AppError::InvalidRequest(format!("malformed JSON body: {}", e))),
    }
}

/// GET /api/users - Lista paginada (page=1, limit=5 por padrão)
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    params(ListUsersQuery),
    responses(
        (status = 200, description = "Page of users", body = UsersPage)
    )
)]
pub async fn list_users(
    state: web::Data<AppState>,
    query: web::Query<Vec<(String, String)>>,
) -> Result<HttpResponse, AppError> {
    let query = ListUsersQuery::from_pairs(query.into_inner());
    log::info!("📋 GET /users - page {} limit {}", query.page(), query.limit());

    let page = user_service::list_users(&state.store, &query).await?;
    Ok(HttpResponse::Ok().json(page))
}

/// GET /api/users/{id}
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "User not found", body = ErrorBody)
    )
)]
pub async fn get_user(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    log::info!("🔍 GET /users/{}", id);

    let user = user_service::get_user(&state.store, &id).await?;
    Ok(HttpResponse::Ok().json(user))
}

/// POST /api/users - Cria usuário com id atribuído pelo servidor
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body(content = User, description = "Arbitrary user fields", content_type = "application/json"),
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Malformed body", body = ErrorBody)
    )
)]
pub async fn create_user(
    req: HttpRequest,
    body: web::Bytes,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let body = parse_body(&req, &body)?;
    log::info!("📝 POST /users");

    let user = user_service::create_user(&state.store, state.id_strategy, body).await?;
    Ok(HttpResponse::Created().json(user))
}

/// PUT /api/users/{id} - Merge raso dos campos enviados
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User id")),
    request_body(content = User, description = "Fields to merge", content_type = "application/json"),
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 400, description = "Malformed body", body = ErrorBody),
        (status = 404, description = "User not found", body = ErrorBody)
    )
)]
pub async fn update_user(
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Bytes,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let body = parse_body(&req, &body)?;
    log::info!("🔧 PUT /users/{}", id);

    let user = user_service::update_user(&state.store, &id, &body).await?;
    Ok(HttpResponse::Ok().json(user))
}

/// DELETE /api/users/{id}
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found", body = ErrorBody)
    )
)]
pub async fn delete_user(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    log::info!("🗑️  DELETE /users/{}", id);

    user_service::delete_user(&state.store, &id).await?;
    Ok(HttpResponse::NoContent().finish())
}
