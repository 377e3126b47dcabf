// ==================== USERS ====================
// Lógica dos handlers de /api/users sobre a coleção carregada do arquivo.
// Cada operação recarrega a coleção inteira e, se mutar, reescreve o arquivo.

use serde_json::Value;

use crate::{
    config::IdStrategy,
    database::JsonStore,
    models::{ListUsersQuery, User, UsersPage},
    utils::{js_number, AppError},
};

// ==================== PURE HELPERS ====================

/// Fatia a coleção como `users.slice((page-1)*limit, page*limit)`
pub fn paginate(users: Vec<User>, query: &ListUsersQuery) -> UsersPage {
    let page = js_number::to_number(query.page());
    let limit = js_number::to_number(query.limit());

    let (from, to) = js_number::slice_bounds((page - 1.0) * limit, page * limit, users.len());
    let total_pages = (users.len() as f64 / limit).ceil();
    let current_page = js_number::parse_int(query.page()).unwrap_or(f64::NAN);

    UsersPage {
        users: users.into_iter().skip(from).take(to - from).collect(),
        total_pages: js_number::to_json(total_pages),
        current_page: js_number::to_json(current_page),
    }
}

/// Índice do primeiro usuário cujo `id` é igual a `parseInt(raw_id)`
pub fn position_of(users: &[User], raw_id: &str) -> Option<usize> {
    let id = js_number::parse_int(raw_id)?;
    users.iter().position(|u| u.has_id(id))
}

pub fn next_id(users: &[User], strategy: IdStrategy) -> u64 {
    match strategy {
        IdStrategy::Length => users.len() as u64 + 1,
        IdStrategy::MaxPlusOne => {
            let max = users
                .iter()
                .filter_map(User::id)
                .filter(|id| id.is_finite() && *id > 0.0)
                .fold(0.0_f64, f64::max);
            max.floor() as u64 + 1
        }
    }
}

// ==================== SERVICE FUNCTIONS ====================

/// GET /api/users - Lista paginada
pub async fn list_users(store: &JsonStore, query: &ListUsersQuery) -> Result<UsersPage, AppError> {
    let users = store.load_blocking().await?;
    Ok(paginate(users, query))
}

/// GET /api/users/{id}
pub async fn get_user(store: &JsonStore, raw_id: &str) -> Result<User, AppError> {
    let mut users = store.load_blocking().await?;
    let index = position_of(&users, raw_id).ok_or(AppError::NotFound)?;
    Ok(users.swap_remove(index))
}

/// POST /api/users - Atribui id, anexa e persiste
pub async fn create_user(
    store: &JsonStore,
    strategy: IdStrategy,
    body: Value,
) -> Result<User, AppError> {
    let mut users = store.load_blocking().await?;

    let mut user = User::from(body);
    let id = next_id(&users, strategy);
    user.set_id(id);

    if users.iter().any(|u| u.has_id(id as f64)) {
        log::warn!("⚠️ Assigned id {} collides with an existing user", id);
    }

    users.push(user.clone());
    store.save_blocking(users).await?;

    log::info!("✅ User {} created", id);
    Ok(user)
}

/// PUT /api/users/{id} - Merge raso com o body
pub async fn update_user(
    store: &JsonStore,
    raw_id: &str,
    body: &Value,
) -> Result<User, AppError> {
    let mut users = store.load_blocking().await?;
    let index = position_of(&users, raw_id).ok_or(AppError::NotFound)?;

    let updated = users[index].merged_with(body);
    users[index] = updated.clone();
    store.save_blocking(users).await?;

    log::info!("✅ User {} updated", raw_id);
    Ok(updated)
}

/// DELETE /api/users/{id} - Remove exatamente um registro
pub async fn delete_user(store: &JsonStore, raw_id: &str) -> Result<(), AppError> {
    let mut users = store.load_blocking().await?;
    let index = position_of(&users, raw_id).ok_or(AppError::NotFound)?;

    users.remove(index);
    store.save_blocking(users).await?;

    log::info!("✅ User {} deleted", raw_id);
    Ok(())
}
