use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::User;

pub const DEFAULT_PAGE: &str = "1";
pub const DEFAULT_LIMIT: &str = "5";

/// Query de `GET /api/users`. Os valores ficam como texto: nenhuma validação
/// numérica é feita antes da paginação.
#[derive(Debug, Clone, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListUsersQuery {
    /// Página (padrão 1)
    pub page: Option<String>,
    /// Itens por página (padrão 5)
    pub limit: Option<String>,
}

impl ListUsersQuery {
    /// Monta a query a partir dos pares crus da URL. Chaves repetidas (ou
    /// `page[]=`) viram um array no Express, que ao ser convertido para texto
    /// junta os valores com `,`: `?page=1&page=2` equivale a `page = "1,2"`.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut pages = Vec::new();
        let mut limits = Vec::new();

        for (key, value) in pairs {
            match key.strip_suffix("[]").unwrap_or(&key) {
                "page" => pages.push(value),
                "limit" => limits.push(value),
                _ => {}
            }
        }

        let join = |values: Vec<String>| (!values.is_empty()).then(|| values.join(","));
        Self {
            page: join(pages),
            limit: join(limits),
        }
    }

    pub fn page(&self) -> &str {
        self.page.as_deref().unwrap_or(DEFAULT_PAGE)
    }

    pub fn limit(&self) -> &str {
        self.limit.as_deref().unwrap_or(DEFAULT_LIMIT)
    }
}

/// Response da listagem paginada
#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UsersPage {
    pub users: Vec<User>,
    /// `null` quando o limite não gera um número finito
    #[schema(value_type = Option<i64>)]
    pub total_pages: Value,
    /// `null` quando `page` não começa com dígitos
    #[schema(value_type = Option<i64>)]
    pub current_page: Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_from_pairs_takes_single_values() {
        let query = ListUsersQuery::from_pairs(pairs(&[("page", "2"), ("limit", "3"), ("sort", "x")]));
        assert_eq!(query.page(), "2");
        assert_eq!(query.limit(), "3");
    }

    #[test]
    fn test_from_pairs_joins_repeated_keys() {
        let query = ListUsersQuery::from_pairs(pairs(&[("page", "1"), ("limit", "4"), ("page", "2")]));
        assert_eq!(query.page(), "1,2");
        assert_eq!(query.limit(), "4");

        let query = ListUsersQuery::from_pairs(pairs(&[("limit[]", "3")]));
        assert_eq!(query.limit(), "3");
    }

    #[test]
    fn test_from_pairs_falls_back_to_defaults() {
        let query = ListUsersQuery::from_pairs(Vec::new());
        assert_eq!(query.page(), DEFAULT_PAGE);
        assert_eq!(query.limit(), DEFAULT_LIMIT);
    }
}
