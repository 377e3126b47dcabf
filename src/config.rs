use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::utils::AppError;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3076;
pub const DEFAULT_DATA_FILE: &str = "data.json";

/// Como o id de um novo usuário é calculado
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdStrategy {
    /// `len + 1`: compatível com o comportamento histórico, pode colidir
    /// depois de remoções
    #[default]
    Length,
    /// `max(ids) + 1`
    MaxPlusOne,
}

impl FromStr for IdStrategy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "length" | "len" => Ok(IdStrategy::Length),
            "max" | "max+1" => Ok(IdStrategy::MaxPlusOne),
            other => Err(AppError::ConfigError(format!(
                "ID_STRATEGY must be 'length' or 'max', got '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub data_file: PathBuf,
    pub id_strategy: IdStrategy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            id_strategy: IdStrategy::default(),
        }
    }
}

impl AppConfig {
    /// Lê a configuração do ambiente (o `.env` já deve ter sido carregado)
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| AppError::ConfigError(format!("invalid PORT '{}': {}", raw, e)))?,
            None => DEFAULT_PORT,
        };

        let data_file = lookup("DATA_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));

        let id_strategy = match lookup("ID_STRATEGY") {
            Some(raw) => raw.parse()?,
            None => IdStrategy::default(),
        };

        Ok(Self {
            host,
            port,
            data_file,
            id_strategy,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3076);
        assert_eq!(config.data_file, PathBuf::from("data.json"));
        assert_eq!(config.id_strategy, IdStrategy::Length);
        assert_eq!(config.bind_address(), "0.0.0.0:3076");
    }

    #[test]
    fn test_reads_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("DATA_FILE", "/tmp/users.json"),
            ("ID_STRATEGY", "max"),
        ]))
        .unwrap();

        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.data_file, PathBuf::from("/tmp/users.json"));
        assert_eq!(config.id_strategy, IdStrategy::MaxPlusOne);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(AppConfig::from_lookup(lookup_from(&[("PORT", "http")])).is_err());
        assert!(AppConfig::from_lookup(lookup_from(&[("ID_STRATEGY", "random")])).is_err());
    }
}
