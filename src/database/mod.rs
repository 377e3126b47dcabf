use std::fs;
use std::path::{Path, PathBuf};

use crate::models::User;
use crate::utils::AppError;

/// Acesso ao arquivo JSON que guarda a coleção inteira de usuários.
///
/// Cada leitura carrega o arquivo todo e cada escrita sobrescreve o arquivo
/// todo. Não há lock nem rename atômico: escritas concorrentes seguem
/// "last write wins".
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lê e faz parse da coleção. Arquivo ausente ou inválido é erro.
    pub fn load(&self) -> Result<Vec<User>, AppError> {
        let raw = fs::read(&self.path).map_err(|e| {
            AppError::StorageError(format!("failed to read {}: {}", self.path.display(), e))
        })?;

        serde_json::from_slice(&raw).map_err(|e| {
            AppError::StorageError(format!("failed to parse {}: {}", self.path.display(), e))
        })
    }

    /// Sobrescreve o arquivo com a coleção completa (indentação de 2 espaços)
    pub fn save(&self, users: &[User]) -> Result<(), AppError> {
        let data = serde_json::to_string_pretty(users)?;
        fs::write(&self.path, data).map_err(|e| {
            AppError::StorageError(format!("failed to write {}: {}", self.path.display(), e))
        })?;

        log::debug!("💾 Saved {} users to {}", users.len(), self.path.display());
        Ok(())
    }

    /// `load` no pool de threads bloqueantes
    pub async fn load_blocking(&self) -> Result<Vec<User>, AppError> {
        let store = self.clone();
        tokio::task::spawn_blocking(move || store.load())
            .await
            .map_err(|e| AppError::StorageError(format!("load task failed: {}", e)))?
    }

    /// `save` no pool de threads bloqueantes
    pub async fn save_blocking(&self, users: Vec<User>) -> Result<(), AppError> {
        let store = self.clone();
        tokio::task::spawn_blocking(move || store.save(&users))
            .await
            .map_err(|e| AppError::StorageError(format!("save task failed: {}", e)))?
    }
}
