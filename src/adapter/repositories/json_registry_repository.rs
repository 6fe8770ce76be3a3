//! JSON Registry Repository Implementation
//!
//! RegistryRepositoryのJSON実装（レジストリ文書をJSONファイルで永続化）

use async_trait::async_trait;
use log::info;
use std::fs;
use std::path::Path;

use crate::domain::entities::repository_descriptor::RegistryDocument;
use crate::domain::repositories::registry_repository::RegistryRepository;
use crate::error::{ReposyncError, Result};

/// JSONファイルベースのレジストリリポジトリ
pub struct JsonRegistryRepository {
    path: String,
}

impl JsonRegistryRepository {
    /// 新しいリポジトリを作成
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// ファイルから文書を読み込む（同期処理）
    ///
    /// ファイルが存在しない、または構造が壊れている場合は
    /// 既定値で補わずエラーにする
    fn load_sync(path: &str) -> Result<RegistryDocument> {
        let path_ref = Path::new(path);

        if !path_ref.exists() {
            return Err(ReposyncError::RegistryUnavailable(format!(
                "registry file not found: {path}"
            )));
        }

        let content = fs::read_to_string(path_ref).map_err(|err| {
            ReposyncError::RegistryUnavailable(format!("failed to read {path}: {err}"))
        })?;

        let document: RegistryDocument = serde_json::from_str(&content).map_err(|err| {
            ReposyncError::RegistryUnavailable(format!("failed to parse {path}: {err}"))
        })?;

        info!(
            "Loaded registry: {} repositories",
            document.repositories.len()
        );

        Ok(document)
    }

    /// ファイルに文書を保存する（同期処理）
    fn save_sync(path: &str, document: &RegistryDocument) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = Path::new(path).parent() {
            fs::create_dir_all(parent).map_err(|err| {
                ReposyncError::RegistryUnavailable(format!(
                    "failed to create registry directory: {err}"
                ))
            })?;
        }

        let json = serde_json::to_string_pretty(document).map_err(|err| {
            ReposyncError::RegistryUnavailable(format!("failed to serialize registry: {err}"))
        })?;

        fs::write(path, json).map_err(|err| {
            ReposyncError::RegistryUnavailable(format!("failed to write {path}: {err}"))
        })?;

        info!(
            "Saved registry: {} repositories",
            document.repositories.len()
        );

        Ok(())
    }
}

#[async_trait]
impl RegistryRepository for JsonRegistryRepository {
    async fn load(&self) -> Result<RegistryDocument> {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || Self::load_sync(&path))
            .await
            .map_err(|err| {
                ReposyncError::RegistryUnavailable(format!("blocking task failed: {err}"))
            })?
    }

    async fn save(&self, document: &RegistryDocument) -> Result<()> {
        let path = self.path.clone();
        let document = document.clone();
        tokio::task::spawn_blocking(move || Self::save_sync(&path, &document))
            .await
            .map_err(|err| {
                ReposyncError::RegistryUnavailable(format!("blocking task failed: {err}"))
            })?
    }
}
