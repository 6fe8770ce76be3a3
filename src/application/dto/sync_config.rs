//! # Sync Configuration DTO
//!
//! フィールド同期設定のData Transfer Object

use crate::error::{ReposyncError, Result};

/// フィールド同期設定
///
/// トラッキングIssueの場所とプロジェクト・フィールドの識別子。
/// 構築時に一度だけ検証し、以降は検証済みとして扱う。
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Issueを検索するリポジトリのオーナー
    pub owner: String,
    /// Issueを検索するリポジトリ名
    pub repository: String,
    /// 対象プロジェクトのID
    pub project_id: String,
    /// 開始日フィールドのID
    pub start_date_field_id: String,
    /// 終了日フィールドのID
    pub end_date_field_id: String,
    /// 見積もりフィールドのID
    pub estimate_field_id: String,
}

impl SyncConfig {
    /// 新しい同期設定を作成する
    ///
    /// # Errors
    ///
    /// いずれかの識別子が空の場合に `MissingConfig` を返す
    pub fn new(
        owner: String,
        repository: String,
        project_id: String,
        start_date_field_id: String,
        end_date_field_id: String,
        estimate_field_id: String,
    ) -> Result<Self> {
        let required = [
            ("github.owner", &owner),
            ("github.repository", &repository),
            ("github.project_id", &project_id),
            ("github.start_date_field_id", &start_date_field_id),
            ("github.end_date_field_id", &end_date_field_id),
            ("github.estimate_field_id", &estimate_field_id),
        ];
        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(ReposyncError::MissingConfig(key.to_string()));
            }
        }

        Ok(Self {
            owner,
            repository,
            project_id,
            start_date_field_id,
            end_date_field_id,
            estimate_field_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_config(owner: &str) -> Result<SyncConfig> {
        SyncConfig::new(
            owner.to_string(),
            "governance".to_string(),
            "PVT_kwDO123".to_string(),
            "PVTF_start".to_string(),
            "PVTF_end".to_string(),
            "PVTF_estimate".to_string(),
        )
    }

    #[test]
    fn test_new_valid() {
        let config = create_config("myorg").unwrap();
        assert_eq!(config.owner, "myorg");
        assert_eq!(config.project_id, "PVT_kwDO123");
    }

    #[test]
    fn test_new_rejects_empty_field() {
        let result = create_config("");
        assert!(matches!(result, Err(ReposyncError::MissingConfig(key)) if key == "github.owner"));
    }

    #[test]
    fn test_new_rejects_blank_field() {
        let result = SyncConfig::new(
            "myorg".to_string(),
            "governance".to_string(),
            "   ".to_string(),
            "PVTF_start".to_string(),
            "PVTF_end".to_string(),
            "PVTF_estimate".to_string(),
        );
        assert!(
            matches!(result, Err(ReposyncError::MissingConfig(key)) if key == "github.project_id")
        );
    }
}
