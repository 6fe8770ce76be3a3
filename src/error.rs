//! # Error Types
//!
//! アプリケーション全体のエラー型定義

use thiserror::Error;

/// reposync のエラー型
///
/// 失敗は3つのカテゴリに大別される：
/// 前提条件エラー、対象が見つからないエラー、リモート操作の失敗。
/// カテゴリは終了コードで呼び出し元に伝える。
#[derive(Debug, Error)]
pub enum ReposyncError {
    /// 月キーまたは日付が解釈できない
    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    /// レジストリファイルが存在しない、または破損している
    #[error("Registry unavailable: {0}")]
    RegistryUnavailable(String),

    /// 同じ organization/repository ペアが既に登録されている
    #[error("Repository already exists in registry: {organization}/{repository}")]
    RegistryConflict {
        organization: String,
        repository: String,
    },

    /// 削除対象のリポジトリが登録されていない
    #[error("Repository not found in registry: {organization}/{repository}")]
    RegistryNotFound {
        organization: String,
        repository: String,
    },

    /// タイトルに一致するオープンIssueが見つからない
    #[error("Issue not found: {0}")]
    IssueNotFound(String),

    /// Issueのプロジェクトへの追加に失敗
    #[error("Failed to attach issue to project: {0}")]
    AttachmentFailed(String),

    /// フィールド更新の失敗（どのフィールドで失敗したかを保持）
    #[error("Failed to update field '{field}': {message}")]
    FieldUpdateFailed { field: String, message: String },

    /// プロジェクト情報の取得に失敗
    #[error("Failed to fetch project info: {0}")]
    ProjectInfoFailed(String),

    /// 必須設定が不足している
    #[error("Missing configuration: {0}")]
    MissingConfig(String),
}

impl ReposyncError {
    /// このエラーに対応する終了コードを返す
    ///
    /// 2 = 前提条件エラー、3 = 対象が見つからない、4 = リモート操作の失敗
    pub fn exit_code(&self) -> i32 {
        match self {
            ReposyncError::InvalidPeriod(_)
            | ReposyncError::RegistryUnavailable(_)
            | ReposyncError::MissingConfig(_) => 2,
            ReposyncError::RegistryConflict { .. }
            | ReposyncError::RegistryNotFound { .. }
            | ReposyncError::IssueNotFound(_) => 3,
            ReposyncError::AttachmentFailed(_)
            | ReposyncError::FieldUpdateFailed { .. }
            | ReposyncError::ProjectInfoFailed(_) => 4,
        }
    }
}

/// Result type using ReposyncError
pub type Result<T> = std::result::Result<T, ReposyncError>;
