//! # Tracker Repository Trait
//!
//! 外部プロジェクト追跡サービスとのやり取りを抽象化

use async_trait::async_trait;

use crate::domain::entities::field_update::FieldUpdate;
use crate::error::Result;

/// 発見されたトラッキングIssue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedIssue {
    /// リモートサービス上のノードID
    pub id: String,
    /// Issue番号
    pub number: u64,
    /// Issueタイトル
    pub title: String,
}

/// Issueとプロジェクトの関連付け
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectItem {
    /// プロジェクトアイテムのノードID
    pub id: String,
}

/// プロジェクトのフィールド定義
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectField {
    pub id: String,
    pub name: String,
    pub data_type: String,
}

/// トラッカーリポジトリ
///
/// Issue検索、プロジェクトへの追加、型付きフィールド更新の
/// 3つのリモート操作を担当する
#[async_trait]
pub trait TrackerRepository: Send + Sync {
    /// タイトル完全一致（大文字小文字区別）でオープンIssueを検索
    ///
    /// # Errors
    ///
    /// 一致するIssueがない場合に `IssueNotFound` を返す
    async fn find_issue(&self, owner: &str, repository: &str, title: &str)
        -> Result<TrackedIssue>;

    /// Issueをプロジェクトに追加する
    ///
    /// 既に追加済みの場合は同じアイテムが返る（冪等）
    ///
    /// # Errors
    ///
    /// 追加に失敗した場合に `AttachmentFailed` を返す
    async fn attach_issue(&self, project_id: &str, issue_id: &str) -> Result<ProjectItem>;

    /// プロジェクトアイテムの1フィールドを型付きで更新する
    ///
    /// # Errors
    ///
    /// 更新に失敗した場合に `FieldUpdateFailed` を返す
    async fn update_field(
        &self,
        project_id: &str,
        item_id: &str,
        update: &FieldUpdate,
    ) -> Result<()>;

    /// プロジェクトのフィールド一覧を取得する
    async fn list_project_fields(&self, project_id: &str) -> Result<Vec<ProjectField>>;
}
