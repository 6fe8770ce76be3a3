//! GitHub Tracker Repository Implementation
//!
//! TrackerRepositoryのGitHub ProjectV2実装
//!
//! Issueの特定はクライアント側走査とサーバー側検索の2戦略を
//! 同じインターフェースの裏に持つ。どちらも完全一致したタイトルの
//! 最初の1件を選ぶ。

use async_trait::async_trait;
use log::info;
use serde_json::json;
use std::sync::Arc;

use crate::adapter::config::IssueLookup;
use crate::adapter::github::client::GraphQlExecutor;
use crate::adapter::github::models::{
    AddItemData, FieldNode, FindIssuesData, IssueNode, ProjectFieldsData, SearchData, SearchNode,
    ADD_ITEM_MUTATION, FIND_ISSUES_QUERY, PROJECT_FIELDS_QUERY, SEARCH_ISSUE_QUERY,
    UPDATE_FIELD_MUTATION,
};
use crate::domain::entities::field_update::FieldUpdate;
use crate::domain::repositories::tracker_repository::{
    ProjectField, ProjectItem, TrackedIssue, TrackerRepository,
};
use crate::error::{ReposyncError, Result};

/// 走査戦略で取得するページサイズ
const SCAN_PAGE_SIZE: u32 = 20;

/// GitHubトラッカーリポジトリ
pub struct GithubTrackerRepository<G: GraphQlExecutor> {
    executor: Arc<G>,
    lookup: IssueLookup,
}

impl<G: GraphQlExecutor> GithubTrackerRepository<G> {
    /// 新しいリポジトリを作成
    pub fn new(executor: Arc<G>, lookup: IssueLookup) -> Self {
        Self { executor, lookup }
    }

    /// 最新のオープンIssueを走査してタイトルで絞り込む
    async fn find_by_scan(
        &self,
        owner: &str,
        repository: &str,
        title: &str,
    ) -> Result<Option<IssueNode>> {
        let variables = json!({
            "owner": owner,
            "name": repository,
            "pageSize": SCAN_PAGE_SIZE,
        });

        let data = self
            .executor
            .execute(FIND_ISSUES_QUERY, variables)
            .await
            .map_err(|err| ReposyncError::IssueNotFound(format!("issue search failed: {err}")))?;

        let data: FindIssuesData = serde_json::from_value(data).map_err(|err| {
            ReposyncError::IssueNotFound(format!("unexpected issue search response: {err}"))
        })?;

        Ok(data
            .repository
            .issues
            .nodes
            .into_iter()
            .find(|node| node.title == title))
    }

    /// サーバー側のタイトル検索で1件だけ取得する
    async fn find_by_search(
        &self,
        owner: &str,
        repository: &str,
        title: &str,
    ) -> Result<Option<IssueNode>> {
        let search_query =
            format!(r#"repo:{owner}/{repository} is:issue is:open in:title "{title}""#);
        let variables = json!({ "searchQuery": search_query });

        let data = self
            .executor
            .execute(SEARCH_ISSUE_QUERY, variables)
            .await
            .map_err(|err| ReposyncError::IssueNotFound(format!("issue search failed: {err}")))?;

        let data: SearchData = serde_json::from_value(data).map_err(|err| {
            ReposyncError::IssueNotFound(format!("unexpected issue search response: {err}"))
        })?;

        // in:title は部分一致のため、完全一致をここで確認する
        Ok(data
            .search
            .nodes
            .into_iter()
            .filter_map(SearchNode::into_issue)
            .find(|node| node.title == title))
    }
}

#[async_trait]
impl<G: GraphQlExecutor> TrackerRepository for GithubTrackerRepository<G> {
    async fn find_issue(
        &self,
        owner: &str,
        repository: &str,
        title: &str,
    ) -> Result<TrackedIssue> {
        let node = match self.lookup {
            IssueLookup::Scan => self.find_by_scan(owner, repository, title).await?,
            IssueLookup::Search => self.find_by_search(owner, repository, title).await?,
        };

        let node = node.ok_or_else(|| {
            ReposyncError::IssueNotFound(format!(
                "no open issue titled '{title}' in {owner}/{repository}"
            ))
        })?;

        info!("Found issue: {} (ID: {})", node.title, node.id);

        Ok(TrackedIssue {
            id: node.id,
            number: node.number,
            title: node.title,
        })
    }

    async fn attach_issue(&self, project_id: &str, issue_id: &str) -> Result<ProjectItem> {
        let variables = json!({
            "projectId": project_id,
            "contentId": issue_id,
        });

        let data = self
            .executor
            .execute(ADD_ITEM_MUTATION, variables)
            .await
            .map_err(|err| ReposyncError::AttachmentFailed(err.to_string()))?;

        let data: AddItemData = serde_json::from_value(data).map_err(|err| {
            ReposyncError::AttachmentFailed(format!("unexpected attach response: {err}"))
        })?;

        let item_id = data.add_project_v2_item_by_id.item.id;
        info!("Added issue to project. Item ID: {item_id}");

        Ok(ProjectItem { id: item_id })
    }

    async fn update_field(
        &self,
        project_id: &str,
        item_id: &str,
        update: &FieldUpdate,
    ) -> Result<()> {
        let variables = json!({
            "projectId": project_id,
            "itemId": item_id,
            "fieldId": update.field_id,
            "value": update.value.to_payload(),
        });

        self.executor
            .execute(UPDATE_FIELD_MUTATION, variables)
            .await
            .map_err(|err| ReposyncError::FieldUpdateFailed {
                field: update.field_id.clone(),
                message: err.to_string(),
            })?;

        Ok(())
    }

    async fn list_project_fields(&self, project_id: &str) -> Result<Vec<ProjectField>> {
        let variables = json!({ "projectId": project_id });

        let data = self
            .executor
            .execute(PROJECT_FIELDS_QUERY, variables)
            .await
            .map_err(|err| ReposyncError::ProjectInfoFailed(err.to_string()))?;

        let data: ProjectFieldsData = serde_json::from_value(data).map_err(|err| {
            ReposyncError::ProjectInfoFailed(format!("unexpected project response: {err}"))
        })?;

        let node = data.node.ok_or_else(|| {
            ReposyncError::ProjectInfoFailed(format!("project not found: {project_id}"))
        })?;

        Ok(node
            .fields
            .nodes
            .into_iter()
            .filter_map(FieldNode::into_field)
            .collect())
    }
}
