//! # Repository Descriptor Entity
//!
//! 追跡対象リポジトリのエンティティ

use serde::{Deserialize, Serialize};

/// 追跡対象リポジトリ
///
/// organization/repository ペアが自然キーとなり、
/// レジストリ内で重複してはならない
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RepositoryDescriptor {
    /// 表示名
    pub name: String,
    /// GitHub organization
    pub organization: String,
    /// リポジトリ名
    pub repository: String,
    /// 活動内容の説明
    pub focus: String,
    /// 注力領域（表示順を保持、重複許容）
    #[serde(rename = "keyAreas")]
    pub key_areas: Vec<String>,
    /// 月次見積もり（未設定と0は区別する）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimate: Option<f64>,
}

impl RepositoryDescriptor {
    /// organization/repository ペアが一致するか確認
    pub fn matches(&self, organization: &str, repository: &str) -> bool {
        self.organization == organization && self.repository == repository
    }

    /// "org/repo" 形式のスラッグ
    pub fn slug(&self) -> String {
        format!("{}/{}", self.organization, self.repository)
    }

    /// リポジトリのURL
    pub fn html_url(&self) -> String {
        format!("https://github.com/{}/{}", self.organization, self.repository)
    }

    /// 期間指定付きコミット履歴URL
    pub fn commits_url(&self, start_date: &str, end_date: &str) -> String {
        format!(
            "{}/commits/main/?since={}&until={}",
            self.html_url(),
            start_date,
            end_date
        )
    }

    /// 期間内に作成されたPull RequestsのURL
    pub fn pulls_url(&self, start_date: &str, end_date: &str) -> String {
        format!(
            "{}/pulls?q=is%3Apr+created%3A{}..{}",
            self.html_url(),
            start_date,
            end_date
        )
    }

    /// 期間内に作成されたIssueのURL
    pub fn issues_url(&self, start_date: &str, end_date: &str) -> String {
        format!(
            "{}/issues?q=is%3Aissue+created%3A{}..{}",
            self.html_url(),
            start_date,
            end_date
        )
    }

    /// スター一覧のURL
    pub fn stargazers_url(&self) -> String {
        format!("{}/stargazers", self.html_url())
    }
}

/// 永続化されるレジストリ全体
///
/// organization/repository ペアは列全体で一意であり、
/// 並び順は読み書きを通じて挿入順のまま保持される
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RegistryDocument {
    /// 登録順のリポジトリの列
    pub repositories: Vec<RepositoryDescriptor>,
}

impl RegistryDocument {
    /// organization/repository ペアで検索
    pub fn find(&self, organization: &str, repository: &str) -> Option<&RepositoryDescriptor> {
        self.repositories
            .iter()
            .find(|repo| repo.matches(organization, repository))
    }

    /// organization/repository ペアが登録済みか確認
    pub fn contains(&self, organization: &str, repository: &str) -> bool {
        self.find(organization, repository).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.repositories.is_empty()
    }

    pub fn len(&self) -> usize {
        self.repositories.len()
    }
}
