use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Issue検索戦略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueLookup {
    /// 最新のオープンIssueを走査し、クライアント側でタイトルを絞り込む
    #[default]
    Scan,
    /// サーバー側のタイトル検索を使い、1件だけ取得する
    Search,
}

/// GitHub連携設定（sync / project-info にのみ必要）
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GithubConfig {
    /// トラッキングIssueを検索するリポジトリのオーナー
    pub owner: String,
    /// トラッキングIssueを検索するリポジトリ名
    pub repository: String,
    /// 対象ProjectV2のID
    pub project_id: String,
    pub start_date_field_id: String,
    pub end_date_field_id: String,
    pub estimate_field_id: String,
    /// Issue検索戦略
    #[serde(default)]
    pub issue_lookup: IssueLookup,
    /// ghコマンドに渡すトークン（未設定ならghの認証をそのまま使う）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// レジストリ文書のパス
    #[serde(default = "default_registry_path")]
    pub registry_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<GithubConfig>,
}

fn default_registry_path() -> String {
    "./.reposync/repos-config.json".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            registry_path: default_registry_path(),
            github: None,
        }
    }
}

impl Config {
    /// 設定ファイルを読み込む
    ///
    /// ファイルが存在しない場合は既定値を返す
    pub fn load(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path);
        if !Path::new(expanded.as_ref()).exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(expanded.as_ref())
            .with_context(|| format!("Failed to read config file: {path}"))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {path}"))?;
        Ok(config)
    }

    /// レジストリ文書のパス（チルダ展開済み）
    pub fn registry_path(&self) -> String {
        shellexpand::tilde(&self.registry_path).into_owned()
    }

    /// GitHub設定を取り出す
    pub fn github(&self) -> crate::error::Result<&GithubConfig> {
        self.github.as_ref().ok_or_else(|| {
            crate::error::ReposyncError::MissingConfig(
                "github section (owner, repository, project and field ids)".to_string(),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_full_config() {
        let mut file = NamedTempFile::new().unwrap();
        let json = r#"{
            "registry_path": "/data/repos-config.json",
            "github": {
                "owner": "myorg",
                "repository": "governance",
                "project_id": "PVT_kwDO123",
                "start_date_field_id": "PVTF_start",
                "end_date_field_id": "PVTF_end",
                "estimate_field_id": "PVTF_estimate",
                "issue_lookup": "search",
                "token": "ghp_secret"
            }
        }"#;
        file.write_all(json.as_bytes()).unwrap();

        let config = Config::load(file.path().to_str().unwrap()).unwrap();

        assert_eq!(config.registry_path, "/data/repos-config.json");
        let github = config.github().unwrap();
        assert_eq!(github.owner, "myorg");
        assert_eq!(github.issue_lookup, IssueLookup::Search);
        assert_eq!(github.token.as_deref(), Some("ghp_secret"));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = Config::load("/nonexistent/reposync/config.json").unwrap();

        assert_eq!(config.registry_path, "./.reposync/repos-config.json");
        assert!(config.github.is_none());
    }

    #[test]
    fn test_load_malformed_config_fails() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();

        assert!(Config::load(file.path().to_str().unwrap()).is_err());
    }

    #[test]
    fn test_issue_lookup_defaults_to_scan() {
        let json = r#"{
            "registry_path": "x.json",
            "github": {
                "owner": "myorg",
                "repository": "governance",
                "project_id": "PVT_kwDO123",
                "start_date_field_id": "a",
                "end_date_field_id": "b",
                "estimate_field_id": "c"
            }
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.github().unwrap().issue_lookup, IssueLookup::Scan);
    }

    #[test]
    fn test_github_missing_is_precondition_error() {
        let config = Config::default();
        assert!(matches!(
            config.github(),
            Err(crate::error::ReposyncError::MissingConfig(_))
        ));
    }
}
