//! GitHub GraphQL Client Abstractions
//!
//! クライアントの抽象化と実装

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

#[cfg(test)]
use mockall::automock;

/// Trait for GitHub GraphQL calls
/// This enables mocking in tests while using the real client in production
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GraphQlExecutor: Send + Sync {
    /// Execute a GraphQL query/mutation and return the `data` object
    async fn execute(&self, query: &str, variables: Value) -> Result<Value>;
}

/// Real GraphQL client that shells out to the GitHub CLI
///
/// `gh api graphql --input -` に `{query, variables}` をそのまま渡す。
/// 認証はghに委譲し、トークンが設定されていればGH_TOKENで上書きする。
pub struct GhCliExecutor {
    token: Option<String>,
}

impl GhCliExecutor {
    pub fn new(token: Option<String>) -> Self {
        Self { token }
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[async_trait]
impl GraphQlExecutor for GhCliExecutor {
    async fn execute(&self, query: &str, variables: Value) -> Result<Value> {
        let body = serde_json::json!({ "query": query, "variables": variables });

        let mut command = Command::new("gh");
        command
            .args(["api", "graphql", "--input", "-"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(token) = &self.token {
            command.env("GH_TOKEN", token);
        }

        let mut child = command
            .spawn()
            .context("Failed to spawn gh; is the GitHub CLI installed?")?;

        let mut stdin = child.stdin.take().context("Failed to open gh stdin")?;
        stdin
            .write_all(body.to_string().as_bytes())
            .await
            .context("Failed to write GraphQL request body")?;
        drop(stdin);

        let output = child
            .wait_with_output()
            .await
            .context("Failed to wait for gh")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("gh api graphql failed: {}", stderr.trim());
        }

        let response: Value = serde_json::from_slice(&output.stdout)
            .context("Failed to parse gh output as JSON")?;

        response
            .get("data")
            .cloned()
            .context("GraphQL response has no data object")
    }
}
