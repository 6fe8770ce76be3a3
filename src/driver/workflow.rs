//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション

use std::sync::Arc;

use chrono::Utc;
use log::info;

use crate::adapter::config::Config;
use crate::adapter::github::client::GhCliExecutor;
use crate::adapter::repositories::github_tracker_repository::GithubTrackerRepository;
use crate::adapter::repositories::json_registry_repository::JsonRegistryRepository;
use crate::application::dto::sync_config::SyncConfig;
use crate::application::use_cases::manage_registry::{ManageRegistryUseCase, NewRepository};
use crate::application::use_cases::render_report::RenderReportUseCase;
use crate::application::use_cases::sync_fields::{SyncFieldsUseCase, SyncRequest};
use crate::domain::repositories::tracker_repository::TrackerRepository;
use crate::domain::services::period::PeriodCalculator;
use crate::error::Result;

use super::cli::{Args, Command};

/// レジストリ管理・レポート生成・フィールド同期のワークフロー
pub struct Workflow {
    config: Config,
    registry_use_case: ManageRegistryUseCase<JsonRegistryRepository>,
}

impl Workflow {
    /// Create a new workflow instance with dependency injection
    pub fn new(config: Config) -> Self {
        let registry_repo = Arc::new(JsonRegistryRepository::new(config.registry_path()));
        let registry_use_case = ManageRegistryUseCase::new(registry_repo);

        Self {
            config,
            registry_use_case,
        }
    }

    /// Execute the requested command
    pub async fn execute(&self, args: Args) -> Result<()> {
        match args.command {
            Command::List => self.list().await,
            Command::Add {
                name,
                organization,
                repository,
                focus,
                key_areas,
                estimate,
            } => {
                self.add(NewRepository {
                    name,
                    organization,
                    repository,
                    focus,
                    key_areas,
                    estimate,
                })
                .await
            }
            Command::Remove {
                organization,
                repository,
            } => self.remove(&organization, &repository).await,
            Command::Report { month, previous } => self.report(&month, previous.as_deref()).await,
            Command::Sync {
                month,
                end_date,
                title,
            } => self.sync(&month, end_date, title).await,
            Command::ProjectInfo => self.project_info().await,
        }
    }

    async fn list(&self) -> Result<()> {
        let document = self.registry_use_case.list().await?;

        if document.is_empty() {
            println!("No repositories configured");
            return Ok(());
        }

        println!("\n📋 Configured Repositories:");
        println!("{}", "=".repeat(50));

        for (index, repo) in document.repositories.iter().enumerate() {
            println!("{}. {}", index + 1, repo.name);
            println!("   Organization: {}", repo.organization);
            println!("   Repository: {}", repo.repository);
            println!("   Focus: {}", repo.focus);
            println!("   Key Areas: {}", repo.key_areas.join(", "));
            if let Some(estimate) = repo.estimate {
                println!("   Estimate: {estimate}");
            }
            println!();
        }

        Ok(())
    }

    async fn add(&self, input: NewRepository) -> Result<()> {
        let descriptor = self.registry_use_case.add(input).await?;
        println!(
            "✓ Added repository: {} ({})",
            descriptor.name,
            descriptor.slug()
        );
        Ok(())
    }

    async fn remove(&self, organization: &str, repository: &str) -> Result<()> {
        self.registry_use_case.remove(organization, repository).await?;
        println!("✓ Removed repository: {organization}/{repository}");
        Ok(())
    }

    async fn report(&self, month: &str, previous: Option<&str>) -> Result<()> {
        let document = self.registry_use_case.list().await?;

        // フッターの生成日は情報提供のみで、期間計算には使わない
        let generated_on = Some(Utc::now().date_naive());
        let report = RenderReportUseCase::render(&document, month, previous, generated_on)?;

        println!("{report}");
        Ok(())
    }

    async fn sync(
        &self,
        month: &str,
        end_date: Option<String>,
        title: Option<String>,
    ) -> Result<()> {
        let github = self.config.github()?;
        let sync_config = SyncConfig::new(
            github.owner.clone(),
            github.repository.clone(),
            github.project_id.clone(),
            github.start_date_field_id.clone(),
            github.end_date_field_id.clone(),
            github.estimate_field_id.clone(),
        )?;

        let start_date = PeriodCalculator::normalize_date(month)?;
        let issue_title = title.unwrap_or_else(|| format!("Monthly Report for {month}"));
        info!("Syncing fields for issue '{issue_title}'");

        let executor = Arc::new(GhCliExecutor::new(github.token.clone()));
        let tracker = Arc::new(GithubTrackerRepository::new(executor, github.issue_lookup));
        let registry_repo = Arc::new(JsonRegistryRepository::new(self.config.registry_path()));
        let use_case = SyncFieldsUseCase::new(registry_repo, tracker, sync_config);

        let report = use_case
            .execute(SyncRequest {
                issue_title,
                start_date,
                end_date,
            })
            .await?;

        println!(
            "✓ Found issue: {} (#{})",
            report.issue.title, report.issue.number
        );
        println!("✓ Project item: {}", report.item.id);
        for outcome in &report.outcomes {
            match &outcome.result {
                Ok(()) => println!("✓ {} updated", outcome.kind.label()),
                Err(err) => println!("⚠ {} failed: {err}", outcome.kind.label()),
            }
        }

        // 部分的な失敗も終了コードで呼び出し元に伝える
        if let Some(failure) = report.into_first_failure() {
            return Err(failure);
        }

        println!("✓ Project fields updated!");
        Ok(())
    }

    async fn project_info(&self) -> Result<()> {
        let github = self.config.github()?;

        let executor = Arc::new(GhCliExecutor::new(github.token.clone()));
        let tracker = GithubTrackerRepository::new(executor, github.issue_lookup);
        let fields = tracker.list_project_fields(&github.project_id).await?;

        println!("Fields:");
        for field in &fields {
            println!("- {} ({}): {}", field.name, field.data_type, field.id);
        }

        println!("\nCopy these values into your config file:");
        let wanted = [
            ("Start date", "start_date_field_id"),
            ("End date", "end_date_field_id"),
            ("Estimate", "estimate_field_id"),
        ];
        for (label, key) in wanted {
            if let Some(field) = fields.iter().find(|f| f.name == label) {
                println!("  \"{}\": \"{}\"", key, field.id);
            }
        }

        Ok(())
    }
}
