//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::{Parser, Subcommand};

/// リポジトリレジストリの管理・月次レポート生成・プロジェクトフィールド同期のCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "reposync")]
#[command(
    about = "Track repositories, render monthly activity reports, sync GitHub project fields",
    long_about = None
)]
pub struct Args {
    /// Config file path
    #[arg(short, long, default_value = "./.reposync/config.json")]
    pub config: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show all configured repositories
    List,

    /// Add a new repository to the registry
    Add {
        /// Display name
        name: String,

        /// GitHub organization
        organization: String,

        /// Repository name
        repository: String,

        /// Focus description
        focus: String,

        /// Comma-separated key areas
        key_areas: String,

        /// Monthly estimate
        #[arg(long)]
        estimate: Option<f64>,
    },

    /// Remove a repository from the registry
    Remove {
        /// GitHub organization
        organization: String,

        /// Repository name
        repository: String,
    },

    /// Render the monthly activity report as Markdown
    Report {
        /// Target month (YYYY-MM)
        #[arg(long)]
        month: String,

        /// Previous month override (YYYY-MM)
        #[arg(long)]
        previous: Option<String>,
    },

    /// Push period and estimate fields onto the tracking issue's project item
    Sync {
        /// Target month (YYYY-MM) or explicit start date (YYYY-MM-DD)
        #[arg(long)]
        month: String,

        /// Explicit end date (YYYY-MM-DD); defaults to the end of the month
        #[arg(long)]
        end_date: Option<String>,

        /// Tracking issue title; defaults to "Monthly Report for {month}"
        #[arg(long)]
        title: Option<String>,
    },

    /// List the configured project's fields and their ids
    ProjectInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_default_config() {
        let args = Args::parse_from(["reposync", "list"]);
        assert_eq!(args.config, "./.reposync/config.json");
        assert!(matches!(args.command, Command::List));
    }

    #[test]
    fn test_args_custom_config() {
        let args = Args::parse_from(["reposync", "-c", "/custom/config.json", "list"]);
        assert_eq!(args.config, "/custom/config.json");
    }

    #[test]
    fn test_args_add() {
        let args = Args::parse_from([
            "reposync",
            "add",
            "My Project",
            "myorg",
            "myrepo",
            "Web development",
            "Frontend, Backend, API",
            "--estimate",
            "10",
        ]);

        match args.command {
            Command::Add {
                name,
                organization,
                repository,
                focus,
                key_areas,
                estimate,
            } => {
                assert_eq!(name, "My Project");
                assert_eq!(organization, "myorg");
                assert_eq!(repository, "myrepo");
                assert_eq!(focus, "Web development");
                assert_eq!(key_areas, "Frontend, Backend, API");
                assert_eq!(estimate, Some(10.0));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_args_remove() {
        let args = Args::parse_from(["reposync", "remove", "myorg", "myrepo"]);
        assert!(matches!(args.command, Command::Remove { .. }));
    }

    #[test]
    fn test_args_report_with_previous() {
        let args = Args::parse_from([
            "reposync",
            "report",
            "--month",
            "2025-07",
            "--previous",
            "2025-05",
        ]);

        match args.command {
            Command::Report { month, previous } => {
                assert_eq!(month, "2025-07");
                assert_eq!(previous.as_deref(), Some("2025-05"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_args_sync() {
        let args = Args::parse_from([
            "reposync",
            "sync",
            "--month",
            "2025-07",
            "--end-date",
            "2025-07-30",
        ]);

        match args.command {
            Command::Sync {
                month,
                end_date,
                title,
            } => {
                assert_eq!(month, "2025-07");
                assert_eq!(end_date.as_deref(), Some("2025-07-30"));
                assert_eq!(title, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_args_project_info() {
        let args = Args::parse_from(["reposync", "project-info"]);
        assert!(matches!(args.command, Command::ProjectInfo));
    }
}
