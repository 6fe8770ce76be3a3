//! Workflow Integration Tests
//!
//! Workflowの統合テスト

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use reposync::adapter::config::Config;
use reposync::driver::cli::{Args, Command};
use reposync::driver::Workflow;
use reposync::error::ReposyncError;

/// テスト用のConfigファイルとレジストリを作成
fn create_test_config(dir: &Path) -> String {
    let registry_path = dir.join("repos-config.json");
    let registry_content = r#"{
  "repositories": [
    {
      "name": "Treasury Guild",
      "organization": "treasuryguild",
      "repository": "treasury-apis",
      "focus": "Treasury management",
      "keyAreas": ["Payments", "Reporting"],
      "estimate": 100.0
    },
    {
      "name": "MeshJS",
      "organization": "MeshJS",
      "repository": "governance",
      "focus": "Decentralized reputation",
      "keyAreas": ["Dashboards"]
    }
  ]
}"#;
    fs::write(&registry_path, registry_content).unwrap();

    let config_path = dir.join("config.json");
    let config_content = format!(
        r#"{{
  "registry_path": "{}"
}}"#,
        registry_path.to_string_lossy()
    );
    fs::write(&config_path, config_content).unwrap();
    config_path.to_string_lossy().to_string()
}

#[tokio::test]
async fn test_workflow_list() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = create_test_config(temp_dir.path());

    let config = Config::load(&config_path).unwrap();
    let workflow = Workflow::new(config);

    let args = Args {
        config: config_path,
        command: Command::List,
    };

    let result = workflow.execute(args).await;
    assert!(result.is_ok(), "List should succeed, but got: {result:?}");
}

#[tokio::test]
async fn test_workflow_report() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = create_test_config(temp_dir.path());

    let config = Config::load(&config_path).unwrap();
    let workflow = Workflow::new(config);

    let args = Args {
        config: config_path,
        command: Command::Report {
            month: "2025-07".to_string(),
            previous: None,
        },
    };

    let result = workflow.execute(args).await;
    assert!(result.is_ok(), "Report should succeed, but got: {result:?}");
}

#[tokio::test]
async fn test_workflow_report_invalid_month() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = create_test_config(temp_dir.path());

    let config = Config::load(&config_path).unwrap();
    let workflow = Workflow::new(config);

    let args = Args {
        config: config_path,
        command: Command::Report {
            month: "not-a-month".to_string(),
            previous: None,
        },
    };

    let result = workflow.execute(args).await;
    assert!(matches!(result, Err(ReposyncError::InvalidPeriod(_))));
}

#[tokio::test]
async fn test_workflow_add_then_remove() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = create_test_config(temp_dir.path());

    let config = Config::load(&config_path).unwrap();
    let workflow = Workflow::new(config);

    let add = Args {
        config: config_path.clone(),
        command: Command::Add {
            name: "Sidan Labs".to_string(),
            organization: "sidan-lab".to_string(),
            repository: "DRep".to_string(),
            focus: "Decentralized reputation".to_string(),
            key_areas: "Data fetching, Dashboards".to_string(),
            estimate: Some(25.0),
        },
    };
    workflow.execute(add).await.unwrap();

    let remove = Args {
        config: config_path,
        command: Command::Remove {
            organization: "sidan-lab".to_string(),
            repository: "DRep".to_string(),
        },
    };
    workflow.execute(remove).await.unwrap();
}

#[tokio::test]
async fn test_workflow_sync_without_github_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = create_test_config(temp_dir.path());

    let config = Config::load(&config_path).unwrap();
    let workflow = Workflow::new(config);

    let args = Args {
        config: config_path,
        command: Command::Sync {
            month: "2025-07".to_string(),
            end_date: None,
            title: None,
        },
    };

    // GitHub設定がなければリモートに触る前に前提条件エラーで止まる
    let result = workflow.execute(args).await;
    assert!(matches!(result, Err(ReposyncError::MissingConfig(_))));
}

#[tokio::test]
async fn test_workflow_list_missing_registry_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.json");
    let config_content = r#"{
  "registry_path": "/nonexistent/repos-config.json"
}"#;
    fs::write(&config_path, config_content).unwrap();

    let config = Config::load(config_path.to_str().unwrap()).unwrap();
    let workflow = Workflow::new(config);

    let args = Args {
        config: config_path.to_string_lossy().to_string(),
        command: Command::List,
    };

    let result = workflow.execute(args).await;
    assert!(matches!(
        result,
        Err(ReposyncError::RegistryUnavailable(_))
    ));
}
