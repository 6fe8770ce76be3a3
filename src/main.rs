//! Reposync - Repository Report Toolkit
//!
//! レジストリ管理、月次レポート生成、プロジェクトフィールド同期のエントリポイント

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;

use reposync::adapter::config::Config;
use reposync::driver::{Args, Workflow};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Load configuration
    let config = Config::load(&args.config)?;

    // Create workflow with injected dependencies
    let workflow = Workflow::new(config);

    if let Err(err) = workflow.execute(args).await {
        eprintln!("❌ {err}");
        std::process::exit(err.exit_code());
    }

    Ok(())
}
