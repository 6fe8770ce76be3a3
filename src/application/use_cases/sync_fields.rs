//! # Sync Fields Use Case
//!
//! トラッキングIssueの特定、プロジェクトへの追加、
//! 型付きフィールド更新の3段階同期プロトコル

use std::sync::Arc;

use chrono::NaiveDate;
use log::{info, warn};

use crate::application::dto::sync_config::SyncConfig;
use crate::domain::entities::field_update::{FieldKind, FieldUpdate, FieldValue};
use crate::domain::repositories::registry_repository::RegistryRepository;
use crate::domain::repositories::tracker_repository::{
    ProjectItem, TrackedIssue, TrackerRepository,
};
use crate::domain::services::estimates::EstimateService;
use crate::domain::services::period::PeriodCalculator;
use crate::error::{ReposyncError, Result};

/// 同期プロトコルの状態
///
/// `Searching` から `Found`、`Attached`、`Updated` へと順に遷移する。
/// 最初の2状態で失敗した場合は `Aborted` で打ち切る。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    Searching,
    Found,
    Attached,
    Updated,
    Aborted,
}

/// 同期の実行時入力
#[derive(Debug, Clone)]
pub struct SyncRequest {
    /// トラッキングIssueのタイトル（完全一致で検索）
    pub issue_title: String,
    /// 正規化済みの開始日 ("YYYY-MM-DD")
    pub start_date: String,
    /// 終了日（省略時は開始日の月末を導出）
    pub end_date: Option<String>,
}

/// 1フィールド分の更新結果
#[derive(Debug)]
pub struct FieldOutcome {
    pub kind: FieldKind,
    pub result: Result<()>,
}

impl FieldOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// フィールド同期の実行結果
///
/// フィールドごとの成否を個別に保持し、部分的な成功を観測可能にする
#[derive(Debug)]
pub struct SyncReport {
    pub state: SyncState,
    pub issue: TrackedIssue,
    pub item: ProjectItem,
    pub outcomes: Vec<FieldOutcome>,
}

impl SyncReport {
    /// 3フィールドすべての更新が成功したか
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(FieldOutcome::is_success)
    }

    /// 最初に失敗したフィールドのエラーを取り出す
    pub fn into_first_failure(self) -> Option<ReposyncError> {
        self.outcomes
            .into_iter()
            .find_map(|outcome| outcome.result.err())
    }
}

/// フィールド同期ユースケース
///
/// 見積もりは呼び出し元からではなく、常に現在のレジストリの
/// 集計値から取る。レジストリが読めない場合はリモート操作を始めない。
pub struct SyncFieldsUseCase<R: RegistryRepository, T: TrackerRepository> {
    registry: Arc<R>,
    tracker: Arc<T>,
    config: SyncConfig,
}

impl<R: RegistryRepository, T: TrackerRepository> SyncFieldsUseCase<R, T> {
    /// 新しいユースケースを作成
    pub fn new(registry: Arc<R>, tracker: Arc<T>, config: SyncConfig) -> Self {
        Self {
            registry,
            tracker,
            config,
        }
    }

    /// 同期プロトコルを実行する
    ///
    /// # Errors
    ///
    /// 日付が不正なら `InvalidPeriod`、レジストリが読めなければ
    /// `RegistryUnavailable`、Issue特定と追加の失敗はそれぞれ
    /// `IssueNotFound` / `AttachmentFailed` で打ち切る。
    /// フィールド更新の失敗は打ち切らず `SyncReport` に個別に残す。
    pub async fn execute(&self, request: SyncRequest) -> Result<SyncReport> {
        let start_date = NaiveDate::parse_from_str(&request.start_date, "%Y-%m-%d")
            .map_err(|_| ReposyncError::InvalidPeriod(request.start_date.clone()))?;

        let end_date = match &request.end_date {
            Some(explicit) => NaiveDate::parse_from_str(explicit, "%Y-%m-%d")
                .map_err(|_| ReposyncError::InvalidPeriod(explicit.clone()))?,
            None => {
                let derived = PeriodCalculator::end_of_month_date(&request.start_date)?;
                NaiveDate::parse_from_str(&derived, "%Y-%m-%d")
                    .map_err(|_| ReposyncError::InvalidPeriod(derived))?
            }
        };

        // 見積もり合計はレジストリの現在値から集計する
        let document = self.registry.load().await?;
        let summary = EstimateService::summarize(&document);

        let mut state = SyncState::Searching;
        info!(
            "Searching for issue '{}' in {}/{}",
            request.issue_title, self.config.owner, self.config.repository
        );

        let issue = self
            .tracker
            .find_issue(
                &self.config.owner,
                &self.config.repository,
                &request.issue_title,
            )
            .await
            .map_err(|err| {
                warn!("Sync {:?} -> {:?}: {}", state, SyncState::Aborted, err);
                err
            })?;
        state = SyncState::Found;
        info!("Found issue #{} (state {:?})", issue.number, state);

        let item = self
            .tracker
            .attach_issue(&self.config.project_id, &issue.id)
            .await
            .map_err(|err| {
                warn!("Sync {:?} -> {:?}: {}", state, SyncState::Aborted, err);
                err
            })?;
        state = SyncState::Attached;
        info!("Attached issue to project item {} (state {:?})", item.id, state);

        let start_update = FieldUpdate::new(
            self.config.start_date_field_id.clone(),
            FieldValue::Date(start_date),
        );
        let end_update = FieldUpdate::new(
            self.config.end_date_field_id.clone(),
            FieldValue::Date(end_date),
        );
        let estimate_update = FieldUpdate::new(
            self.config.estimate_field_id.clone(),
            FieldValue::Number(summary.total),
        );

        // 3フィールドの更新は互いに独立しており、並行して発行する。
        // 1つが失敗しても残りは続行し、成否はフィールドごとに記録する。
        let (start_result, end_result, estimate_result) = tokio::join!(
            self.tracker
                .update_field(&self.config.project_id, &item.id, &start_update),
            self.tracker
                .update_field(&self.config.project_id, &item.id, &end_update),
            self.tracker
                .update_field(&self.config.project_id, &item.id, &estimate_update),
        );

        let outcomes = vec![
            FieldOutcome {
                kind: FieldKind::StartDate,
                result: start_result,
            },
            FieldOutcome {
                kind: FieldKind::EndDate,
                result: end_result,
            },
            FieldOutcome {
                kind: FieldKind::Estimate,
                result: estimate_result,
            },
        ];

        state = SyncState::Updated;
        let succeeded = outcomes.iter().filter(|o| o.is_success()).count();
        info!(
            "Sync finished in state {:?} ({}/{} fields updated)",
            state,
            succeeded,
            outcomes.len()
        );

        Ok(SyncReport {
            state,
            issue,
            item,
            outcomes,
        })
    }
}
