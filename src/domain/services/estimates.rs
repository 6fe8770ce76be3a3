//! # Estimate Service
//!
//! レジストリの見積もり集計

use crate::domain::entities::repository_descriptor::RegistryDocument;

/// 見積もり集計結果
#[derive(Debug, Clone, PartialEq)]
pub struct EstimateSummary {
    /// 見積もりの合計（未設定は0として加算）
    pub total: f64,
    /// 全リポジトリ数で割った平均（四捨五入、リポジトリなしは0）
    pub average: i64,
    /// 見積もりを明示的に持つリポジトリ数
    pub with_estimate: usize,
}

impl EstimateSummary {
    /// 見積もりデータが1件でも存在するか
    pub fn has_data(&self) -> bool {
        self.with_estimate > 0
    }
}

/// 見積もり集計サービス
pub struct EstimateService;

impl EstimateService {
    /// レジストリ文書から見積もりサマリーを導出
    pub fn summarize(document: &RegistryDocument) -> EstimateSummary {
        let total: f64 = document
            .repositories
            .iter()
            .filter_map(|repo| repo.estimate)
            .sum();

        let with_estimate = document
            .repositories
            .iter()
            .filter(|repo| repo.estimate.is_some())
            .count();

        let average = if document.is_empty() {
            0
        } else {
            (total / document.len() as f64).round() as i64
        };

        EstimateSummary {
            total,
            average,
            with_estimate,
        }
    }
}
