//! # Report Period Entity
//!
//! レポート対象期間の導出値（永続化しない）

/// レポート対象期間
///
/// 呼び出し元が指定した月キーから毎回再計算される。
/// キャッシュや永続化はしない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPeriod {
    /// 対象月キー ("YYYY-MM")
    pub month_key: String,
    /// 対象月の表示名（例: "July 2025"）
    pub month_name: String,
    /// 前月キー ("YYYY-MM")
    pub previous_month_key: String,
    /// 前月の表示名
    pub previous_month_name: String,
    /// 対象月の末日（28〜31）
    pub last_day_of_month: u32,
    /// 期間の開始日 ("YYYY-MM-01")
    pub start_date: String,
    /// 期間の終了日 ("YYYY-MM-DD")
    pub end_date: String,
}

impl ReportPeriod {
    /// "開始日 to 終了日" 形式の期間ラベル
    pub fn range_label(&self) -> String {
        format!("{} to {}", self.start_date, self.end_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_label() {
        let period = ReportPeriod {
            month_key: "2025-07".to_string(),
            month_name: "July 2025".to_string(),
            previous_month_key: "2025-06".to_string(),
            previous_month_name: "June 2025".to_string(),
            last_day_of_month: 31,
            start_date: "2025-07-01".to_string(),
            end_date: "2025-07-31".to_string(),
        };

        assert_eq!(period.range_label(), "2025-07-01 to 2025-07-31");
    }
}
