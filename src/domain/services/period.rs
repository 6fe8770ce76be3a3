//! # Period Calculator
//!
//! カレンダー期間の純粋な計算ロジック
//!
//! レポート生成とフィールド同期の両方が同じ日付正規化を共有する。
//! すべて入力のみから決まる純粋関数であり、現在時刻は参照しない。

use chrono::{Datelike, Duration, NaiveDate};

use crate::domain::entities::report_period::ReportPeriod;
use crate::error::{ReposyncError, Result};

/// 期間計算サービス
pub struct PeriodCalculator;

impl PeriodCalculator {
    /// "YYYY-MM" 形式の月キーを (年, 月) に分解
    fn parse_month_key(month_key: &str) -> Result<(i32, u32)> {
        let invalid = || ReposyncError::InvalidPeriod(month_key.to_string());

        let (year_part, month_part) = month_key.split_once('-').ok_or_else(invalid)?;
        if year_part.len() != 4 || month_part.len() != 2 {
            return Err(invalid());
        }

        let year: i32 = year_part.parse().map_err(|_| invalid())?;
        let month: u32 = month_part.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }

        Ok((year, month))
    }

    /// 月キーをその月の1日に対応する日付へ変換
    fn first_day(month_key: &str) -> Result<NaiveDate> {
        let (year, month) = Self::parse_month_key(month_key)?;
        NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| ReposyncError::InvalidPeriod(month_key.to_string()))
    }

    /// 月キーを "July 2025" のような表示名へ変換
    pub fn month_name(month_key: &str) -> Result<String> {
        let date = Self::first_day(month_key)?;
        Ok(date.format("%B %Y").to_string())
    }

    /// 直前の月の月キーを返す（年境界をまたいで巻き戻す）
    pub fn previous_month_key(month_key: &str) -> Result<String> {
        let (year, month) = Self::parse_month_key(month_key)?;
        let (prev_year, prev_month) = if month == 1 {
            (year - 1, 12)
        } else {
            (year, month - 1)
        };
        Ok(format!("{prev_year:04}-{prev_month:02}"))
    }

    /// 対象月の末日（28〜31）を返す
    ///
    /// 翌月1日の前日を取ることで閏年を正しく扱う
    pub fn last_day_of_month(month_key: &str) -> Result<u32> {
        let (year, month) = Self::parse_month_key(month_key)?;
        let (next_year, next_month) = if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        };
        let first_of_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .ok_or_else(|| ReposyncError::InvalidPeriod(month_key.to_string()))?;
        Ok((first_of_next - Duration::days(1)).day())
    }

    /// "YYYY-MM" または "YYYY-MM-DD" をISO日付に正規化
    ///
    /// 月キーはその月の1日に展開し、完全な日付はそのまま通す
    pub fn normalize_date(input: &str) -> Result<String> {
        if Self::parse_month_key(input).is_ok() {
            return Ok(format!("{input}-01"));
        }

        if input.len() == 10 && NaiveDate::parse_from_str(input, "%Y-%m-%d").is_ok() {
            return Ok(input.to_string());
        }

        Err(ReposyncError::InvalidPeriod(input.to_string()))
    }

    /// 正規化済みの開始日から、同じ月の末日のISO日付を返す
    ///
    /// 終了日が明示されなかった場合の導出に使う
    pub fn end_of_month_date(start_date: &str) -> Result<String> {
        let date = NaiveDate::parse_from_str(start_date, "%Y-%m-%d")
            .map_err(|_| ReposyncError::InvalidPeriod(start_date.to_string()))?;
        let month_key = format!("{:04}-{:02}", date.year(), date.month());
        let last_day = Self::last_day_of_month(&month_key)?;
        Ok(format!("{month_key}-{last_day:02}"))
    }

    /// 月キーからレポート期間の導出値一式を組み立てる
    ///
    /// 前月キーが明示された場合はそれを使い、なければ計算する
    pub fn resolve(month_key: &str, previous_override: Option<&str>) -> Result<ReportPeriod> {
        let month_name = Self::month_name(month_key)?;
        let previous_month_key = match previous_override {
            Some(previous) => {
                Self::parse_month_key(previous)?;
                previous.to_string()
            }
            None => Self::previous_month_key(month_key)?,
        };
        let previous_month_name = Self::month_name(&previous_month_key)?;
        let last_day_of_month = Self::last_day_of_month(month_key)?;

        Ok(ReportPeriod {
            month_key: month_key.to_string(),
            month_name,
            previous_month_key,
            previous_month_name,
            last_day_of_month,
            start_date: format!("{month_key}-01"),
            end_date: format!("{month_key}-{last_day_of_month:02}"),
        })
    }
}
