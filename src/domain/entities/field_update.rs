//! # Field Update Entity
//!
//! プロジェクトフィールドへの型付き更新指示

use chrono::NaiveDate;
use serde_json::{json, Value};

/// 同期対象の固定フィールド種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    StartDate,
    EndDate,
    Estimate,
}

impl FieldKind {
    /// プロジェクト上のフィールド表示名
    pub fn label(&self) -> &'static str {
        match self {
            FieldKind::StartDate => "Start date",
            FieldKind::EndDate => "End date",
            FieldKind::Estimate => "Estimate",
        }
    }
}

/// 型付きフィールド値
///
/// 日付・数値フィールドにテキスト値を送らないことを型で保証する。
/// リモートサービスはフィールドの宣言型に一致したペイロードを要求する。
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Date(NaiveDate),
    Number(f64),
}

impl FieldValue {
    /// リモートサービスのmutation用valueペイロードを構築
    pub fn to_payload(&self) -> Value {
        match self {
            FieldValue::Text(text) => json!({ "text": text }),
            FieldValue::Date(date) => json!({ "date": date.format("%Y-%m-%d").to_string() }),
            FieldValue::Number(number) => json!({ "number": number }),
        }
    }
}

/// 1件のフィールド更新指示
///
/// 実行のたびに組み立てられ、永続化されない
#[derive(Debug, Clone, PartialEq)]
pub struct FieldUpdate {
    /// 更新対象フィールドのID
    pub field_id: String,
    /// 書き込む型付き値
    pub value: FieldValue,
}

impl FieldUpdate {
    pub fn new(field_id: impl Into<String>, value: FieldValue) -> Self {
        Self {
            field_id: field_id.into(),
            value,
        }
    }
}
