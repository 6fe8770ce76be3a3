//! # Use Cases
//!
//! アプリケーションのユースケース定義

pub mod manage_registry;
pub mod render_report;
pub mod sync_fields;
