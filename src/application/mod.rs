//! # Application Layer
//!
//! アプリケーション固有のビジネスフロー（ユースケース）を定義します。
//!
//! ## 構成要素
//!
//! - **use_cases**: ユースケース（レジストリ管理、レポート生成、フィールド同期）
//! - **dto**: レイヤー間のData Transfer Object

pub mod dto;
pub mod use_cases;
