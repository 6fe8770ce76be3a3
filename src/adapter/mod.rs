//! Adapter Layer
//!
//! 外部システム（GitHub, ファイルシステム）との統合

pub mod config;
pub mod github;
pub mod repositories;
