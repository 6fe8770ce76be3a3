//! GitHub Integration
//!
//! GraphQLクライアントとレスポンスモデル

pub mod client;
pub mod models;
