//! # Registry Repository Trait
//!
//! レジストリ文書の永続化を抽象化

use async_trait::async_trait;

use crate::domain::entities::repository_descriptor::RegistryDocument;
use crate::error::Result;

/// レジストリリポジトリ
///
/// レジストリ文書の読み書きを担当するリポジトリ。
/// 文書は1回の操作につきまとめて読み、まとめて書き戻す。
#[async_trait]
pub trait RegistryRepository: Send + Sync {
    /// レジストリ文書を読み込む
    ///
    /// # Errors
    ///
    /// ストアが存在しない、または構造が壊れている場合に
    /// `RegistryUnavailable` を返す。既定値による代替はしない。
    async fn load(&self) -> Result<RegistryDocument>;

    /// レジストリ文書全体を書き込む
    ///
    /// # Errors
    ///
    /// ストアへの書き込みに失敗した場合に `RegistryUnavailable` を返す
    async fn save(&self, document: &RegistryDocument) -> Result<()>;
}
