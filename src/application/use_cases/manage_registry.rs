//! # Manage Registry Use Case
//!
//! レジストリの参照・追加・削除・集計ユースケース

use std::sync::Arc;

use log::info;

use crate::domain::entities::repository_descriptor::{RegistryDocument, RepositoryDescriptor};
use crate::domain::repositories::registry_repository::RegistryRepository;
use crate::domain::services::estimates::{EstimateService, EstimateSummary};
use crate::error::{ReposyncError, Result};

/// レジストリへの追加入力
///
/// 注力領域はカンマ区切りの1文字列で受け取り、
/// 保存前に分割して前後の空白を取り除く
#[derive(Debug, Clone)]
pub struct NewRepository {
    pub name: String,
    pub organization: String,
    pub repository: String,
    pub focus: String,
    /// カンマ区切りの注力領域
    pub key_areas: String,
    pub estimate: Option<f64>,
}

/// レジストリ管理ユースケース
///
/// 変更操作は読み込み・変更・書き戻しを1つの論理ステップとして行う
pub struct ManageRegistryUseCase<R: RegistryRepository> {
    registry: Arc<R>,
}

impl<R: RegistryRepository> ManageRegistryUseCase<R> {
    /// 新しいユースケースを作成
    pub fn new(registry: Arc<R>) -> Self {
        Self { registry }
    }

    /// レジストリ文書全体を登録順で返す
    pub async fn list(&self) -> Result<RegistryDocument> {
        self.registry.load().await
    }

    /// リポジトリを末尾に追加する
    ///
    /// # Errors
    ///
    /// 同じ organization/repository ペアが既に存在する場合は
    /// 何も書き込まずに `RegistryConflict` を返す
    pub async fn add(&self, input: NewRepository) -> Result<RepositoryDescriptor> {
        let mut document = self.registry.load().await?;

        if document.contains(&input.organization, &input.repository) {
            return Err(ReposyncError::RegistryConflict {
                organization: input.organization,
                repository: input.repository,
            });
        }

        let key_areas = input
            .key_areas
            .split(',')
            .map(|area| area.trim().to_string())
            .collect();

        let descriptor = RepositoryDescriptor {
            name: input.name,
            organization: input.organization,
            repository: input.repository,
            focus: input.focus,
            key_areas,
            estimate: input.estimate,
        };

        document.repositories.push(descriptor.clone());
        self.registry.save(&document).await?;

        info!("Added repository {} to registry", descriptor.slug());
        Ok(descriptor)
    }

    /// organization/repository ペアで一意に決まるリポジトリを削除する
    ///
    /// # Errors
    ///
    /// 一致するリポジトリがない場合は何も書き込まずに
    /// `RegistryNotFound` を返す
    pub async fn remove(
        &self,
        organization: &str,
        repository: &str,
    ) -> Result<RepositoryDescriptor> {
        let mut document = self.registry.load().await?;

        let position = document
            .repositories
            .iter()
            .position(|repo| repo.matches(organization, repository))
            .ok_or_else(|| ReposyncError::RegistryNotFound {
                organization: organization.to_string(),
                repository: repository.to_string(),
            })?;

        let removed = document.repositories.remove(position);
        self.registry.save(&document).await?;

        info!("Removed repository {} from registry", removed.slug());
        Ok(removed)
    }

    /// 現在のレジストリから見積もりサマリーを導出する
    pub async fn estimate_summary(&self) -> Result<EstimateSummary> {
        let document = self.registry.load().await?;
        Ok(EstimateService::summarize(&document))
    }
}
