use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use bytes::Bytes;
use sprest_app::{EnvironmentInfra, Services, SharepointCommandService};
use sprest_domain::{RecycleBinItemId, SharepointConfig, SharepointFile, SharepointFolder};
use sprest_infra::{SprestEnvironmentInfra, SprestInfra};
use sprest_services::SprestServices;
use tracing::debug;

use crate::API;

pub struct SprestAPI<S, F> {
    services: Arc<S>,
    infra: Arc<F>,
}

impl<S, F> SprestAPI<S, F> {
    pub fn new(services: Arc<S>, infra: Arc<F>) -> Self {
        Self { services, infra }
    }
}

impl SprestAPI<SprestServices<SprestInfra>, SprestInfra> {
    pub fn init(config: SharepointConfig) -> anyhow::Result<Self> {
        Self::with_environment(SprestEnvironmentInfra::new(config))
    }

    /// Builds a client from `SHAREPOINT_*` environment variables and `.env`.
    pub fn from_env() -> anyhow::Result<Self> {
        let environment = SprestEnvironmentInfra::from_env()?;
        Self::with_environment(environment)
    }

    pub fn with_environment(environment: SprestEnvironmentInfra) -> anyhow::Result<Self> {
        let infra = Arc::new(SprestInfra::new(environment)?);
        let services = Arc::new(SprestServices::new(infra.clone()));
        Ok(Self::new(services, infra))
    }
}

#[async_trait::async_trait]
impl<S: Services, F: EnvironmentInfra + 'static> API for SprestAPI<S, F> {
    fn config(&self) -> SharepointConfig {
        self.infra.get_config()
    }

    async fn delete_resource(&self, path: &str) -> anyhow::Result<()> {
        self.services.command_service().delete_resource(path).await
    }

    async fn delete_file(&self, path: &str, file_name: &str) -> anyhow::Result<()> {
        self.services
            .command_service()
            .delete_file(path, file_name)
            .await
    }

    async fn create_folder(&self, folder_name: &str) -> anyhow::Result<SharepointFolder> {
        self.services
            .command_service()
            .create_folder(folder_name)
            .await
    }

    async fn create_folder_in(
        &self,
        path: &str,
        folder_name: &str,
    ) -> anyhow::Result<SharepointFolder> {
        self.services
            .command_service()
            .create_folder_in(path, folder_name)
            .await
    }

    async fn upload_file(
        &self,
        path: &str,
        file_name: &str,
        content: Bytes,
    ) -> anyhow::Result<SharepointFile> {
        self.services
            .command_service()
            .upload_file(path, file_name, content)
            .await
    }

    async fn upload_local_file(
        &self,
        path: &str,
        local_file: &Path,
        file_name: Option<&str>,
    ) -> anyhow::Result<SharepointFile> {
        let file_name = match file_name {
            Some(name) => name.to_string(),
            None => local_file
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .with_context(|| format!("{} has no file name", local_file.display()))?,
        };

        let content = tokio::fs::read(local_file)
            .await
            .with_context(|| format!("Failed to read {}", local_file.display()))?;
        debug!(path = %local_file.display(), size = content.len(), "Read local file for upload");

        self.upload_file(path, &file_name, Bytes::from(content)).await
    }

    async fn recycle_resource(&self, path: &str) -> anyhow::Result<RecycleBinItemId> {
        self.services.command_service().recycle_resource(path).await
    }

    async fn recycle_file(
        &self,
        path: &str,
        file_name: &str,
    ) -> anyhow::Result<RecycleBinItemId> {
        self.services
            .command_service()
            .recycle_file(path, file_name)
            .await
    }

    async fn restore_recycle_bin_resource(&self, id: RecycleBinItemId) -> anyhow::Result<()> {
        self.services
            .command_service()
            .restore_recycle_bin_resource(id)
            .await
    }
}
