use std::sync::Arc;

use anyhow::Context;
use bytes::Bytes;
use reqwest::Response;
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use sprest_app::{EnvironmentInfra, HttpInfra, SharepointCommandService};
use sprest_domain::{
    HeaderAction, RecycleBinItemId, ServerRelativeUrl, SharepointConfig, SharepointFile,
    SharepointFolder, odata_escape,
};
use tracing::{debug, info};

use crate::Error;
use crate::response::{decode, decode_recycle_id, validate};

enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Binary(Bytes),
}

/// Issues the site's write operations through the configured infrastructure.
pub struct SprestCommandService<F> {
    infra: Arc<F>,
}

impl<F: HttpInfra + EnvironmentInfra> SprestCommandService<F> {
    pub fn new(infra: Arc<F>) -> Self {
        Self { infra }
    }

    async fn post(
        &self,
        config: &SharepointConfig,
        api_path: &str,
        action: HeaderAction,
        body: RequestBody,
    ) -> anyhow::Result<Response> {
        let url = config.api_url(api_path)?;
        let mut headers = action.headers();
        let body = match body {
            RequestBody::Empty => Bytes::new(),
            RequestBody::Json(value) => {
                headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
                Bytes::from(serde_json::to_vec(&value)?)
            }
            RequestBody::Binary(content) => {
                headers.insert(
                    CONTENT_TYPE,
                    HeaderValue::from_static("application/octet-stream"),
                );
                content
            }
        };

        debug!(url = %url, action = %action, "Sending SharePoint request");
        let response = self.infra.http_post(&url, headers, body).await?;
        validate(response).await
    }
}

fn folder_endpoint(folder: &ServerRelativeUrl) -> String {
    format!(
        "_api/web/GetFolderByServerRelativeUrl('{}')",
        folder.odata_literal()
    )
}

fn file_endpoint(file: &ServerRelativeUrl) -> String {
    format!(
        "_api/web/GetFileByServerRelativeUrl('{}')",
        file.odata_literal()
    )
}

fn require(name: &'static str, value: &str) -> Result<(), Error> {
    if value.trim().is_empty() {
        return Err(Error::EmptyArgument(name));
    }
    Ok(())
}

#[async_trait::async_trait]
impl<F: HttpInfra + EnvironmentInfra> SharepointCommandService for SprestCommandService<F> {
    async fn delete_resource(&self, path: &str) -> anyhow::Result<()> {
        let config = self.infra.get_config();
        let folder = config.resolve(path);

        self.post(
            &config,
            &folder_endpoint(&folder),
            HeaderAction::DeleteResource,
            RequestBody::Empty,
        )
        .await
        .with_context(|| format!("Failed to delete folder {folder}"))?;

        info!(path = %folder, "Deleted folder");
        Ok(())
    }

    async fn delete_file(&self, path: &str, file_name: &str) -> anyhow::Result<()> {
        require("file name", file_name)?;
        let config = self.infra.get_config();
        let file = config.resolve(path).child(file_name);

        self.post(
            &config,
            &file_endpoint(&file),
            HeaderAction::DeleteResource,
            RequestBody::Empty,
        )
        .await
        .with_context(|| format!("Failed to delete file {file}"))?;

        info!(path = %file, "Deleted file");
        Ok(())
    }

    async fn create_folder(&self, folder_name: &str) -> anyhow::Result<SharepointFolder> {
        require("folder name", folder_name)?;
        let config = self.infra.get_config();
        let folder = config.resolve(folder_name);
        self.create(&config, folder).await
    }

    async fn create_folder_in(
        &self,
        path: &str,
        folder_name: &str,
    ) -> anyhow::Result<SharepointFolder> {
        require("folder name", folder_name)?;
        let config = self.infra.get_config();
        let folder = config.resolve(path).child(folder_name);
        self.create(&config, folder).await
    }

    async fn upload_file(
        &self,
        path: &str,
        file_name: &str,
        content: Bytes,
    ) -> anyhow::Result<SharepointFile> {
        require("file name", file_name)?;
        let config = self.infra.get_config();
        let folder = config.resolve(path);
        let size = content.len();
        let endpoint = format!(
            "{}/Files/add(overwrite=true,url='{}')",
            folder_endpoint(&folder),
            odata_escape(file_name)
        );

        let file = async {
            let response = self
                .post(
                    &config,
                    &endpoint,
                    HeaderAction::JsonNoMetadata,
                    RequestBody::Binary(content),
                )
                .await?;
            decode::<SharepointFile>(response).await
        }
        .await
        .with_context(|| format!("Failed to upload {file_name} to {folder}"))?;

        info!(path = %file.server_relative_url, size, "Uploaded file");
        Ok(file)
    }

    async fn recycle_resource(&self, path: &str) -> anyhow::Result<RecycleBinItemId> {
        let config = self.infra.get_config();
        let folder = config.resolve(path);
        let endpoint = format!("{}/recycle", folder_endpoint(&folder));

        let id = self
            .recycle(&config, &endpoint)
            .await
            .with_context(|| format!("Failed to recycle folder {folder}"))?;

        info!(path = %folder, id = %id, "Recycled folder");
        Ok(id)
    }

    async fn recycle_file(&self, path: &str, file_name: &str) -> anyhow::Result<RecycleBinItemId> {
        require("file name", file_name)?;
        let config = self.infra.get_config();
        let file = config.resolve(path).child(file_name);
        let endpoint = format!("{}/recycle", file_endpoint(&file));

        let id = self
            .recycle(&config, &endpoint)
            .await
            .with_context(|| format!("Failed to recycle file {file}"))?;

        info!(path = %file, id = %id, "Recycled file");
        Ok(id)
    }

    async fn restore_recycle_bin_resource(&self, id: RecycleBinItemId) -> anyhow::Result<()> {
        let config = self.infra.get_config();
        let endpoint = format!("_api/web/recyclebin('{id}')/restore");

        self.post(&config, &endpoint, HeaderAction::JsonNoMetadata, RequestBody::Empty)
            .await
            .with_context(|| format!("Failed to restore recycle bin item {id}"))?;

        info!(id = %id, "Restored recycle bin item");
        Ok(())
    }
}

impl<F: HttpInfra + EnvironmentInfra> SprestCommandService<F> {
    async fn create(
        &self,
        config: &SharepointConfig,
        folder: ServerRelativeUrl,
    ) -> anyhow::Result<SharepointFolder> {
        let body = serde_json::json!({ "ServerRelativeUrl": folder.as_str() });

        let created = async {
            let response = self
                .post(
                    config,
                    "_api/web/folders",
                    HeaderAction::JsonNoMetadata,
                    RequestBody::Json(body),
                )
                .await?;
            decode::<SharepointFolder>(response).await
        }
        .await
        .with_context(|| format!("Failed to create folder {folder}"))?;

        info!(path = %folder, "Created folder");
        Ok(created)
    }

    async fn recycle(
        &self,
        config: &SharepointConfig,
        endpoint: &str,
    ) -> anyhow::Result<RecycleBinItemId> {
        let response = self
            .post(config, endpoint, HeaderAction::JsonNoMetadata, RequestBody::Empty)
            .await?;
        decode_recycle_id(response).await
    }
}
