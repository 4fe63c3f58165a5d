use std::path::Path;

use bytes::Bytes;
use sprest_domain::{RecycleBinItemId, SharepointConfig, SharepointFile, SharepointFolder};

/// Public surface of the client. Paths are relative to the configured
/// server-relative prefix.
#[async_trait::async_trait]
pub trait API: Sync + Send {
    /// Configuration the client was built with.
    fn config(&self) -> SharepointConfig;

    async fn delete_resource(&self, path: &str) -> anyhow::Result<()>;

    async fn delete_file(&self, path: &str, file_name: &str) -> anyhow::Result<()>;

    async fn create_folder(&self, folder_name: &str) -> anyhow::Result<SharepointFolder>;

    async fn create_folder_in(
        &self,
        path: &str,
        folder_name: &str,
    ) -> anyhow::Result<SharepointFolder>;

    async fn upload_file(
        &self,
        path: &str,
        file_name: &str,
        content: Bytes,
    ) -> anyhow::Result<SharepointFile>;

    /// Reads `local_file` from disk and uploads it into `path`. The remote
    /// name defaults to the local file name.
    async fn upload_local_file(
        &self,
        path: &str,
        local_file: &Path,
        file_name: Option<&str>,
    ) -> anyhow::Result<SharepointFile>;

    async fn recycle_resource(&self, path: &str) -> anyhow::Result<RecycleBinItemId>;

    async fn recycle_file(&self, path: &str, file_name: &str)
    -> anyhow::Result<RecycleBinItemId>;

    async fn restore_recycle_bin_resource(&self, id: RecycleBinItemId) -> anyhow::Result<()>;
}
