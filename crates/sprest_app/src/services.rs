use bytes::Bytes;
use sprest_domain::{RecycleBinItemId, SharepointFile, SharepointFolder};

/// Write operations against the content of a SharePoint site.
///
/// Every path is relative to the configured server-relative prefix.
#[async_trait::async_trait]
pub trait SharepointCommandService: Send + Sync {
    /// Deletes the folder at `path`.
    async fn delete_resource(&self, path: &str) -> anyhow::Result<()>;

    /// Deletes `file_name` inside the folder at `path`.
    async fn delete_file(&self, path: &str, file_name: &str) -> anyhow::Result<()>;

    /// Creates `folder_name` directly under the configured prefix.
    async fn create_folder(&self, folder_name: &str) -> anyhow::Result<SharepointFolder>;

    /// Creates `folder_name` inside the folder at `path`.
    async fn create_folder_in(
        &self,
        path: &str,
        folder_name: &str,
    ) -> anyhow::Result<SharepointFolder>;

    /// Uploads `content` as `file_name` into the folder at `path`, replacing
    /// any existing file with the same name.
    async fn upload_file(
        &self,
        path: &str,
        file_name: &str,
        content: Bytes,
    ) -> anyhow::Result<SharepointFile>;

    /// Moves the folder at `path` to the recycle bin.
    async fn recycle_resource(&self, path: &str) -> anyhow::Result<RecycleBinItemId>;

    /// Moves `file_name` inside the folder at `path` to the recycle bin.
    async fn recycle_file(&self, path: &str, file_name: &str)
    -> anyhow::Result<RecycleBinItemId>;

    /// Restores a recycled item to its original location.
    async fn restore_recycle_bin_resource(&self, id: RecycleBinItemId) -> anyhow::Result<()>;
}

pub trait Services: Send + Sync + 'static + Clone {
    type CommandService: SharepointCommandService;

    fn command_service(&self) -> &Self::CommandService;
}
