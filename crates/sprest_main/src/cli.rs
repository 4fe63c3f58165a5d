use std::collections::HashMap;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use sprest_api::RecycleBinItemId;
use sprest_infra::{ACCESS_TOKEN_VAR, SERVER_RELATIVE_URL_VAR, SITE_URL_VAR};

#[derive(Parser, Debug)]
#[command(
    version = env!("CARGO_PKG_VERSION"),
    about = "Manage files and folders on a SharePoint site"
)]
pub struct Cli {
    /// Absolute URL of the SharePoint site.
    ///
    /// Overrides SHAREPOINT_SITE_URL.
    #[arg(long, global = true)]
    pub site_url: Option<String>,

    /// Prefix prepended to every path, usually the document library.
    ///
    /// Overrides SHAREPOINT_SERVER_RELATIVE_URL.
    #[arg(long, global = true)]
    pub server_relative_url: Option<String>,

    /// Bearer token used to authenticate against the site.
    ///
    /// Overrides SHAREPOINT_ACCESS_TOKEN.
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Enable verbose logging output.
    #[arg(long, short = 'v', default_value_t = false, global = true)]
    pub verbose: bool,

    /// Also write JSON logs, rotated daily, into this directory.
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    /// Write JSON logs into the default cache directory.
    #[arg(long, default_value_t = false, global = true, conflicts_with = "log_dir")]
    pub log: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Delete a folder.
    Delete {
        /// Folder path, relative to the configured prefix.
        path: String,
    },

    /// Delete a file inside a folder.
    DeleteFile {
        /// Folder path, relative to the configured prefix.
        path: String,
        /// Name of the file to delete.
        file_name: String,
    },

    /// Create a folder.
    Mkdir {
        /// Name of the new folder.
        name: String,
        /// Parent folder; defaults to the configured prefix itself.
        #[arg(long)]
        parent: Option<String>,
    },

    /// Upload a local file, replacing any existing file with the same name.
    Upload {
        /// Destination folder, relative to the configured prefix.
        path: String,
        /// Local file to upload.
        file: PathBuf,
        /// Remote file name; defaults to the local file name.
        #[arg(long)]
        name: Option<String>,
    },

    /// Move a folder to the recycle bin.
    Recycle {
        /// Folder path, relative to the configured prefix.
        path: String,
    },

    /// Move a file to the recycle bin.
    RecycleFile {
        /// Folder path, relative to the configured prefix.
        path: String,
        /// Name of the file to recycle.
        file_name: String,
    },

    /// Restore an item from the recycle bin.
    Restore {
        /// Identifier returned by `recycle` or `recycle-file`.
        id: RecycleBinItemId,
    },
}

impl Cli {
    /// Connection settings given on the command line, keyed by the
    /// environment variable they replace.
    pub fn overrides(&self) -> HashMap<&'static str, String> {
        [
            (SITE_URL_VAR, &self.site_url),
            (SERVER_RELATIVE_URL_VAR, &self.server_relative_url),
            (ACCESS_TOKEN_VAR, &self.token),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.clone().map(|value| (key, value)))
        .collect()
    }

    pub fn log_dir(&self) -> Option<PathBuf> {
        if self.log_dir.is_some() {
            return self.log_dir.clone();
        }
        if self.log {
            return dirs::cache_dir().map(|dir| dir.join("sprest").join("logs"));
        }
        None
    }
}
