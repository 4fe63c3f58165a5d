mod config;
mod file;
mod folder;
mod header_action;
mod recycle_bin;
mod server_relative_url;

pub use config::*;
pub use file::*;
pub use folder::*;
pub use header_action::*;
pub use recycle_bin::*;
pub use server_relative_url::*;
