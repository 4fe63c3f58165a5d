use anyhow::Result;
use clap::Parser;
use serde_json::{Value, json};
use sprest_api::{API, SprestAPI};
use sprest_infra::SprestEnvironmentInfra;
use sprest_services::init_tracing;
use tracing::debug;

mod cli;

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered file logs are flushed on exit
    let _guard = init_tracing(cli.verbose, cli.log_dir())?;

    let environment = SprestEnvironmentInfra::from_env_with_overrides(&cli.overrides())?;
    let api = SprestAPI::with_environment(environment)?;
    debug!(config = ?api.config(), "Client ready");

    let output = run(&api, cli.command).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

async fn run(api: &impl API, command: Command) -> Result<Value> {
    let output = match command {
        Command::Delete { path } => {
            api.delete_resource(&path).await?;
            json!({ "deleted": path })
        }
        Command::DeleteFile { path, file_name } => {
            api.delete_file(&path, &file_name).await?;
            json!({ "deleted": path, "file": file_name })
        }
        Command::Mkdir { name, parent: Some(parent) } => {
            serde_json::to_value(api.create_folder_in(&parent, &name).await?)?
        }
        Command::Mkdir { name, parent: None } => {
            serde_json::to_value(api.create_folder(&name).await?)?
        }
        Command::Upload { path, file, name } => {
            serde_json::to_value(api.upload_local_file(&path, &file, name.as_deref()).await?)?
        }
        Command::Recycle { path } => {
            let id = api.recycle_resource(&path).await?;
            json!({ "recycled": path, "id": id })
        }
        Command::RecycleFile { path, file_name } => {
            let id = api.recycle_file(&path, &file_name).await?;
            json!({ "recycled": path, "file": file_name, "id": id })
        }
        Command::Restore { id } => {
            api.restore_recycle_bin_resource(id).await?;
            json!({ "restored": id })
        }
    };
    Ok(output)
}
