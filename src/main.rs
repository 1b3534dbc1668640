use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

use arena::api::ApiClient;
use arena::core::config::{CliOverrides, EnvOverrides, load_config, resolve};
use arena::storage::{ActivityLog, FileStore, SessionStore};
use arena::tui::{self, Services};
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(name = "arena", about = "Sports companion for the terminal")]
struct Args {
    /// Base URL of the Arena API (overrides ARENA_API_URL and the config file)
    #[arg(long)]
    api_url: Option<String>,

    /// Directory for the session and activity log
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to arena.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("arena.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = load_config().unwrap_or_else(|e| {
        log::warn!("{}; using defaults", e);
        Default::default()
    });
    let config = resolve(
        &file_config,
        &EnvOverrides::from_env(),
        &CliOverrides {
            api_base_url: args.api_url,
            data_dir: args.data_dir,
        },
    );
    log::info!(
        "Arena starting up (api: {}, data: {})",
        config.api_base_url,
        config.data_dir.display()
    );

    let store = Arc::new(FileStore::new(config.data_dir.clone()));
    let session = SessionStore::new(store.clone());
    let activities = ActivityLog::new(store);
    let client = ApiClient::from_config(&config, session);

    let status = client.check_auth_status().await;
    let pending = tui::run(Services { client, activities }, status)?;
    pending.flush().await;
    Ok(())
}
