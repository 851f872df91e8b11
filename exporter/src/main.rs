use crate::app_context::ExportContext;
use crate::batch::run_batch;
use crate::gdrive_provider::drive_hub_adapter::DriveHubAdapter;
use crate::gdrive_provider::file_listing::list_files_to_process;
use crate::gdrive_provider::google_drive_hub_adapter_builder::GoogleDriveHubAdapterBuilder;
use config::config::{load_app_config, AppConfig};
use config::resolve_file_path::resolve_config_file_path;
use drive_sheet_file_processor::download::DriveFilesApi;
use drive_sheet_file_processor::strategy_factory::StrategyFactory;
use drive_sheet_file_processor::MemoryWorksheet;
use log::{debug, info, warn};
use std::env;
use std::error::Error;

mod app_context;
mod batch;
mod config;
mod gdrive_provider;

fn get_app_config() -> Result<AppConfig, Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();
    let config_path = resolve_config_file_path(&args, &["config.json"])?;
    debug!("Using configuration file: {:?}", config_path);

    let config = load_app_config(&config_path)?;
    debug!("Loaded config: {:#?}", config);
    Ok(config)
}

fn get_drive_files_api(config: &AppConfig) -> DriveFilesApi {
    config
        .api_base_url
        .as_deref()
        .map(DriveFilesApi::new)
        .unwrap_or_default()
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = get_app_config()?;

    let hub = GoogleDriveHubAdapterBuilder::new()
        .with_credentials(config.gdrive_credentials_file.clone())
        .with_scope(config.scope.clone())
        .build()
        .await?;
    let access_token = hub.get_access_token().await?;

    let files = list_files_to_process(hub.as_ref(), &config.drive_id, config.folder_id.as_deref()).await?;
    info!("Found {} files to process in drive {}", files.len(), config.drive_id);

    let api = get_drive_files_api(&config);
    debug!("Downloading file content from {}", api.base_url());
    let context = ExportContext {
        session: reqwest::Client::new(),
        factory: StrategyFactory::with_defaults(api, config.csv_has_headers),
        access_token,
        drive_id: config.drive_id.clone(),
    };

    let mut ws = MemoryWorksheet::new(&config.worksheet_title);
    let summary = run_batch(&context, &files, &mut ws).await;

    ws.save_as_csv(&config.output_file)
        .map_err(|e| format!("Failed to save worksheet {} to {}: {}", ws.title(), config.output_file, e))?;
    info!("Saved {} rows to {}", ws.rows().len(), config.output_file);

    for (file_name, error) in &summary.failures {
        warn!("Not exported: {} ({})", file_name, error);
    }
    Ok(())
}
