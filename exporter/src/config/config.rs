use serde::Deserialize;
use std::error::Error;
use std::fs::File;

pub const DRIVE_READONLY_SCOPE: &str = "https://www.googleapis.com/auth/drive.readonly";

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    #[serde(rename = "gdriveCredentialsFile")]
    pub gdrive_credentials_file: String,
    #[serde(rename = "driveId")]
    pub drive_id: String,
    #[serde(rename = "folderId", default)]
    pub folder_id: Option<String>,
    #[serde(rename = "outputFile")]
    pub output_file: String,
    #[serde(rename = "worksheetTitle", default = "default_worksheet_title")]
    pub worksheet_title: String,
    #[serde(rename = "apiBaseUrl", default)]
    pub api_base_url: Option<String>,
    #[serde(rename = "scope", default = "default_scope")]
    pub scope: String,
    #[serde(rename = "csvHasHeaders", default = "default_csv_has_headers")]
    pub csv_has_headers: bool,
}

fn default_worksheet_title() -> String {
    "Files".to_string()
}

fn default_scope() -> String {
    DRIVE_READONLY_SCOPE.to_string()
}

fn default_csv_has_headers() -> bool {
    true
}

pub fn load_app_config(config_path: &str) -> Result<AppConfig, Box<dyn Error>> {
    let file = File::open(config_path).map_err(|e| format!("Failed to open config file {}: {}", config_path, e))?;
    let config: AppConfig = serde_json::from_reader(file).map_err(|e| format!("Invalid config file {}: {}", config_path, e))?;
    if config.drive_id.trim().is_empty() {
        return Err(format!("Config file {} has an empty driveId", config_path).into());
    }
    Ok(config)
}
