use std::path::Path;
use std::{env, fs};

fn read_credentials_from_file(source: &str) -> Result<String, String> {
    fs::read_to_string(Path::new(source))
        .map_err(|e| format!("Failed to read service account key file: {:#?}", e))
}

fn read_credentials_from_env(variable_name: &str) -> Result<String, String> {
    env::var(variable_name).map_err(|e| format!(
        "Environment variable {} is not set to hold gdrive credentials: {}",
        variable_name, e
    ))
}

/// `source` is a path to the service-account key file or, when no such file exists,
/// the name of an environment variable holding the key JSON.
pub(crate) fn read_credentials(source: &str) -> Result<String, String> {
    if Path::new(source).exists() {
        read_credentials_from_file(source)
    } else {
        read_credentials_from_env(source).map_err(|e| format!(
            "File not found for gdrive credentials: '{}'. {}",
            source, e
        ))
    }
}
