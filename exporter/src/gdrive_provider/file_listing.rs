use drive_sheet_file_processor::FileMetadata;
use google_drive3::api::File;
use log::{debug, warn};
use serde_json::Value;
use crate::gdrive_provider::drive_hub_adapter::DriveHubAdapter;
use crate::gdrive_provider::google_drive_utils::build_files_query;

/// Files of the drive (or of one folder in it) as metadata maps, ordered by name.
pub async fn list_files_to_process(
    hub: &(dyn DriveHubAdapter + Send + Sync),
    drive_id: &str,
    folder_id: Option<&str>,
) -> Result<Vec<FileMetadata>, String> {
    let files = hub.fetch_drive_files(drive_id.to_string(), build_files_query(folder_id)).await?;

    let mut listed: Vec<FileMetadata> = files.into_iter().filter_map(file_to_metadata).collect();
    listed.sort_by(|a, b| name_of(a).cmp(name_of(b)));
    Ok(listed)
}

fn name_of(file: &FileMetadata) -> &str {
    file.get("name").and_then(Value::as_str).unwrap_or_default()
}

fn file_to_metadata(file: File) -> Option<FileMetadata> {
    if file.id.is_none() || file.name.is_none() {
        debug!("File object passed from gdrive api has no id or name. Skipping.");
        return None;
    }
    match serde_json::to_value(&file) {
        Ok(Value::Object(fields)) => Some(fields),
        Ok(other) => {
            warn!("File {:?} did not serialize to an object: {}", file.name, other);
            None
        }
        Err(e) => {
            warn!("Failed to convert file {:?} to metadata: {}", file.name, e);
            None
        }
    }
}
