use async_trait::async_trait;
use drive_sheet_utils::json::parse_json_rows_root;
use log::debug;
use reqwest::Client;
use serde_json::Value;

use crate::download::{ensure_same_drive, DriveFilesApi};
use crate::error::ProcessingError;
use crate::metadata::{self, FileMetadata};
use crate::strategy::FileProcessingStrategy;
use crate::worksheet::{CellValue, Worksheet};

/// One row per element of a JSON array document, file name first.
///
/// Object elements are laid out on shared columns: every key seen in the document gets a column,
/// in the order keys are first met, and elements missing a key leave that cell empty.
/// Scalar elements fill the first column after the name.
pub struct JsonRowsStrategy {
    api: DriveFilesApi,
}

impl JsonRowsStrategy {
    pub fn new(api: DriveFilesApi) -> Self {
        Self { api }
    }
}

fn to_rows(name: &str, items: &[Value]) -> Vec<Vec<CellValue>> {
    let mut columns: Vec<&str> = Vec::new();
    for fields in items.iter().filter_map(Value::as_object) {
        for key in fields.keys() {
            if !columns.contains(&key.as_str()) {
                columns.push(key);
            }
        }
    }

    items
        .iter()
        .map(|item| {
            let mut row = vec![CellValue::from(name)];
            match item {
                Value::Object(fields) => row.extend(columns.iter().map(|key| CellValue::from(fields.get(*key)))),
                scalar => row.push(CellValue::from(scalar)),
            }
            row
        })
        .collect()
}

#[async_trait]
impl FileProcessingStrategy for JsonRowsStrategy {
    async fn process(
        &self,
        file: &FileMetadata,
        session: &Client,
        ws: &mut (dyn Worksheet + Send),
        access_token: &str,
        drive_id: &str,
    ) -> Result<(), ProcessingError> {
        ensure_same_drive(file, drive_id)?;
        let name = metadata::file_name(file)?;
        let id = metadata::file_id(file)?;

        let content = self.api.download_file_content(session, access_token, id).await?;
        let items = parse_json_rows_root(content.as_slice()).map_err(ProcessingError::Parse)?;

        debug!("Appending {} json rows from {}", items.len(), name);
        for row in to_rows(name, &items) {
            ws.append_row(row);
        }
        Ok(())
    }
}
