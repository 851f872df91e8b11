use async_trait::async_trait;
use drive_sheet_utils::date::format_drive_timestamp;
use log::warn;
use reqwest::Client;

use crate::download::ensure_same_drive;
use crate::error::ProcessingError;
use crate::metadata::{self, FileMetadata};
use crate::strategy::FileProcessingStrategy;
use crate::worksheet::{CellValue, Worksheet};

/// Writes one row per file from its listing metadata: name, id, mime type, size, modified time, drive.
/// Fallback for file types no other strategy understands.
#[derive(Debug, Default)]
pub struct MetadataRowStrategy;

#[async_trait]
impl FileProcessingStrategy for MetadataRowStrategy {
    async fn process(
        &self,
        file: &FileMetadata,
        _session: &Client,
        ws: &mut (dyn Worksheet + Send),
        _access_token: &str,
        drive_id: &str,
    ) -> Result<(), ProcessingError> {
        ensure_same_drive(file, drive_id)?;
        let name = metadata::file_name(file)?;
        let id = metadata::file_id(file)?;

        let modified = metadata::modified_time(file).map(|raw| {
            format_drive_timestamp(raw).unwrap_or_else(|e| {
                warn!("Keeping unparsed modified time for {}: {}", name, e);
                raw.to_string()
            })
        });

        ws.append_row(vec![
            name.into(),
            id.into(),
            metadata::mime_type(file).into(),
            metadata::file_size(file).into(),
            CellValue::from(modified),
            drive_id.into(),
        ]);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::test_support::metadata;
    use crate::worksheet::MemoryWorksheet;
    use serde_json::json;

    #[tokio::test]
    async fn test_metadata_row() {
        let file = metadata(json!({
            "id": "f1",
            "name": "scan.pdf",
            "mimeType": "application/pdf",
            "size": "1024",
            "modifiedTime": "2024-09-30T14:05:09.000Z",
            "driveId": "drv1"
        }));
        let mut ws = MemoryWorksheet::new("Files");

        MetadataRowStrategy.process(&file, &Client::new(), &mut ws, "tok", "drv1").await.unwrap();

        assert_eq!(ws.rows(), &[vec![
            CellValue::Text("scan.pdf".to_string()),
            CellValue::Text("f1".to_string()),
            CellValue::Text("application/pdf".to_string()),
            CellValue::Int(1024),
            CellValue::Text("2024-09-30 14:05:09".to_string()),
            CellValue::Text("drv1".to_string()),
        ]]);
    }

    #[tokio::test]
    async fn test_optional_fields_are_empty() {
        let file = metadata(json!({"id": "f1", "name": "notes", "modifiedTime": "yesterday"}));
        let mut ws = MemoryWorksheet::new("Files");

        MetadataRowStrategy.process(&file, &Client::new(), &mut ws, "tok", "drv1").await.unwrap();

        let row = &ws.rows()[0];
        assert_eq!(row[2], CellValue::Empty);
        assert_eq!(row[3], CellValue::Empty);
        assert_eq!(row[4], CellValue::Text("yesterday".to_string()));
    }

    #[tokio::test]
    async fn test_missing_id() {
        let file = metadata(json!({"name": "orphan.bin"}));
        let mut ws = MemoryWorksheet::new("Files");

        let result = MetadataRowStrategy.process(&file, &Client::new(), &mut ws, "tok", "drv1").await;

        assert!(matches!(result, Err(ProcessingError::MissingField("id"))));
        assert!(ws.rows().is_empty());
    }

    #[tokio::test]
    async fn test_other_drive() {
        let file = metadata(json!({"id": "f1", "name": "a.pdf", "driveId": "drv2"}));
        let mut ws = MemoryWorksheet::new("Files");

        let result = MetadataRowStrategy.process(&file, &Client::new(), &mut ws, "tok", "drv1").await;

        assert!(matches!(result, Err(ProcessingError::DriveMismatch { .. })));
    }
}
