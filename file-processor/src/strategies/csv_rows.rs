use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::download::{ensure_same_drive, DriveFilesApi};
use crate::error::ProcessingError;
use crate::metadata::{self, FileMetadata};
use crate::strategies::GOOGLE_SHEET_MIME_TYPE;
use crate::strategy::FileProcessingStrategy;
use crate::worksheet::{CellValue, Worksheet};

/// Copies every record of a CSV file (or a Google Sheet exported as CSV) into the worksheet,
/// prefixed with the file name.
pub struct CsvRowsStrategy {
    api: DriveFilesApi,
    has_headers: bool,
}

impl CsvRowsStrategy {
    pub fn new(api: DriveFilesApi, has_headers: bool) -> Self {
        Self { api, has_headers }
    }

    fn parse_rows(&self, name: &str, content: &[u8]) -> Result<Vec<Vec<CellValue>>, ProcessingError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(self.has_headers)
            .flexible(true)
            .from_reader(content);

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let mut row = vec![CellValue::from(name)];
            row.extend(record.iter().map(CellValue::from));
            rows.push(row);
        }
        Ok(rows)
    }
}

#[async_trait]
impl FileProcessingStrategy for CsvRowsStrategy {
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

        let content = if metadata::mime_type(file) == Some(GOOGLE_SHEET_MIME_TYPE) {
            self.api.export_file_content(session, access_token, id, "text/csv").await?
        } else {
            self.api.download_file_content(session, access_token, id).await?
        };

        // Parse everything first so a bad record leaves no rows of this file behind.
        let rows = self.parse_rows(name, &content)?;
        debug!("Appending {} csv rows from {}", rows.len(), name);
        for row in rows {
            ws.append_row(row);
        }
        Ok(())
    }
}
