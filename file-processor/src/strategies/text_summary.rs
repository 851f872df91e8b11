use async_trait::async_trait;
use drive_sheet_utils::strings::snake_case_file_to_title_case;
use reqwest::Client;

use crate::download::{ensure_same_drive, DriveFilesApi};
use crate::error::ProcessingError;
use crate::metadata::{self, FileMetadata};
use crate::strategies::GOOGLE_DOC_MIME_TYPE;
use crate::strategy::FileProcessingStrategy;
use crate::worksheet::{CellValue, Worksheet};

/// Summarizes a plain-text file (or a Google Doc exported as text) in a single row:
/// name, title, line count, word count, first non-empty line.
pub struct TextSummaryStrategy {
    api: DriveFilesApi,
}

impl TextSummaryStrategy {
    pub fn new(api: DriveFilesApi) -> Self {
        Self { api }
    }
}

fn summarize(name: &str, text: &str) -> Vec<CellValue> {
    let first_line = text.lines().map(str::trim).find(|line| !line.is_empty()).unwrap_or("");
    vec![
        name.into(),
        snake_case_file_to_title_case(name).into(),
        text.lines().count().into(),
        text.split_whitespace().count().into(),
        first_line.into(),
    ]
}

#[async_trait]
impl FileProcessingStrategy for TextSummaryStrategy {
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

        let content = if metadata::mime_type(file) == Some(GOOGLE_DOC_MIME_TYPE) {
            self.api.export_file_content(session, access_token, id, "text/plain").await?
        } else {
            self.api.download_file_content(session, access_token, id).await?
        };
        let text = String::from_utf8(content).map_err(|e| ProcessingError::Parse(format!("{} is not UTF-8 text: {}", name, e)))?;

        ws.append_row(summarize(name, &text));
        Ok(())
    }
}
