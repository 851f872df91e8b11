mod csv_rows;
mod json_rows;
mod metadata_row;
mod text_summary;

pub use csv_rows::CsvRowsStrategy;
pub use json_rows::JsonRowsStrategy;
pub use metadata_row::MetadataRowStrategy;
pub use text_summary::TextSummaryStrategy;

pub const FOLDER_MIME_TYPE: &str = "application/vnd.google-apps.folder";
pub const GOOGLE_SHEET_MIME_TYPE: &str = "application/vnd.google-apps.spreadsheet";
pub const GOOGLE_DOC_MIME_TYPE: &str = "application/vnd.google-apps.document";

#[cfg(test)]
pub(crate) mod test_support {
    use crate::metadata::FileMetadata;
    use serde_json::Value;

    pub(crate) fn metadata(value: Value) -> FileMetadata {
        value.as_object().cloned().unwrap()
    }
}
