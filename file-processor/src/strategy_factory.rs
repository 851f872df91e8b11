use std::collections::HashMap;
use std::sync::Arc;

use drive_sheet_utils::strings::file_extension;

use crate::download::DriveFilesApi;
use crate::metadata::{self, FileMetadata};
use crate::strategies::{
    CsvRowsStrategy, JsonRowsStrategy, MetadataRowStrategy, TextSummaryStrategy, FOLDER_MIME_TYPE,
    GOOGLE_DOC_MIME_TYPE, GOOGLE_SHEET_MIME_TYPE,
};
use crate::strategy::FileProcessingStrategy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Csv,
    Json,
    Text,
    GoogleSheet,
    GoogleDoc,
    Folder,
    Other,
}

impl FileKind {
    /// Mime type wins; the extension is only consulted for generic or missing mime types.
    pub fn of(file: &FileMetadata) -> FileKind {
        match metadata::mime_type(file) {
            Some(FOLDER_MIME_TYPE) => return FileKind::Folder,
            Some(GOOGLE_SHEET_MIME_TYPE) => return FileKind::GoogleSheet,
            Some(GOOGLE_DOC_MIME_TYPE) => return FileKind::GoogleDoc,
            Some("text/csv") => return FileKind::Csv,
            Some("application/json") => return FileKind::Json,
            Some("text/plain") | Some("text/markdown") => return FileKind::Text,
            _ => {}
        }

        let extension = metadata::file_name(file).ok().and_then(file_extension);
        match extension.as_deref() {
            Some("csv") => FileKind::Csv,
            Some("json") => FileKind::Json,
            Some("txt") | Some("md") | Some("log") => FileKind::Text,
            _ => FileKind::Other,
        }
    }
}

/// Picks the strategy for a file by its kind. Kinds without a registered strategy
/// fall back to a metadata-only row; folders are never processed.
pub struct StrategyFactory {
    strategies: HashMap<FileKind, Arc<dyn FileProcessingStrategy>>,
    fallback: Arc<dyn FileProcessingStrategy>,
}

impl StrategyFactory {
    pub fn new(fallback: Arc<dyn FileProcessingStrategy>) -> Self {
        Self {
            strategies: HashMap::new(),
            fallback,
        }
    }

    pub fn with_defaults(api: DriveFilesApi, csv_has_headers: bool) -> Self {
        let csv: Arc<dyn FileProcessingStrategy> = Arc::new(CsvRowsStrategy::new(api.clone(), csv_has_headers));
        let text: Arc<dyn FileProcessingStrategy> = Arc::new(TextSummaryStrategy::new(api.clone()));

        Self::new(Arc::new(MetadataRowStrategy))
            .register(FileKind::Csv, Arc::clone(&csv))
            .register(FileKind::GoogleSheet, csv)
            .register(FileKind::Json, Arc::new(JsonRowsStrategy::new(api)))
            .register(FileKind::Text, Arc::clone(&text))
            .register(FileKind::GoogleDoc, text)
    }

    pub fn register(mut self, kind: FileKind, strategy: Arc<dyn FileProcessingStrategy>) -> Self {
        self.strategies.insert(kind, strategy);
        self
    }

    pub fn strategy_for(&self, file: &FileMetadata) -> Option<Arc<dyn FileProcessingStrategy>> {
        match FileKind::of(file) {
            FileKind::Folder => None,
            kind => Some(Arc::clone(self.strategies.get(&kind).unwrap_or(&self.fallback))),
        }
    }
}
