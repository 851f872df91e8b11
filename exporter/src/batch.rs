use drive_sheet_file_processor::{FileMetadata, FileProcessor, Worksheet};
use log::{debug, info, warn};
use serde_json::Value;
use crate::app_context::ExportContext;

#[derive(Debug, Default, PartialEq)]
pub struct BatchSummary {
    pub processed: usize,
    pub skipped: usize,
    /// File name and error message of every file that failed.
    pub failures: Vec<(String, String)>,
}

/// Processes `files` one after another into `ws`. A failing file is logged and recorded,
/// the batch carries on with the next one.
pub async fn run_batch(context: &ExportContext, files: &[FileMetadata], ws: &mut (dyn Worksheet + Send)) -> BatchSummary {
    let mut summary = BatchSummary::default();

    for file in files {
        let label = file.get("name").and_then(Value::as_str).unwrap_or("<unnamed>").to_string();
        let Some(strategy) = context.factory.strategy_for(file) else {
            debug!("No strategy for {}. Skipping.", label);
            summary.skipped += 1;
            continue;
        };

        let mut processor = FileProcessor::new(
            &context.session,
            &mut *ws,
            &context.access_token,
            &context.drive_id,
            strategy.as_ref(),
        );
        match processor.process(file).await {
            Ok(()) => {
                debug!("Processed {}", label);
                summary.processed += 1;
            }
            Err(e) => {
                warn!("Failed to process {}: {}", label, e);
                summary.failures.push((label, e.to_string()));
            }
        }
    }

    info!(
        "Batch finished: {} processed, {} skipped, {} failed, {} rows in sheet",
        summary.processed,
        summary.skipped,
        summary.failures.len(),
        ws.max_row()
    );
    summary
}
