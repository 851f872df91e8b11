use reqwest::Client;

use crate::error::ProcessingError;
use crate::metadata::FileMetadata;
use crate::strategy::FileProcessingStrategy;
use crate::worksheet::Worksheet;

/// Binds a strategy to the session, worksheet, token and drive it works against.
///
/// Session, worksheet and strategy are borrowed from the caller for the lifetime of the
/// processor; the token and drive id are copied. The worksheet is borrowed mutably, so calls
/// sharing one worksheet are serialized by the borrow checker.
pub struct FileProcessor<'a> {
    session: &'a Client,
    ws: &'a mut (dyn Worksheet + Send),
    access_token: String,
    drive_id: String,
    strategy: &'a dyn FileProcessingStrategy,
}

impl<'a> FileProcessor<'a> {
    pub fn new(
        session: &'a Client,
        ws: &'a mut (dyn Worksheet + Send),
        access_token: &str,
        drive_id: &str,
        strategy: &'a dyn FileProcessingStrategy,
    ) -> Self {
        Self {
            session,
            ws,
            access_token: access_token.to_string(),
            drive_id: drive_id.to_string(),
            strategy,
        }
    }

    /// Hands `file` to the strategy and returns once it is done. Strategy errors come back as-is.
    pub async fn process(&mut self, file: &FileMetadata) -> Result<(), ProcessingError> {
        self.strategy
            .process(file, self.session, &mut *self.ws, &self.access_token, &self.drive_id)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::file_name;
    use crate::worksheet::{CellValue, MemoryWorksheet};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    #[derive(Debug, PartialEq)]
    struct RecordedCall {
        file_name: String,
        session: usize,
        ws: usize,
        access_token: String,
        drive_id: String,
    }

    #[derive(Default)]
    struct RecordingStrategy {
        calls: Mutex<Vec<RecordedCall>>,
    }

    #[async_trait]
    impl FileProcessingStrategy for RecordingStrategy {
        async fn process(
            &self,
            file: &FileMetadata,
            session: &Client,
            ws: &mut (dyn Worksheet + Send),
            access_token: &str,
            drive_id: &str,
        ) -> Result<(), ProcessingError> {
            self.calls.lock().unwrap().push(RecordedCall {
                file_name: file_name(file)?.to_string(),
                session: session as *const Client as usize,
                ws: (ws as *mut (dyn Worksheet + Send)).cast::<()>() as usize,
                access_token: access_token.to_string(),
                drive_id: drive_id.to_string(),
            });
            Ok(())
        }
    }

    struct AppendNameStrategy;

    #[async_trait]
    impl FileProcessingStrategy for AppendNameStrategy {
        async fn process(
            &self,
            file: &FileMetadata,
            _session: &Client,
            ws: &mut (dyn Worksheet + Send),
            _access_token: &str,
            _drive_id: &str,
        ) -> Result<(), ProcessingError> {
            ws.append_row(vec![file_name(file)?.into()]);
            Ok(())
        }
    }

    struct NotFoundStrategy;

    #[async_trait]
    impl FileProcessingStrategy for NotFoundStrategy {
        async fn process(
            &self,
            file: &FileMetadata,
            _session: &Client,
            _ws: &mut (dyn Worksheet + Send),
            _access_token: &str,
            _drive_id: &str,
        ) -> Result<(), ProcessingError> {
            Err(ProcessingError::NotFound(file_name(file)?.to_string()))
        }
    }

    fn metadata(name: &str) -> FileMetadata {
        json!({ "name": name }).as_object().cloned().unwrap()
    }

    #[tokio::test]
    async fn test_forwards_held_collaborators() {
        let session = Client::new();
        let mut ws = MemoryWorksheet::new("Files");
        let strategy = RecordingStrategy::default();
        let session_ptr = &session as *const Client as usize;
        let ws_ptr = &ws as *const MemoryWorksheet as usize;

        {
            let mut processor = FileProcessor::new(&session, &mut ws, "tok", "drv1", &strategy);
            processor.process(&metadata("a.txt")).await.unwrap();
            processor.process(&metadata("b.txt")).await.unwrap();
        }

        let calls = strategy.calls.into_inner().unwrap();
        let expected = |name: &str| RecordedCall {
            file_name: name.to_string(),
            session: session_ptr,
            ws: ws_ptr,
            access_token: "tok".to_string(),
            drive_id: "drv1".to_string(),
        };
        assert_eq!(calls, vec![expected("a.txt"), expected("b.txt")]);
        assert_eq!(ws.max_row(), 0);
    }

    #[tokio::test]
    async fn test_sink_reflects_strategy_rows() {
        let session = Client::new();
        let mut ws = MemoryWorksheet::new("Files");

        FileProcessor::new(&session, &mut ws, "tok", "drv1", &AppendNameStrategy)
            .process(&metadata("a.txt"))
            .await
            .unwrap();

        assert_eq!(ws.rows(), &[vec![CellValue::Text("a.txt".to_string())]]);
    }

    #[tokio::test]
    async fn test_strategy_failure_is_returned_unchanged() {
        let session = Client::new();
        let mut ws = MemoryWorksheet::new("Files");

        let result = FileProcessor::new(&session, &mut ws, "tok", "drv1", &NotFoundStrategy)
            .process(&metadata("a.txt"))
            .await;

        match result {
            Err(ProcessingError::NotFound(name)) => assert_eq!(name, "a.txt"),
            other => panic!("expected NotFound, got {:?}", other),
        }
        assert!(ws.rows().is_empty());
    }
}
