use std::pin::Pin;
use std::future::Future;
use google_drive3::api::File;

/// The Drive calls the exporter needs before any file is processed.
pub trait DriveHubAdapter {
    /// Every file of the shared drive `drive_id` matching `query`, all pages.
    fn fetch_drive_files(&self, drive_id: String, query: String) -> Pin<Box<dyn Future<Output = Result<Vec<File>, String>> + Send + '_>>;
    fn get_access_token(&self) -> Pin<Box<dyn Future<Output = Result<String, String>> + Send + '_>>;
}
