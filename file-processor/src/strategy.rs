use async_trait::async_trait;
use reqwest::Client;

use crate::error::ProcessingError;
use crate::metadata::FileMetadata;
use crate::worksheet::Worksheet;

/// File-type specific processing. Implementations read what they need through `session`
/// using `access_token`, and append their results to `ws`.
#[async_trait]
pub trait FileProcessingStrategy: Send + Sync {
    async fn process(
        &self,
        file: &FileMetadata,
        session: &Client,
        ws: &mut (dyn Worksheet + Send),
        access_token: &str,
        drive_id: &str,
    ) -> Result<(), ProcessingError>;
}
