use google_drive3::DriveHub;
use log::debug;
use std::error::Error;
use std::sync::Arc;
use crate::gdrive_provider::google_drive_hub_adapter::GoogleDriveHubAdapter;
use crate::gdrive_provider::google_drive_utils::{build_connection_client, create_auth_authenticator};
use crate::gdrive_provider::read_credentials::read_credentials;

#[derive(Default)]
pub struct GoogleDriveHubAdapterBuilder {
    credentials_source: Option<String>,
    scope: Option<String>
}

impl GoogleDriveHubAdapterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scope(mut self, scope: String) -> Self {
        self.scope = Some(scope);
        self
    }

    /// A path to the service-account key file, or the name of an environment variable holding the key.
    pub fn with_credentials(mut self, credentials_source: String) -> Self {
        self.credentials_source = Some(credentials_source);
        self
    }

    pub async fn build(self) -> Result<Arc<GoogleDriveHubAdapter>, Box<dyn Error>> {
        let scope = self.scope.ok_or("Scope is missing")?;
        let credentials_source = self.credentials_source.ok_or("Credentials path is missing")?;
        let secret = read_credentials(&credentials_source)?;
        let client = build_connection_client()?;
        let auth = create_auth_authenticator(secret).await?;
        debug!("Authenticated drive hub for scope {}", scope);
        Ok(Arc::new(GoogleDriveHubAdapter::new(DriveHub::new(client, auth), scope)))
    }
}
