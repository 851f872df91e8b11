use google_drive3::common::Client;
use google_drive3::yup_oauth2::authenticator::Authenticator;
use google_drive3::yup_oauth2::{ServiceAccountAuthenticator, ServiceAccountKey};
use hyper_rustls::HttpsConnector;
use hyper_util::client::legacy::connect::HttpConnector;
use rustls::crypto::ring::default_provider;
use rustls::crypto::CryptoProvider;
use std::error::Error;
use std::sync::Once;

static INIT: Once = Once::new();

const FOLDER_MIME_TYPE: &str = "application/vnd.google-apps.folder";

pub(crate) fn build_connection_client() -> Result<Client<HttpsConnector<HttpConnector>>, Box<dyn Error>> {
    INIT.call_once(|| {
        // Fails only when another provider was installed first, which is fine.
        let _ = CryptoProvider::install_default(default_provider());
    });
    let connector = hyper_rustls::HttpsConnectorBuilder::new()
        .with_native_roots()
        .map_err(|e| format!("Failed to load native root certificates: {}", e))?
        .https_or_http()
        .enable_http2()
        .build();
    Ok(hyper_util::client::legacy::Client::builder(hyper_util::rt::TokioExecutor::new()).build(connector))
}

pub(crate) async fn create_auth_authenticator(secret_json: String) -> Result<Authenticator<HttpsConnector<HttpConnector>>, Box<dyn Error>> {
    let secret: ServiceAccountKey = serde_json::from_str(&secret_json)
        .map_err(|e| format!("Failed to parse service account key: {:?}", e))?;

    Ok(ServiceAccountAuthenticator::builder(secret)
        .build()
        .await
        .map_err(|e| format!("Failed to create authenticator: {}", e))?)
}

/// Query for the non-folder, non-trashed files of the drive, optionally only the direct children of `folder_id`.
pub(crate) fn build_files_query(folder_id: Option<&str>) -> String {
    let query = format!("trashed = false and mimeType != '{}'", FOLDER_MIME_TYPE);
    match folder_id {
        Some(folder_id) => format!("'{}' in parents and {}", folder_id.replace('\'', "\\'"), query),
        None => query,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_files_query_whole_drive() {
        assert_eq!(
            build_files_query(None),
            "trashed = false and mimeType != 'application/vnd.google-apps.folder'"
        );
    }

    #[test]
    fn test_build_files_query_in_folder() {
        assert_eq!(
            build_files_query(Some("1AbC")),
            "'1AbC' in parents and trashed = false and mimeType != 'application/vnd.google-apps.folder'"
        );
        assert!(build_files_query(Some("it's")).starts_with("'it\\'s' in parents"));
    }

    #[tokio::test]
    async fn test_create_auth_authenticator_rejects_invalid_key() {
        let error = create_auth_authenticator("{}".to_string()).await.err().expect("empty key was accepted");

        assert!(error.to_string().starts_with("Failed to parse service account key:"));
    }
}
