use log::debug;
use reqwest::{Client, StatusCode};
use url::Url;

use crate::error::ProcessingError;
use crate::metadata::{self, FileMetadata};

pub const DEFAULT_DRIVE_API_URL: &str = "https://www.googleapis.com/drive/v3";

/// Location of the Drive v3 `files` endpoints that strategies download from.
#[derive(Debug, Clone)]
pub struct DriveFilesApi {
    base_url: String,
}

impl Default for DriveFilesApi {
    fn default() -> Self {
        Self::new(DEFAULT_DRIVE_API_URL)
    }
}

impl DriveFilesApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn download_file_content(&self, session: &Client, access_token: &str, file_id: &str) -> Result<Vec<u8>, ProcessingError> {
        let mut url = self.file_url(file_id, false)?;
        url.query_pairs_mut()
            .append_pair("alt", "media")
            .append_pair("supportsAllDrives", "true");
        fetch_bytes(session, url, access_token, file_id).await
    }

    /// Google-native documents have no binary content and have to be exported.
    pub async fn export_file_content(&self, session: &Client, access_token: &str, file_id: &str, export_mime_type: &str) -> Result<Vec<u8>, ProcessingError> {
        let mut url = self.file_url(file_id, true)?;
        url.query_pairs_mut().append_pair("mimeType", export_mime_type);
        fetch_bytes(session, url, access_token, file_id).await
    }

    // Ids are pushed as path segments so '/', '?' and '#' stay inside the id.
    fn file_url(&self, file_id: &str, export: bool) -> Result<Url, ProcessingError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ProcessingError::Parse(format!("Invalid drive api url {}: {}", self.base_url, e)))?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ProcessingError::Parse(format!("Drive api url {} cannot have a path", self.base_url)))?;
            segments.pop_if_empty().push("files").push(file_id);
            if export {
                segments.push("export");
            }
        }
        Ok(url)
    }
}

async fn fetch_bytes(session: &Client, url: Url, access_token: &str, file_id: &str) -> Result<Vec<u8>, ProcessingError> {
    debug!("Downloading {}", url);
    let response = session.get(url).bearer_auth(access_token).send().await?;

    match response.status() {
        status if status.is_success() => Ok(response.bytes().await?.to_vec()),
        StatusCode::NOT_FOUND => Err(ProcessingError::NotFound(file_id.to_string())),
        status => Err(ProcessingError::HttpStatus(status, response.text().await.unwrap_or_default())),
    }
}

/// Files listed from another shared drive must not be written under this drive's id.
pub fn ensure_same_drive(file: &FileMetadata, drive_id: &str) -> Result<(), ProcessingError> {
    match metadata::drive_id(file) {
        Some(actual) if actual != drive_id => Err(ProcessingError::DriveMismatch {
            expected: drive_id.to_string(),
            actual: actual.to_string(),
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use serde_json::json;

    #[tokio::test]
    async fn test_download_file_content() {
        let mut server = Server::new_async().await;
        let mock = server.mock("GET", "/files/abc")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("alt".into(), "media".into()),
                Matcher::UrlEncoded("supportsAllDrives".into(), "true".into()),
            ]))
            .match_header("authorization", "Bearer tok")
            .with_status(200)
            .with_body("hello")
            .create_async()
            .await;

        let api = DriveFilesApi::new(&format!("{}/", server.url()));
        let content = api.download_file_content(&Client::new(), "tok", "abc").await.unwrap();

        assert_eq!(content, b"hello");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_export_file_content() {
        let mut server = Server::new_async().await;
        let mock = server.mock("GET", "/files/sheet1/export")
            .match_query(Matcher::UrlEncoded("mimeType".into(), "text/csv".into()))
            .with_status(200)
            .with_body("a,b\n")
            .create_async()
            .await;

        let api = DriveFilesApi::new(&server.url());
        let content = api.export_file_content(&Client::new(), "tok", "sheet1", "text/csv").await.unwrap();

        assert_eq!(content, b"a,b\n");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_not_found() {
        let mut server = Server::new_async().await;
        server.mock("GET", "/files/missing").match_query(Matcher::Any).with_status(404).create_async().await;

        let api = DriveFilesApi::new(&server.url());
        let result = api.download_file_content(&Client::new(), "tok", "missing").await;

        assert!(matches!(result, Err(ProcessingError::NotFound(id)) if id == "missing"));
    }

    #[tokio::test]
    async fn test_other_status() {
        let mut server = Server::new_async().await;
        server.mock("GET", "/files/locked").match_query(Matcher::Any).with_status(403).with_body("denied").create_async().await;

        let api = DriveFilesApi::new(&server.url());
        let result = api.download_file_content(&Client::new(), "tok", "locked").await;

        match result {
            Err(ProcessingError::HttpStatus(status, body)) => {
                assert_eq!(status, StatusCode::FORBIDDEN);
                assert_eq!(body, "denied");
            }
            other => panic!("expected HttpStatus, got {:?}", other),
        }
    }

    #[test]
    fn test_file_url_encodes_id() {
        let api = DriveFilesApi::new("https://drive.example.com/drive/v3/");

        let url = api.file_url("a/b?c#d", false).unwrap();
        assert_eq!(url.as_str(), "https://drive.example.com/drive/v3/files/a%2Fb%3Fc%23d");

        let url = api.file_url("sheet1", true).unwrap();
        assert_eq!(url.path(), "/drive/v3/files/sheet1/export");
    }

    #[test]
    fn test_ensure_same_drive() {
        let same = json!({"driveId": "drv1"}).as_object().cloned().unwrap();
        let other = json!({"driveId": "drv2"}).as_object().cloned().unwrap();
        let unknown = json!({}).as_object().cloned().unwrap();

        assert!(ensure_same_drive(&same, "drv1").is_ok());
        assert!(ensure_same_drive(&unknown, "drv1").is_ok());
        assert!(matches!(ensure_same_drive(&other, "drv1"), Err(ProcessingError::DriveMismatch { .. })));
    }
}
