use google_drive3::DriveHub;
use hyper_rustls::HttpsConnector;
use hyper_util::client::legacy::connect::HttpConnector;
use std::pin::Pin;
use std::future::Future;
use google_drive3::api::File;
use hyper::StatusCode;
use log::debug;
use crate::gdrive_provider::drive_hub_adapter::DriveHubAdapter;

const PAGE_SIZE: i32 = 100;
const LIST_FIELDS: &str = "nextPageToken, files(id, name, mimeType, size, modifiedTime, driveId, parents, webViewLink)";

pub struct GoogleDriveHubAdapter {
    hub: DriveHub<HttpsConnector<HttpConnector>>,
    scope: String
}

impl GoogleDriveHubAdapter {
    pub fn new(hub: DriveHub<HttpsConnector<HttpConnector>>, scope: String) -> Self {
        Self {
            hub,
            scope
        }
    }
}

impl DriveHubAdapter for GoogleDriveHubAdapter {
    fn fetch_drive_files(&self, drive_id: String, query: String) -> Pin<Box<dyn Future<Output=Result<Vec<File>, String>> + Send + '_>> {
        Box::pin(async move {
            let mut files = Vec::new();
            let mut page_token: Option<String> = None;

            loop {
                let mut call = self.hub.files().list()
                    .add_scope(&self.scope)
                    .q(&query)
                    .drive_id(&drive_id)
                    .corpora("drive")
                    .include_items_from_all_drives(true)
                    .supports_all_drives(true)
                    .page_size(PAGE_SIZE)
                    .param("fields", LIST_FIELDS);
                if let Some(token) = page_token.as_deref() {
                    call = call.page_token(token);
                }

                let (response, file_list) = call.doit().await.map_err(|e| format!("HTTP error: {:?}", e))?;
                if response.status() != StatusCode::OK {
                    return Err(format!("Failed to fetch file list. Response status: {}", response.status()));
                }

                let page = file_list.files.unwrap_or_default();
                debug!("Fetched {} files from drive {}", page.len(), drive_id);
                files.extend(page);

                match file_list.next_page_token {
                    Some(token) => page_token = Some(token),
                    None => break,
                }
            }

            Ok(files)
        })
    }

    fn get_access_token(&self) -> Pin<Box<dyn Future<Output = Result<String, String>> + Send + '_>> {
        Box::pin(async move {
            self.hub.auth.get_token(&[self.scope.as_str()])
                .await
                .map_err(|e| format!("Token error: {}", e))?
                .ok_or_else(|| "Missing access token".to_string())
        })
    }
}
