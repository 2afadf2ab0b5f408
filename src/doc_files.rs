//! Document files resource: attach a file to a claim by URL.

use std::sync::Arc;

use reqwest::Method;
use serde::Serialize;

use crate::{
    client::{check_response, ClientInner},
    doc_type::DocType,
    types::ApiResponse,
    Result,
};

/// Message returned for every accepted upload
pub const UPLOAD_SUCCESS_MESSAGE: &str = "File uploaded successfully";

/// Options for [`DocFilesService::upload_file`].
///
/// Defaults: category [`DocType::Default`], not visible to the client, no notes.
///
/// # Examples
///
/// ```rust
/// use hawkeye_sdk::{DocType, UploadFileOptions};
///
/// let options = UploadFileOptions::new()
///     .category(DocType::PoliceReport)
///     .visible_to_client(true)
///     .notes("Report from county sheriff");
/// assert_eq!(options.category, DocType::PoliceReport);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadFileOptions {
    pub category: DocType,
    pub visible_to_client: bool,
    pub notes: String,
}

impl UploadFileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document category
    pub fn category(mut self, category: DocType) -> Self {
        self.category = category;
        self
    }

    /// Show the document to the claim's client
    pub fn visible_to_client(mut self, visible: bool) -> Self {
        self.visible_to_client = visible;
        self
    }

    /// Attach a free-text note
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}

#[derive(Debug, Serialize)]
struct SaveFileRequest<'a> {
    #[serde(rename = "filenumber")]
    file_number: i64,
    link: &'a str,
    category: &'static str,
    visible_to_client: bool,
    notes: &'a str,
}

/// Document file endpoints, obtained from [`Client::doc_files`](crate::Client::doc_files)
#[derive(Debug, Clone)]
pub struct DocFilesService {
    inner: Arc<ClientInner>,
}

impl DocFilesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Attach the file at `file_url` to a claim.
    ///
    /// Only the URL is sent; the server fetches the file itself. The server's
    /// body is not interpreted: any 2xx status yields a locally built
    /// acknowledgement with [`UPLOAD_SUCCESS_MESSAGE`].
    pub async fn upload_file(
        &self,
        file_number: i64,
        file_url: &str,
        options: UploadFileOptions,
    ) -> Result<ApiResponse> {
        let request = SaveFileRequest {
            file_number,
            link: file_url,
            category: options.category.label(),
            visible_to_client: options.visible_to_client,
            notes: &options.notes,
        };
        let body = serde_json::to_value(&request)?;
        let url = self.inner.endpoint("/savefile")?;

        let response = self
            .inner
            .send("upload_file", Method::POST, url, Some(body))
            .await?;
        check_response("upload_file", response.status, &response.body)?;

        tracing::debug!(
            file_number,
            category = %options.category,
            body_len = response.body.len(),
            "File attached to claim"
        );

        Ok(ApiResponse {
            file_number,
            message: UPLOAD_SUCCESS_MESSAGE.to_string(),
            error: 0,
            success: true,
        })
    }
}
