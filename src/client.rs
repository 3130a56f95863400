use crate::errors::MoodError;
use crate::models::{ClassifyResponse, ImageUpload, RemoteHistoryEntry};
use async_trait::async_trait;
use reqwest::{multipart, Client};
use tracing::warn;

/// Turns an image into a mood label.
#[async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(
        &self,
        token: &str,
        upload: &ImageUpload,
    ) -> Result<ClassifyResponse, MoodError>;
}

/// Supplies the history the server recorded for the logged-in user.
#[async_trait]
pub trait HistorySource: Send + Sync {
    async fn fetch_history(&self, token: &str) -> Result<Vec<RemoteHistoryEntry>, MoodError>;
}

/// Talks to the mood service's `/upload` and `/history` endpoints.
#[derive(Debug, Clone)]
pub struct HttpMoodService {
    client: Client,
    base_url: String,
}

impl HttpMoodService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl Classifier for HttpMoodService {
    async fn classify(
        &self,
        token: &str,
        upload: &ImageUpload,
    ) -> Result<ClassifyResponse, MoodError> {
        let part = multipart::Part::bytes(upload.data.clone())
            .file_name(upload.file_name.clone())
            .mime_str(&upload.content_type)
            .map_err(|err| MoodError::InvalidFileType(err.to_string()))?;
        let form = multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(format!("{}/upload", self.base_url))
            .bearer_auth(token)
            .multipart(form)
            .send()
            .await
            .map_err(|err| MoodError::ClassificationError(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "classification service rejected upload");
            return Err(MoodError::ClassificationError(format!(
                "service responded with {status}"
            )));
        }

        response
            .json::<ClassifyResponse>()
            .await
            .map_err(|err| MoodError::ClassificationError(err.to_string()))
    }
}

#[async_trait]
impl HistorySource for HttpMoodService {
    async fn fetch_history(&self, token: &str) -> Result<Vec<RemoteHistoryEntry>, MoodError> {
        let response = self
            .client
            .get(format!("{}/history", self.base_url))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|err| MoodError::HistoryFetchError(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "history service rejected request");
            return Err(MoodError::HistoryFetchError(format!(
                "service responded with {status}"
            )));
        }

        response
            .json::<Vec<RemoteHistoryEntry>>()
            .await
            .map_err(|err| MoodError::HistoryFetchError(err.to_string()))
    }
}
