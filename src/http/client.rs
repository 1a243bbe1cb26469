use async_trait::async_trait;
use reqwest::Url;

use crate::{errors::AppError, models::RatingRecord};

/// Production Google Apps Script web-app URL; POST and GET hit the
/// same endpoint.
pub const DEFAULT_ENDPOINT: &str =
    "https://script.google.com/macros/s/AKfycbzhNI2GvZBFs7p2mVX2CpZv1ydPLvaMftoqj7dJECy58K-nkOMkD8qPeYplcA3eKLI/exec";

/// The remote spreadsheet endpoint, the single source of truth for
/// submitted ratings.
#[async_trait]
pub trait RemoteDataSource {
    /// Sends one rating. Best-effort: no retry, no backoff, response
    /// body ignored.
    async fn submit(&self, record: &RatingRecord) -> Result<(), AppError>;

    /// Fetches the full current collection.
    async fn fetch_all(&self) -> Result<Vec<RatingRecord>, AppError>;
}

pub struct SheetsClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl SheetsClient {
    pub fn new(endpoint: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint,
        }
    }

    /// Reads `RATINGS_ENDPOINT_URL`, falling back to the production
    /// endpoint.
    pub fn from_env() -> Result<Self, AppError> {
        let raw = std::env::var("RATINGS_ENDPOINT_URL")
            .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());

        let endpoint = Url::parse(&raw).map_err(|e| AppError::UrlError(format!("{raw}: {e}")))?;

        Ok(Self::new(endpoint))
    }
}

/// Decodes the GET payload. Any record violating the expected shape
/// fails the whole payload; there is no partial-record recovery.
pub fn decode_records(body: &str) -> Result<Vec<RatingRecord>, AppError> {
    serde_json::from_str(body).map_err(|e| AppError::Deserialization(e.to_string()))
}

#[async_trait]
impl RemoteDataSource for SheetsClient {
    async fn submit(&self, record: &RatingRecord) -> Result<(), AppError> {
        self.http
            .post(self.endpoint.clone())
            .json(record)
            .send()
            .await
            .map_err(|e| AppError::Transport(e.to_string()))?;

        Ok(())
    }

    async fn fetch_all(&self) -> Result<Vec<RatingRecord>, AppError> {
        let res = self
            .http
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(|e| AppError::Transport(e.to_string()))?;

        if !res.status().is_success() {
            return Err(AppError::Transport(format!(
                "endpoint returned {}",
                res.status()
            )));
        }

        let body = res
            .text()
            .await
            .map_err(|e| AppError::Transport(e.to_string()))?;

        decode_records(&body)
    }
}
