use std::time::Duration;

use futures_util::StreamExt;
use masklist_core::PharmacyRecord;
use masklist_logging::{mask_debug, mask_info};

use crate::decode::{decode_feed, RecordLocator};
use crate::{FailureKind, FeedError};

pub const DEFAULT_FEED_URL: &str =
    "https://raw.githubusercontent.com/kiang/pharmacies/master/json/points.json";

#[derive(Debug, Clone)]
pub struct FeedSettings {
    pub url: String,
    pub locator: RecordLocator,
    /// `None` leaves the connect phase unbounded.
    pub connect_timeout: Option<Duration>,
    /// `None` means a hung request keeps the session loading.
    pub request_timeout: Option<Duration>,
    pub max_bytes: u64,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_FEED_URL.to_string(),
            locator: RecordLocator::default(),
            connect_timeout: None,
            request_timeout: None,
            max_bytes: 64 * 1024 * 1024,
        }
    }
}

#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    /// One request, no retries. Every failure comes back as a `FeedError`.
    async fn fetch(&self) -> Result<Vec<PharmacyRecord>, FeedError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    settings: FeedSettings,
}

impl ReqwestFetcher {
    pub fn new(settings: FeedSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, FeedError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = self.settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        builder
            .build()
            .map_err(|err| FeedError::new(FailureKind::Network, err.to_string()))
    }

    async fn download(
        &self,
        client: &reqwest::Client,
        url: reqwest::Url,
    ) -> Result<Vec<u8>, FeedError> {
        let response = client.get(url).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let max_bytes = self.settings.max_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(too_large(max_bytes, content_len));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(too_large(max_bytes, next_len));
            }
            bytes.extend_from_slice(&chunk);
        }
        Ok(bytes)
    }
}

#[async_trait::async_trait]
impl Fetcher for ReqwestFetcher {
    async fn fetch(&self) -> Result<Vec<PharmacyRecord>, FeedError> {
        let url = reqwest::Url::parse(&self.settings.url)
            .map_err(|err| FeedError::new(FailureKind::InvalidUrl, err.to_string()))?;
        let client = self.build_client()?;

        mask_info!("Fetching feed from {}", url);
        let bytes = self.download(&client, url).await?;
        mask_debug!("Feed body is {} bytes", bytes.len());

        let records = decode_feed(&bytes, &self.settings.locator)
            .map_err(|err| FeedError::new(FailureKind::Decode, err.to_string()))?;
        mask_info!("Decoded {} feed records", records.len());
        Ok(records)
    }
}

fn too_large(max_bytes: u64, actual: u64) -> FeedError {
    FeedError::new(
        FailureKind::TooLarge {
            max_bytes,
            actual: Some(actual),
        },
        "response too large",
    )
}

fn map_reqwest_error(err: reqwest::Error) -> FeedError {
    if err.is_timeout() {
        return FeedError::new(FailureKind::Timeout, err.to_string());
    }
    FeedError::new(FailureKind::Network, err.to_string())
}
