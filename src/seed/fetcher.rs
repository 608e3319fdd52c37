use std::time::Duration;

use async_trait::async_trait;

use crate::errors::internal::SeedError;

/// A downloaded image body
#[derive(Debug, Clone)]
pub struct FetchedImage {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

/// Source of seed images
///
/// Seeding goes through this trait so tests can run without network access.
#[async_trait]
pub trait ImageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchedImage, SeedError>;
}

/// Fetches images over HTTP(S)
pub struct HttpImageFetcher {
    client: reqwest::Client,
}

impl HttpImageFetcher {
    pub fn new() -> Result<Self, SeedError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("Trailhub-Seeder/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| SeedError::Download {
                url: String::new(),
                reason: format!("HTTP client setup failed: {}", e),
            })?;

        Ok(Self { client })
    }
}

#[async_trait]
impl ImageFetcher for HttpImageFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedImage, SeedError> {
        let download_error = |reason: String| SeedError::Download {
            url: url.to_string(),
            reason,
        };

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| download_error(e.to_string()))?;

        if !response.status().is_success() {
            return Err(download_error(format!("HTTP status {}", response.status())));
        }

        let mime_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.split(';').next().unwrap_or(v).trim().to_string())
            .unwrap_or_else(|| "image/jpeg".to_string());

        if !mime_type.starts_with("image/") {
            return Err(download_error(format!("unexpected content type {}", mime_type)));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| download_error(e.to_string()))?;

        Ok(FetchedImage {
            bytes: bytes.to_vec(),
            mime_type,
        })
    }
}

/// Fetch with up to `retries` further attempts, sleeping `backoff` between them
pub async fn fetch_with_retry(
    fetcher: &dyn ImageFetcher,
    url: &str,
    retries: u32,
    backoff: Duration,
) -> Result<FetchedImage, SeedError> {
    let mut attempt = 0;
    loop {
        match fetcher.fetch(url).await {
            Ok(image) => return Ok(image),
            Err(e) if attempt < retries => {
                attempt += 1;
                tracing::debug!("Download of {} failed ({}), retry {}/{}", url, e, attempt, retries);
                tokio::time::sleep(backoff).await;
            }
            Err(e) => return Err(e),
        }
    }
}
