use tracing::{debug, info, warn};

use super::decode;
use super::request::{Dimensions, FetchConfig};
use crate::error::FetchError;
use crate::state::data::FetchedImage;

/// HTTP client for the random image endpoint
///
/// Cheap to clone: the underlying connection pool is shared, so a clone can be
/// moved into each background fetch task.
#[derive(Debug, Clone)]
pub struct ImageFetcher {
    client: reqwest::Client,
    config: FetchConfig,
}

impl ImageFetcher {
    pub fn new(config: FetchConfig) -> Self {
        // No timeout override: the client's defaults apply
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .unwrap_or_default();

        Self { client, config }
    }

    /// Fetch one random image sized `dimensions`.
    ///
    /// Exactly one round trip, no retries. Every failure is logged together
    /// with the attempted URL before being returned.
    pub async fn fetch(&self, dimensions: Dimensions) -> Result<FetchedImage, FetchError> {
        let url = self.config.url_for(dimensions);

        let result = self.fetch_url(url.clone()).await;
        match &result {
            Ok(image) => info!(
                "🖼️  Fetched {}x{} {:?} ({} KB)",
                image.width(),
                image.height(),
                image.format(),
                image.bytes().len() / 1024
            ),
            Err(e) => {
                warn!("❌ {}", e);
                warn!("   URL: {}", e.url());
            }
        }
        result
    }

    async fn fetch_url(&self, url: String) -> Result<FetchedImage, FetchError> {
        debug!("🌐 GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network {
                url: url.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| FetchError::Network {
            url: url.clone(),
            message: e.to_string(),
        })?;

        // Spawn blocking because decoding a full-size photo is CPU-intensive
        let decode_url = url.clone();
        tokio::task::spawn_blocking(move || decode::decode_payload(&decode_url, body))
            .await
            .map_err(|e| FetchError::Undecodable {
                url,
                message: format!("decode task failed: {}", e),
            })?
    }
}
