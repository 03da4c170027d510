use std::time::Duration;

use reqwest::Client;
use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("client.invalid_base_url")]
    InvalidBaseUrl,
    #[error("client.build_failed")]
    Build(#[from] reqwest::Error),
}

/// Shared HTTP client configuration for the inventory service.
pub struct ApiClient {
    pub client: Client,
    base_url: Url,
}

impl ApiClient {
    /// `timeout` of `None` leaves requests unbounded.
    pub fn new(base_url: Url, timeout: Option<Duration>) -> Result<Self, ClientError> {
        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(ClientError::InvalidBaseUrl);
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    /// Client that talks to loopback stubs directly, whatever the proxy environment says.
    #[cfg(test)]
    pub(crate) fn for_loopback(base_url: Url) -> Self {
        Self {
            client: Client::builder()
                .no_proxy()
                .build()
                .expect("reqwest client"),
            base_url,
        }
    }

    /// Returns the collection endpoint URL.
    pub fn products_url(&self) -> Url {
        self.endpoint(&["products"])
    }

    /// Returns the endpoint URL of a single product. The id is encoded as one segment.
    pub fn product_url(&self, id: &str) -> Url {
        self.endpoint(&["products", id])
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}
