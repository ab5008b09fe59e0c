use crate::cache::interface::{CachedResponse, Fetcher, RequestKey};
use reqwest::blocking::Client;
use reqwest::Method;
use std::time::Duration;

/// Fetches assets over HTTP. Relative manifest paths are resolved against
/// the deployment base URL.
pub struct FetcherHttp {
    client: Client,
    base_url: String,
}

impl FetcherHttp {
    pub fn new(base_url: &str) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn absolute_url(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            return url.to_string();
        }
        let path = url.trim_start_matches('.').trim_start_matches('/');
        format!("{}/{}", self.base_url, path)
    }
}

impl Fetcher for FetcherHttp {
    fn fetch(
        &self,
        request: &RequestKey,
    ) -> Result<CachedResponse, Box<dyn std::error::Error + Send + Sync>> {
        let method = Method::from_bytes(request.method.as_bytes())?;
        let url = self.absolute_url(&request.url);

        let response = self
            .client
            .request(method, &url)
            .send()?
            .error_for_status()?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string());
        let body = response.bytes()?.to_vec();

        Ok(CachedResponse {
            status,
            content_type,
            body,
        })
    }
}
