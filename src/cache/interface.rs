/// Request identity for cache lookups: method + URL, headers ignored.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestKey {
    pub method: String,
    pub url: String,
}

impl RequestKey {
    pub fn get(url: &str) -> Self {
        Self {
            method: "GET".to_string(),
            url: url.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl CachedResponse {
    pub fn ok(content_type: &str, body: Vec<u8>) -> Self {
        Self {
            status: 200,
            content_type: Some(content_type.to_string()),
            body,
        }
    }
}

/// Versioned response store: named buckets of request -> response entries.
/// Per-key put/get are atomic; nothing else is.
pub trait CacheStorage: Send + Sync {
    /// Creates the bucket if it does not exist.
    fn open(&self, bucket: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    fn bucket_names(&self) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>>;

    /// Returns whether a bucket with that name existed.
    fn delete(&self, bucket: &str) -> Result<bool, Box<dyn std::error::Error + Send + Sync>>;

    fn get(
        &self,
        bucket: &str,
        key: &RequestKey,
    ) -> Result<Option<CachedResponse>, Box<dyn std::error::Error + Send + Sync>>;

    fn put(
        &self,
        bucket: &str,
        key: RequestKey,
        response: CachedResponse,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// First hit for the key across every bucket, live or stale.
    fn match_any(
        &self,
        key: &RequestKey,
    ) -> Result<Option<CachedResponse>, Box<dyn std::error::Error + Send + Sync>> {
        for bucket in self.bucket_names()? {
            if let Some(response) = self.get(&bucket, key)? {
                return Ok(Some(response));
            }
        }
        Ok(None)
    }
}

/// Network collaborator behind the cache.
pub trait Fetcher: Send + Sync {
    fn fetch(
        &self,
        request: &RequestKey,
    ) -> Result<CachedResponse, Box<dyn std::error::Error + Send + Sync>>;
}
