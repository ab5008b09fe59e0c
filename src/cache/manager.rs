use crate::cache::interface::{CacheStorage, CachedResponse, Fetcher, RequestKey};
use crate::cache::manifest::CacheManifest;
use crate::logger::interface::Logger;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("install failed for {url}: {source}")]
    Install {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("cache storage error: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("fetch failed for {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Cache-first interception over a fixed asset manifest. One bucket, named
/// by the manifest version, is current at a time; activation purges the rest.
pub struct CacheManager {
    storage: Arc<dyn CacheStorage>,
    fetcher: Arc<dyn Fetcher>,
    manifest: CacheManifest,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl CacheManager {
    pub fn new(
        storage: Arc<dyn CacheStorage>,
        fetcher: Arc<dyn Fetcher>,
        manifest: CacheManifest,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        Self {
            storage,
            fetcher,
            manifest,
            logger: logger.with_namespace("cache"),
        }
    }

    /// Populates the bucket named by the manifest version with every asset,
    /// fetched fresh. All-or-nothing: every asset is fetched before anything
    /// is written, and a failed write rolls the new bucket back, so a failed
    /// install leaves whatever bucket was current untouched.
    pub fn install(&self) -> Result<(), CacheError> {
        let bucket = self.manifest.bucket_name();
        let _ = self
            .logger
            .info(&format!("Installing {} assets into '{}'", self.manifest.assets.len(), bucket));

        let mut entries = Vec::with_capacity(self.manifest.assets.len());
        for path in &self.manifest.assets {
            let key = RequestKey::get(path);
            let response = self
                .fetcher
                .fetch(&key)
                .map_err(|source| CacheError::Install {
                    url: path.clone(),
                    source,
                })?;
            entries.push((key, response));
        }

        self.storage.open(bucket).map_err(CacheError::Storage)?;
        for (key, response) in entries {
            if let Err(source) = self.storage.put(bucket, key, response) {
                let _ = self.storage.delete(bucket);
                return Err(CacheError::Storage(source));
            }
        }

        let _ = self.logger.info("Install complete");
        Ok(())
    }

    /// Deletes every bucket other than the current version. Idempotent.
    pub fn activate(&self) -> Result<(), CacheError> {
        let current = self.manifest.bucket_name();
        for bucket in self.storage.bucket_names().map_err(CacheError::Storage)? {
            if bucket != current {
                let _ = self.logger.info(&format!("Purging stale bucket '{}'", bucket));
                self.storage.delete(&bucket).map_err(CacheError::Storage)?;
            }
        }
        Ok(())
    }

    /// Cache-first fetch. A hit short-circuits the network entirely. On a
    /// miss, the network response is returned and copied into the current
    /// bucket best-effort; a write failure must not block the response. A
    /// network failure falls back to any stale cached entry before the
    /// error is surfaced unchanged.
    pub fn fetch(&self, request: &RequestKey) -> Result<CachedResponse, CacheError> {
        if let Some(cached) = self.lookup(request) {
            return Ok(cached);
        }

        match self.fetcher.fetch(request) {
            Ok(response) => {
                let bucket = self.manifest.bucket_name();
                if let Err(e) =
                    self.storage
                        .put(bucket, request.clone(), response.clone())
                {
                    let _ = self
                        .logger
                        .warn(&format!("Cache write failed for {}: {}", request.url, e));
                }
                Ok(response)
            }
            Err(source) => {
                if let Some(stale) = self.lookup(request) {
                    let _ = self
                        .logger
                        .warn(&format!("Network failed for {}, serving cached copy", request.url));
                    return Ok(stale);
                }
                Err(CacheError::Fetch {
                    url: request.url.clone(),
                    source,
                })
            }
        }
    }

    fn lookup(&self, request: &RequestKey) -> Option<CachedResponse> {
        self.storage.match_any(request).unwrap_or_else(|e| {
            let _ = self
                .logger
                .warn(&format!("Cache lookup failed for {}: {}", request.url, e));
            None
        })
    }
}
