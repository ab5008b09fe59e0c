use crate::cache::interface::{CacheStorage, CachedResponse, RequestKey};
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory cache substrate. The whole store sits behind one mutex, which
/// gives the atomic per-key put/get the manager relies on.
pub struct CacheStorageMemory {
    buckets: Mutex<HashMap<String, HashMap<RequestKey, CachedResponse>>>,
}

impl CacheStorageMemory {
    pub fn new() -> Self {
        Self {
            buckets: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for CacheStorageMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl CacheStorage for CacheStorageMemory {
    fn open(&self, bucket: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.buckets
            .lock()
            .unwrap()
            .entry(bucket.to_string())
            .or_default();
        Ok(())
    }

    fn bucket_names(&self) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.buckets.lock().unwrap().keys().cloned().collect())
    }

    fn delete(&self, bucket: &str) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.buckets.lock().unwrap().remove(bucket).is_some())
    }

    fn get(
        &self,
        bucket: &str,
        key: &RequestKey,
    ) -> Result<Option<CachedResponse>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self
            .buckets
            .lock()
            .unwrap()
            .get(bucket)
            .and_then(|entries| entries.get(key))
            .cloned())
    }

    fn put(
        &self,
        bucket: &str,
        key: RequestKey,
        response: CachedResponse,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.buckets
            .lock()
            .unwrap()
            .entry(bucket.to_string())
            .or_default()
            .insert(key, response);
        Ok(())
    }
}
