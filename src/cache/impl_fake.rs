use crate::cache::interface::{CachedResponse, Fetcher, RequestKey};
use crate::logger::interface::Logger;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Scriptable network fake with an offline switch.
pub struct FetcherFake {
    logger: Arc<dyn Logger + Send + Sync>,
    responses: Mutex<HashMap<RequestKey, CachedResponse>>,
    offline: AtomicBool,
}

impl FetcherFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("fetcher_fake"),
            responses: Mutex::new(HashMap::new()),
            offline: AtomicBool::new(false),
        }
    }

    pub fn respond_with(&self, request: RequestKey, response: CachedResponse) {
        self.responses.lock().unwrap().insert(request, response);
    }

    /// Seeds a plain-text response for every asset path given.
    pub fn serve_assets(&self, paths: &[String]) {
        for path in paths {
            self.respond_with(
                RequestKey::get(path),
                CachedResponse::ok("text/plain", format!("asset:{}", path).into_bytes()),
            );
        }
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub fn remove_response(&self, request: &RequestKey) {
        self.responses.lock().unwrap().remove(request);
    }
}

impl Fetcher for FetcherFake {
    fn fetch(
        &self,
        request: &RequestKey,
    ) -> Result<CachedResponse, Box<dyn std::error::Error + Send + Sync>> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(format!("network unreachable: {}", request.url).into());
        }

        let _ = self.logger.info(&format!("Fetching {}", request.url));

        self.responses
            .lock()
            .unwrap()
            .get(request)
            .cloned()
            .ok_or_else(|| format!("404 for {}", request.url).into())
    }
}
