use crate::image_classifier::interface::ImageClassifier;
use crate::logger::interface::Logger;
use std::sync::{Arc, Mutex};

/// Model load options, mirroring the upstream MobileNet loader.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifierConfig {
    pub version: u32,
    pub alpha: f32,
    pub model_path: String,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            version: 2,
            alpha: 1.0,
            model_path: "./vendor/mobilenet/model.json".to_string(),
        }
    }
}

pub trait ClassifierLoader: Send + Sync {
    fn load(
        &self,
        config: &ClassifierConfig,
    ) -> Result<Arc<dyn ImageClassifier>, Box<dyn std::error::Error + Send + Sync>>;
}

/// Memoized classifier factory. Loading is slow (seconds for a real model),
/// so it happens lazily on the first classification and the loaded
/// classifier is reused for the rest of the process lifetime.
pub struct ClassifierHandle {
    loader: Arc<dyn ClassifierLoader>,
    config: ClassifierConfig,
    loaded: Mutex<Option<Arc<dyn ImageClassifier>>>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ClassifierHandle {
    pub fn new(
        loader: Arc<dyn ClassifierLoader>,
        config: ClassifierConfig,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        Self {
            loader,
            config,
            loaded: Mutex::new(None),
            logger: logger.with_namespace("classifier"),
        }
    }

    /// Returns the loaded classifier, loading it on first call. A load
    /// failure is surfaced to the caller and the next call retries.
    pub fn get(
        &self,
    ) -> Result<Arc<dyn ImageClassifier>, Box<dyn std::error::Error + Send + Sync>> {
        let mut slot = self.loaded.lock().unwrap();

        if let Some(classifier) = slot.as_ref() {
            return Ok(classifier.clone());
        }

        let _ = self.logger.info("Loading model...");
        let classifier = self.loader.load(&self.config).map_err(|e| {
            let _ = self.logger.warn(&format!("Classifier unavailable: {}", e));
            e
        })?;
        let _ = self.logger.info("Model ready");

        *slot = Some(classifier.clone());
        Ok(classifier)
    }
}
