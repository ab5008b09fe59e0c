use crate::image_classifier::interface::{ImageClassifier, Prediction};
use crate::image_classifier::loader::{ClassifierConfig, ClassifierLoader};
use crate::logger::interface::Logger;
use rand::distr::{Distribution, Uniform};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub struct ImageClassifierFake {
    logger: Arc<dyn Logger + Send + Sync>,
    scripted: Mutex<Option<Vec<Prediction>>>,
}

impl ImageClassifierFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("image_classifier_fake"),
            scripted: Mutex::new(None),
        }
    }

    /// Makes every subsequent classify call return these predictions
    /// instead of random ones.
    pub fn set_predictions(&self, predictions: Vec<Prediction>) {
        *self.scripted.lock().unwrap() = Some(predictions);
    }
}

impl ImageClassifier for ImageClassifierFake {
    fn classify(
        &self,
        _image: &[u8],
        top_k: usize,
    ) -> Result<Vec<Prediction>, Box<dyn std::error::Error + Send + Sync>> {
        let _ = self.logger.info("Classifying image with fake classifier...");

        if let Some(scripted) = self.scripted.lock().unwrap().as_ref() {
            return Ok(scripted.iter().take(top_k).cloned().collect());
        }

        let objects = [
            "beer bottle",
            "water bottle",
            "tin can",
            "carton",
            "banana",
            "pizza",
            "plastic bag",
            "paper towel",
            "broccoli",
            "laptop",
            "cup",
            "envelope",
        ];

        let mut rng = rand::rng();

        let index_dist = Uniform::new(0, objects.len())?;

        let confidence_dist = Uniform::new(0.0, 1.0f32)?;

        let mut predictions: Vec<Prediction> = (0..top_k)
            .map(|_| Prediction {
                label: objects[index_dist.sample(&mut rng)].to_string(),
                confidence: confidence_dist.sample(&mut rng),
            })
            .collect();

        // Callers expect descending rank order.
        predictions.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));

        Ok(predictions)
    }
}

pub struct ClassifierLoaderFake {
    logger: Arc<dyn Logger + Send + Sync>,
    classifier: Arc<ImageClassifierFake>,
    load_count: AtomicUsize,
}

impl ClassifierLoaderFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        let classifier = Arc::new(ImageClassifierFake::new(logger.clone()));
        Self {
            logger: logger.with_namespace("classifier_loader_fake"),
            classifier,
            load_count: AtomicUsize::new(0),
        }
    }

    pub fn classifier(&self) -> Arc<ImageClassifierFake> {
        self.classifier.clone()
    }

    pub fn load_count(&self) -> usize {
        self.load_count.load(Ordering::SeqCst)
    }
}

impl ClassifierLoader for ClassifierLoaderFake {
    fn load(
        &self,
        config: &ClassifierConfig,
    ) -> Result<Arc<dyn ImageClassifier>, Box<dyn std::error::Error + Send + Sync>> {
        let _ = self
            .logger
            .info(&format!("Loading fake model from {}", config.model_path));
        self.load_count.fetch_add(1, Ordering::SeqCst);
        Ok(self.classifier.clone())
    }
}
