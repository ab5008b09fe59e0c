/// A single ranked guess from the classifier. The label may be a
/// comma-separated list of synonyms (e.g. "pop bottle, soda bottle").
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub label: String,
    pub confidence: f32,
}

pub trait ImageClassifier: Send + Sync {
    /// Returns the top `top_k` predictions, ranked descending by confidence.
    fn classify(
        &self,
        image: &[u8],
        top_k: usize,
    ) -> Result<Vec<Prediction>, Box<dyn std::error::Error + Send + Sync>>;
}
