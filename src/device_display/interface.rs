use crate::decision::engine::Decision;
use crate::image_classifier::interface::Prediction;
use crate::stats::RecycleStats;

/// Output surface for decisions. Not a design target; implementations may
/// be a console, a GUI, or nothing at all.
pub trait DeviceDisplay: Send + Sync {
    fn render_status(&mut self, message: &str)
        -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    fn render_decision(
        &mut self,
        decision: &Decision,
        predictions: &[Prediction],
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    fn render_stats(
        &mut self,
        stats: &RecycleStats,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
