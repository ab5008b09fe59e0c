use crate::decision::engine::{pretty_label, Decision, Verdict};
use crate::device_display::interface::DeviceDisplay;
use crate::image_classifier::interface::Prediction;
use crate::stats::RecycleStats;

pub struct DeviceDisplayConsole;

impl DeviceDisplayConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DeviceDisplayConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceDisplay for DeviceDisplayConsole {
    fn render_status(
        &mut self,
        message: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        println!("{}", message);
        Ok(())
    }

    fn render_decision(
        &mut self,
        decision: &Decision,
        predictions: &[Prediction],
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let bin = match decision.verdict {
            Verdict::Recyclable => "Recycle",
            Verdict::Trash => "Trash",
        };
        println!("Throw it in: {}", bin);
        println!(
            "{}% confident · {}",
            (decision.matched.confidence * 100.0).round() as u32,
            pretty_label(&decision.matched.label)
        );
        for prediction in predictions {
            println!(
                "  {:.1}% · {}",
                prediction.confidence * 100.0,
                pretty_label(&prediction.label)
            );
        }
        Ok(())
    }

    fn render_stats(
        &mut self,
        stats: &RecycleStats,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        println!(
            "{} items checked | {} recycled ({}%) | {} trash",
            stats.total,
            stats.recycled,
            stats.recycled_percentage(),
            stats.trash
        );
        Ok(())
    }
}
