use crate::config::Config;
use crate::decision::engine::{Decision, DecisionEngine};
use crate::device_camera::interface::DeviceCamera;
use crate::device_display::interface::DeviceDisplay;
use crate::image_classifier::loader::ClassifierHandle;
use crate::logger::interface::Logger;
use crate::preferences::interface::PersistentPreferences;
use crate::stats::RecycleStats;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

pub struct App {
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    device_camera: Arc<dyn DeviceCamera + Send + Sync>,
    device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
    classifier: ClassifierHandle,
    engine: DecisionEngine,
    preferences: Arc<dyn PersistentPreferences>,
    stop: Arc<AtomicBool>,
}

impl App {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        device_camera: Arc<dyn DeviceCamera + Send + Sync>,
        device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
        classifier: ClassifierHandle,
        engine: DecisionEngine,
        preferences: Arc<dyn PersistentPreferences>,
    ) -> Self {
        Self {
            config,
            logger: logger.with_namespace("app"),
            device_camera,
            device_display,
            classifier,
            engine,
            preferences,
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Flag checked at the top of each loop iteration. Raising it stops the
    /// next scheduled pass, never the in-flight one.
    pub fn stop_signal(&self) -> Arc<AtomicBool> {
        self.stop.clone()
    }

    /// One full pass: capture, classify, decide, record, render.
    pub fn classify_once(&self) -> Result<Decision, Box<dyn std::error::Error + Send + Sync>> {
        let frame = self.device_camera.capture_frame()?;

        let classifier = self.classifier.get()?;
        let predictions = classifier.classify(&frame, self.config.classify_top_k)?;

        let decision = self.engine.decide(&predictions)?;

        let mut stats = RecycleStats::load(self.preferences.as_ref());
        stats.record(decision.verdict);
        if let Err(e) = stats.save(self.preferences.as_ref()) {
            let _ = self.logger.warn(&format!("Failed to save stats: {}", e));
        }

        let mut display = self.device_display.lock().unwrap();
        display.render_decision(&decision, &predictions)?;
        display.render_stats(&stats)?;

        Ok(decision)
    }

    pub fn start(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.device_camera.start()?;

        {
            let mut display = self.device_display.lock().unwrap();
            display.render_status("Ready")?;
        }

        loop {
            if self.stop.load(Ordering::SeqCst) {
                break;
            }

            // A failed pass is logged and the loop keeps going; the next
            // frame is a fresh chance.
            if let Err(e) = self.classify_once() {
                let _ = self.logger.warn(&format!("Classification pass failed: {}", e));
            }

            std::thread::sleep(self.config.tick_rate);
        }

        self.device_camera.stop()?;
        let _ = self.logger.info("Stopped");
        Ok(())
    }
}
