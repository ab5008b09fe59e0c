use crate::device_camera::interface::DeviceCamera;
use crate::logger::interface::Logger;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub struct DeviceCameraFake {
    logger: Arc<dyn Logger + Send + Sync>,
    started: AtomicBool,
}

impl DeviceCameraFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("camera_fake"),
            started: AtomicBool::new(false),
        }
    }
}

impl DeviceCamera for DeviceCameraFake {
    fn start(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let _ = self.logger.info("Starting camera...");
        self.started.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn stop(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let _ = self.logger.info("Stopping camera...");
        self.started.store(false, Ordering::SeqCst);
        Ok(())
    }

    fn capture_frame(&self) -> Result<Vec<u8>, Box<dyn std::error::Error + Send + Sync>> {
        if !self.started.load(Ordering::SeqCst) {
            return Err("Camera not started".into());
        }
        let _ = self.logger.info("Capturing frame...");
        Ok(vec![0u8; 224 * 224 * 3])
    }
}
