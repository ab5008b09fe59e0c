/// Capture source for classification frames. Implementations own device
/// permissions and lifecycle; callers only see raw frame bytes.
pub trait DeviceCamera: Send + Sync {
    fn start(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
    fn stop(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
    fn capture_frame(&self) -> Result<Vec<u8>, Box<dyn std::error::Error + Send + Sync>>;
}
