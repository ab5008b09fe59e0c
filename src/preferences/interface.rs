pub type PreferenceCallback = Box<dyn Fn(&str) + Send + Sync>;

/// Key-value store for UI-layer state (stats, region, theme). Injected
/// rather than ambient so the core never touches global storage.
pub trait PersistentPreferences: Send + Sync {
    fn get(&self, key: &str)
        -> Result<Option<String>, Box<dyn std::error::Error + Send + Sync>>;

    fn set(&self, key: &str, value: &str)
        -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Calls back with the new value on every set for the key.
    fn subscribe(
        &self,
        key: &str,
        callback: PreferenceCallback,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
