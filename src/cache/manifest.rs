use serde::{Deserialize, Serialize};

/// Fixed asset set for offline use. The version string doubles as the cache
/// bucket name and is bumped manually on each asset-set change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheManifest {
    pub version: String,
    pub assets: Vec<String>,
}

impl CacheManifest {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn bucket_name(&self) -> &str {
        &self.version
    }
}

impl Default for CacheManifest {
    fn default() -> Self {
        Self {
            version: "recycle-ai-v3".to_string(),
            assets: vec![
                "./".to_string(),
                "./index.html".to_string(),
                "./styles.css".to_string(),
                "./script.js".to_string(),
                "./manifest.json".to_string(),
                "./vendor/tf.min.js".to_string(),
                "./vendor/mobilenet.min.js".to_string(),
                "./vendor/mobilenet/model.json".to_string(),
                "./vendor/mobilenet/group1-shard1of4.bin".to_string(),
                "./vendor/mobilenet/group1-shard2of4.bin".to_string(),
                "./vendor/mobilenet/group1-shard3of4.bin".to_string(),
                "./vendor/mobilenet/group1-shard4of4.bin".to_string(),
            ],
        }
    }
}
