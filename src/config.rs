use crate::cache::manifest::CacheManifest;
use crate::decision::keywords::KeywordSet;
use crate::image_classifier::loader::ClassifierConfig;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub tick_rate: Duration,
    pub classify_top_k: usize,
    pub recyclable_keywords: KeywordSet,
    pub trash_keywords: KeywordSet,
    /// A recyclable hit must reach this multiple of a competing trash hit's
    /// confidence to win. Empirically chosen; tune per deployment.
    pub recyclable_margin: f32,
    pub classifier: ClassifierConfig,
    pub manifest: CacheManifest,
    pub logger_timezone: chrono::FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_secs(1),
            classify_top_k: 5,
            recyclable_keywords: KeywordSet::recyclable_defaults(),
            trash_keywords: KeywordSet::trash_defaults(),
            recyclable_margin: 1.2,
            classifier: ClassifierConfig::default(),
            manifest: CacheManifest::default(),
            logger_timezone: utc(),
        }
    }
}

fn utc() -> chrono::FixedOffset {
    chrono::FixedOffset::east_opt(0).unwrap()
}
