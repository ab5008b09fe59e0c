use crate::decision::keywords::KeywordSet;
use crate::decision::matcher::Matcher;
use crate::image_classifier::interface::Prediction;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Recyclable,
    Trash,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rationale {
    KeywordHit,
    FallbackTopPrediction,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    pub verdict: Verdict,
    pub matched: Prediction,
    pub rationale: Rationale,
}

#[derive(Debug, Error)]
pub enum DecideError {
    #[error("prediction list is empty")]
    InvalidInput,
}

/// Maps a ranked prediction list to a disposal verdict. Pure and
/// deterministic; the caller is responsible for rank order.
pub struct DecisionEngine {
    matcher: Box<dyn Matcher>,
    recyclable_keywords: KeywordSet,
    trash_keywords: KeywordSet,
    recyclable_margin: f32,
}

impl DecisionEngine {
    pub fn new(
        matcher: Box<dyn Matcher>,
        recyclable_keywords: KeywordSet,
        trash_keywords: KeywordSet,
        recyclable_margin: f32,
    ) -> Self {
        Self {
            matcher,
            recyclable_keywords,
            trash_keywords,
            recyclable_margin,
        }
    }

    /// A recyclable hit must beat a trash hit by the configured margin
    /// (default 1.2x). Ambiguous frames fall to Trash: wrongly discarding
    /// a recyclable costs less than contaminating a recycling stream.
    pub fn decide(&self, predictions: &[Prediction]) -> Result<Decision, DecideError> {
        let top = predictions.first().ok_or(DecideError::InvalidInput)?;

        let hit_recyclable = self
            .matcher
            .first_match(predictions, &self.recyclable_keywords);
        let hit_trash = self.matcher.first_match(predictions, &self.trash_keywords);

        let decision = match (hit_recyclable, hit_trash) {
            (Some(recyclable), None) => Decision {
                verdict: Verdict::Recyclable,
                matched: recyclable.clone(),
                rationale: Rationale::KeywordHit,
            },
            (Some(recyclable), Some(trash))
                if recyclable.confidence >= trash.confidence * self.recyclable_margin =>
            {
                Decision {
                    verdict: Verdict::Recyclable,
                    matched: recyclable.clone(),
                    rationale: Rationale::KeywordHit,
                }
            }
            (_, Some(trash)) => Decision {
                verdict: Verdict::Trash,
                matched: trash.clone(),
                rationale: Rationale::KeywordHit,
            },
            (None, None) => Decision {
                verdict: Verdict::Trash,
                matched: top.clone(),
                rationale: Rationale::FallbackTopPrediction,
            },
        };

        Ok(decision)
    }
}

/// Shortens a comma-separated synonym label to its first segment,
/// truncating long names for display.
pub fn pretty_label(label: &str) -> String {
    let first = label.split(',').next().unwrap_or(label).trim();
    if first.chars().count() > 28 {
        let short: String = first.chars().take(25).collect();
        format!("{}…", short)
    } else {
        first.to_string()
    }
}
