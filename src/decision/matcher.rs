use crate::decision::keywords::KeywordSet;
use crate::image_classifier::interface::Prediction;

/// Seam for the keyword-matching strategy. Substring containment is a
/// deliberate fuzzy heuristic over free-text labels; a tokenized or trained
/// matcher can replace it without touching the decision contract.
pub trait Matcher: Send + Sync {
    /// First prediction, in rank order, whose label matches the set.
    fn first_match<'a>(
        &self,
        predictions: &'a [Prediction],
        keywords: &KeywordSet,
    ) -> Option<&'a Prediction>;
}

pub struct SubstringMatcher;

impl Matcher for SubstringMatcher {
    fn first_match<'a>(
        &self,
        predictions: &'a [Prediction],
        keywords: &KeywordSet,
    ) -> Option<&'a Prediction> {
        if keywords.is_empty() {
            return None;
        }
        predictions.iter().find(|p| keywords.matches(&p.label))
    }
}
