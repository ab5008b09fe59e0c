use crate::decision::engine::DecisionEngine;
use crate::decision::keywords::KeywordSet;
use crate::decision::matcher::SubstringMatcher;
use crate::image_classifier::interface::Prediction;

pub struct Fixture {
    pub engine: DecisionEngine,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            engine: DecisionEngine::new(
                Box::new(SubstringMatcher),
                KeywordSet::recyclable_defaults(),
                KeywordSet::trash_defaults(),
                1.2,
            ),
        }
    }

    pub fn with_keywords(recyclable: KeywordSet, trash: KeywordSet) -> Self {
        Self {
            engine: DecisionEngine::new(Box::new(SubstringMatcher), recyclable, trash, 1.2),
        }
    }
}

pub fn prediction(label: &str, confidence: f32) -> Prediction {
    Prediction {
        label: label.to_string(),
        confidence,
    }
}
