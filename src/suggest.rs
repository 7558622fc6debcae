//! Decides when a detected mood should be applied to the entry being written.
//!
//! Debouncing stays with the caller; this only holds the manual-override
//! flag and the acceptance rules.

use crate::config::Sensitivity;
use crate::engine::MoodEngine;
use crate::{AnalysisResult, Mood};

/// Shorter drafts are not analyzed for auto-apply.
pub const MIN_AUTO_CHARS: usize = 20;

#[derive(Debug, Clone)]
pub struct MoodSuggester {
    sensitivity: Sensitivity,
    manual: Option<Mood>,
}

impl MoodSuggester {
    pub fn new(sensitivity: Sensitivity) -> Self {
        Self {
            sensitivity,
            manual: None,
        }
    }

    pub fn sensitivity(&self) -> Sensitivity {
        self.sensitivity
    }

    pub fn set_sensitivity(&mut self, sensitivity: Sensitivity) {
        self.sensitivity = sensitivity;
    }

    /// The user picked a mood by hand; stop auto updates until [`reset`](Self::reset).
    pub fn set_manual(&mut self, mood: Mood) {
        self.manual = Some(mood);
    }

    pub fn manual(&self) -> Option<Mood> {
        self.manual
    }

    pub fn reset(&mut self) {
        self.manual = None;
    }

    pub fn accepts(&self, engine: &MoodEngine, result: &AnalysisResult) -> bool {
        let threshold = engine.config().sensitivity.threshold(self.sensitivity);
        result.confidence >= threshold
    }

    /// Mood to apply for the current draft, if any.
    pub fn observe(&self, engine: &MoodEngine, text: &str) -> Option<Mood> {
        if self.manual.is_some() || text.trim().chars().count() < MIN_AUTO_CHARS {
            return None;
        }
        let result = engine.analyze(text);
        if self.accepts(engine, &result) {
            Some(result.mood)
        } else {
            None
        }
    }
}
