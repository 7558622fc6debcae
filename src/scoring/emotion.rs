use crate::lexicon::Lexicon;
use crate::{Emotion, EmotionProfile};

/// Share of tokens treated as full saturation for one emotion.
const SATURATION_RATIO: f64 = 0.1;

#[derive(Debug, Clone, Default)]
pub struct EmotionDetector;

impl EmotionDetector {
    pub fn new() -> Self {
        Self
    }

    pub fn detect(&self, lexicon: &Lexicon, tokens: &[String]) -> EmotionProfile {
        let denominator = (tokens.len() as f64 * SATURATION_RATIO).max(1.0);
        let mut profile = EmotionProfile::default();

        for emotion in Emotion::ALL {
            let matches = tokens
                .iter()
                .filter(|token| lexicon.has_emotion(emotion, token))
                .count();
            profile.set(emotion, (matches as f64 / denominator).min(1.0));
        }

        profile
    }
}
