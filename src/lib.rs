pub mod cache;
pub mod config;
pub mod engine;
pub mod lexicon;
pub mod scoring;
pub mod suggest;
pub mod text;

use serde::{Deserialize, Serialize};

pub use config::{ConfigError, EngineConfig, Sensitivity};
pub use engine::{BatchItem, MoodEngine, Statistics};
pub use suggest::MoodSuggester;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Mood {
    #[serde(rename = "😄")]
    VeryHappy,
    #[serde(rename = "😊")]
    Happy,
    #[serde(rename = "🙂")]
    SlightlyHappy,
    #[serde(rename = "😐")]
    Neutral,
    #[serde(rename = "😢")]
    Sad,
}

impl Mood {
    pub fn emoji(self) -> &'static str {
        match self {
            Mood::VeryHappy => "😄",
            Mood::Happy => "😊",
            Mood::SlightlyHappy => "🙂",
            Mood::Neutral => "😐",
            Mood::Sad => "😢",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mood::VeryHappy => "very happy",
            Mood::Happy => "happy",
            Mood::SlightlyHappy => "slightly happy",
            Mood::Neutral => "neutral",
            Mood::Sad => "sad",
        }
    }

    /// Thresholds are asymmetric: the positive side is graded finer.
    pub fn from_score(score: f64) -> Self {
        if score >= 0.4 {
            Mood::VeryHappy
        } else if score >= 0.15 {
            Mood::Happy
        } else if score >= 0.05 {
            Mood::SlightlyHappy
        } else if score <= -0.2 {
            Mood::Sad
        } else {
            Mood::Neutral
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Joy,
    Sadness,
    Anger,
    Fear,
    Surprise,
    Love,
}

impl Emotion {
    pub const ALL: [Emotion; 6] = [
        Emotion::Joy,
        Emotion::Sadness,
        Emotion::Anger,
        Emotion::Fear,
        Emotion::Surprise,
        Emotion::Love,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Emotion::Joy => "joy",
            Emotion::Sadness => "sadness",
            Emotion::Anger => "anger",
            Emotion::Fear => "fear",
            Emotion::Surprise => "surprise",
            Emotion::Love => "love",
        }
    }
}

/// Intensity per emotion, each in `[0, 1]`. Every emotion always has a value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EmotionProfile {
    pub joy: f64,
    pub sadness: f64,
    pub anger: f64,
    pub fear: f64,
    pub surprise: f64,
    pub love: f64,
}

impl EmotionProfile {
    pub fn get(&self, emotion: Emotion) -> f64 {
        match emotion {
            Emotion::Joy => self.joy,
            Emotion::Sadness => self.sadness,
            Emotion::Anger => self.anger,
            Emotion::Fear => self.fear,
            Emotion::Surprise => self.surprise,
            Emotion::Love => self.love,
        }
    }

    pub fn set(&mut self, emotion: Emotion, value: f64) {
        let slot = match emotion {
            Emotion::Joy => &mut self.joy,
            Emotion::Sadness => &mut self.sadness,
            Emotion::Anger => &mut self.anger,
            Emotion::Fear => &mut self.fear,
            Emotion::Surprise => &mut self.surprise,
            Emotion::Love => &mut self.love,
        };
        *slot = value;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Emotion, f64)> + '_ {
        Emotion::ALL
            .into_iter()
            .map(move |emotion| (emotion, self.get(emotion)))
    }

    /// Strongest emotion, if any has a non-zero intensity.
    pub fn dominant(&self) -> Option<Emotion> {
        self.iter()
            .filter(|(_, value)| *value > 0.0)
            .fold(None, |best: Option<(Emotion, f64)>, (emotion, value)| match best {
                Some((_, best_value)) if best_value >= value => best,
                _ => Some((emotion, value)),
            })
            .map(|(emotion, _)| emotion)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BayesProbs {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
}

impl BayesProbs {
    pub fn uniform() -> Self {
        Self {
            positive: 0.33,
            negative: 0.33,
            neutral: 0.34,
        }
    }

    pub fn score(&self) -> f64 {
        self.positive - self.negative
    }

    pub fn certainty(&self) -> f64 {
        self.positive.max(self.negative).max(self.neutral)
    }

    pub fn total(&self) -> f64 {
        self.positive + self.negative + self.neutral
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisDetails {
    pub heuristic_score: f64,
    pub bayes_score: f64,
    pub bayes_probs: BayesProbs,
}

/// `mood` is derived from the unrounded fused score, so it can disagree with
/// `Mood::from_score(score)` right at a threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub mood: Mood,
    pub score: f64,
    pub confidence: f64,
    pub word_count: usize,
    pub emotions: EmotionProfile,
    pub details: AnalysisDetails,
}

impl AnalysisResult {
    /// Result for text too short to carry a signal.
    pub fn neutral(word_count: usize) -> Self {
        Self {
            mood: Mood::Neutral,
            score: 0.0,
            confidence: 0.0,
            word_count,
            emotions: EmotionProfile::default(),
            details: AnalysisDetails {
                heuristic_score: 0.0,
                bayes_score: 0.0,
                bayes_probs: BayesProbs::uniform(),
            },
        }
    }
}

pub(crate) fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.max(min).min(max)
}

pub(crate) fn clamp01(value: f64) -> f64 {
    clamp(value, 0.0, 1.0)
}

pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

pub fn format_float(value: f64, digits: usize) -> String {
    format!("{:.1$}", value, digits)
}

pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}
