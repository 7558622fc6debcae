use serde::{Deserialize, Serialize};

use crate::{clamp, clamp01, BayesProbs, Mood};

const CONSISTENCY_WEIGHT: f64 = 0.4;
const CERTAINTY_WEIGHT: f64 = 0.6;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FusionConfig {
    pub heuristic_weight: f64,
    pub bayes_weight: f64,
}

impl Default for FusionConfig {
    fn default() -> Self {
        Self {
            heuristic_weight: 0.7,
            bayes_weight: 0.3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FusedScore {
    pub score: f64,
    pub confidence: f64,
    pub mood: Mood,
}

#[derive(Debug, Clone)]
pub struct FusionScorer {
    config: FusionConfig,
}

impl FusionScorer {
    pub fn new(config: FusionConfig) -> Self {
        Self { config }
    }

    pub fn fuse(&self, heuristic_score: f64, probs: &BayesProbs) -> FusedScore {
        let bayes_score = probs.score();
        let score = clamp(
            heuristic_score * self.config.heuristic_weight + bayes_score * self.config.bayes_weight,
            -1.0,
            1.0,
        );

        let consistency = (1.0 - (heuristic_score - bayes_score).abs()).max(0.0);
        let certainty = probs.certainty();
        let confidence = clamp01(consistency * CONSISTENCY_WEIGHT + certainty * CERTAINTY_WEIGHT);

        FusedScore {
            score,
            confidence,
            mood: Mood::from_score(score),
        }
    }
}
