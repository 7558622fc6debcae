use serde::{Deserialize, Serialize};

use crate::clamp;
use crate::lexicon::{Intensity, Lexicon};

const MIN_MODIFIER: f64 = 0.1;
const MAX_MODIFIER: f64 = 2.0;

/// Longest negation window a config may ask for.
pub const MAX_NEGATION_WINDOW: usize = 64;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeuristicConfig {
    /// Tokens after a negator whose polarity is inverted.
    pub negation_window: usize,
    pub intensifier_weight: f64,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            negation_window: 3,
            intensifier_weight: 0.3,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HeuristicScorer {
    config: HeuristicConfig,
}

impl HeuristicScorer {
    pub fn new(config: HeuristicConfig) -> Self {
        Self { config }
    }

    /// Lexicon polarity of `tokens` in `[-1, 1]`.
    pub fn score(&self, lexicon: &Lexicon, tokens: &[String]) -> f64 {
        if tokens.is_empty() {
            return 0.0;
        }

        let negated = self.negated_positions(lexicon, tokens);
        let mut raw = 0.0;
        let mut matched = 0usize;

        for (idx, token) in tokens.iter().enumerate() {
            if let Some(tier) = lexicon.tier(token) {
                let weight = tier.weight();
                raw += if negated[idx] { -weight } else { weight };
                matched += 1;
            }
        }

        let normalized = if matched == 0 {
            0.0
        } else {
            raw / matched as f64
        };

        clamp(normalized * self.intensity_modifier(lexicon, tokens), -1.0, 1.0)
    }

    /// Marks `i+1..=i+window` for every negator at `i`; windows union.
    pub fn negated_positions(&self, lexicon: &Lexicon, tokens: &[String]) -> Vec<bool> {
        let mut negated = vec![false; tokens.len()];
        for (idx, token) in tokens.iter().enumerate() {
            if !lexicon.is_negator(token) {
                continue;
            }
            let end = idx
                .saturating_add(self.config.negation_window)
                .min(tokens.len() - 1);
            for slot in negated.iter_mut().take(end + 1).skip(idx + 1) {
                *slot = true;
            }
        }
        negated
    }

    pub fn intensity_modifier(&self, lexicon: &Lexicon, tokens: &[String]) -> f64 {
        let weight = self.config.intensifier_weight;
        let modifier = tokens
            .iter()
            .filter_map(|token| lexicon.intensity(token))
            .fold(1.0, |acc, intensity| match intensity {
                Intensity::High => acc + weight,
                Intensity::Low => acc - weight / 2.0,
            });
        clamp(modifier, MIN_MODIFIER, MAX_MODIFIER)
    }
}
