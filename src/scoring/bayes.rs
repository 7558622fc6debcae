use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::BayesProbs;

const POSITIVE_PRIOR: f64 = 0.4;
const NEGATIVE_PRIOR: f64 = 0.3;
const NEUTRAL_PRIOR: f64 = 0.3;

const POSITIVE_WORDS: &[(&str, f64)] = &[
    ("feliz", 0.09),
    ("excelente", 0.08),
    ("genial", 0.07),
    ("bien", 0.06),
    ("bueno", 0.06),
    ("buena", 0.05),
    ("agradecido", 0.06),
    ("agradecida", 0.06),
    ("maravilloso", 0.06),
    ("contento", 0.05),
    ("contenta", 0.05),
    ("alegre", 0.05),
    ("amor", 0.05),
    ("increíble", 0.05),
    ("tranquilo", 0.04),
    ("tranquila", 0.04),
    ("disfruté", 0.04),
    ("gracias", 0.04),
    ("mejor", 0.04),
    ("sonrisa", 0.04),
    ("logro", 0.04),
    ("éxito", 0.04),
    ("familia", 0.03),
    ("amigos", 0.03),
    ("paz", 0.03),
];

const NEGATIVE_WORDS: &[(&str, f64)] = &[
    ("triste", 0.08),
    ("mal", 0.07),
    ("terrible", 0.06),
    ("horrible", 0.06),
    ("deprimido", 0.06),
    ("deprimida", 0.06),
    ("cansado", 0.05),
    ("cansada", 0.05),
    ("estrés", 0.05),
    ("preocupado", 0.05),
    ("preocupada", 0.05),
    ("ansiedad", 0.05),
    ("odio", 0.05),
    ("miedo", 0.04),
    ("llorar", 0.04),
    ("lloré", 0.04),
    ("enojado", 0.04),
    ("enojada", 0.04),
    ("problema", 0.04),
    ("difícil", 0.04),
    ("peor", 0.04),
    ("aburrido", 0.03),
    ("no", 0.03),
    ("nunca", 0.03),
];

const NEUTRAL_WORDS: &[(&str, f64)] = &[
    ("normal", 0.05),
    ("día", 0.04),
    ("hoy", 0.04),
    ("fue", 0.03),
    ("trabajo", 0.03),
    ("casa", 0.03),
    ("rutina", 0.03),
    ("igual", 0.03),
    ("regular", 0.03),
    ("comí", 0.02),
    ("fui", 0.02),
    ("hice", 0.02),
    ("estuve", 0.02),
    ("tarde", 0.02),
    ("mañana", 0.02),
    ("noche", 0.02),
    ("semana", 0.02),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SentimentClass {
    Positive,
    Negative,
    Neutral,
}

impl SentimentClass {
    pub const ALL: [SentimentClass; 3] = [
        SentimentClass::Positive,
        SentimentClass::Negative,
        SentimentClass::Neutral,
    ];
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BayesConfig {
    /// Stand-in for `P(word|class)` when a class has never seen the word.
    pub smoothing: f64,
}

impl Default for BayesConfig {
    fn default() -> Self {
        Self { smoothing: 0.01 }
    }
}

/// Fixed priors and sparse per-class word likelihoods.
#[derive(Debug, Clone)]
pub struct BayesModel {
    priors: HashMap<SentimentClass, f64>,
    likelihoods: HashMap<SentimentClass, HashMap<&'static str, f64>>,
}

impl BayesModel {
    pub fn seeded() -> Self {
        let priors = HashMap::from([
            (SentimentClass::Positive, POSITIVE_PRIOR),
            (SentimentClass::Negative, NEGATIVE_PRIOR),
            (SentimentClass::Neutral, NEUTRAL_PRIOR),
        ]);
        let likelihoods: HashMap<SentimentClass, HashMap<&'static str, f64>> = HashMap::from([
            (SentimentClass::Positive, POSITIVE_WORDS.iter().copied().collect()),
            (SentimentClass::Negative, NEGATIVE_WORDS.iter().copied().collect()),
            (SentimentClass::Neutral, NEUTRAL_WORDS.iter().copied().collect()),
        ]);
        Self { priors, likelihoods }
    }

    pub fn prior(&self, class: SentimentClass) -> f64 {
        self.priors.get(&class).copied().unwrap_or(0.0)
    }

    pub fn likelihood(&self, class: SentimentClass, word: &str) -> Option<f64> {
        self.likelihoods
            .get(&class)
            .and_then(|words| words.get(word))
            .copied()
    }
}

impl Default for BayesModel {
    fn default() -> Self {
        Self::seeded()
    }
}

#[derive(Debug, Clone)]
pub struct BayesClassifier {
    model: BayesModel,
    config: BayesConfig,
}

impl BayesClassifier {
    pub fn new(model: BayesModel, config: BayesConfig) -> Self {
        Self { model, config }
    }

    pub fn log_score(&self, class: SentimentClass, tokens: &[String]) -> f64 {
        tokens.iter().fold(self.model.prior(class).ln(), |acc, token| {
            let probability = self
                .model
                .likelihood(class, token)
                .unwrap_or(self.config.smoothing);
            acc + probability.ln()
        })
    }

    pub fn predict(&self, tokens: &[String]) -> BayesProbs {
        if tokens.is_empty() {
            return BayesProbs::uniform();
        }

        let logs = SentimentClass::ALL.map(|class| self.log_score(class, tokens));
        let max = logs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let exps = logs.map(|value| (value - max).exp());
        let sum: f64 = exps.iter().sum();
        if !sum.is_finite() || sum <= 0.0 {
            return BayesProbs::uniform();
        }

        BayesProbs {
            positive: exps[0] / sum,
            negative: exps[1] / sum,
            neutral: exps[2] / sum,
        }
    }
}
