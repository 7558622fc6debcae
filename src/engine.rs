use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};
use tracing::debug;

use crate::cache::ResultCache;
use crate::config::EngineConfig;
use crate::lexicon::Lexicon;
use crate::scoring::{
    BayesClassifier, BayesModel, EmotionDetector, FusionScorer, HeuristicScorer, ScoringPipeline,
};
use crate::text::normalize;
use crate::{round3, AnalysisResult, Mood};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchItem {
    pub text: String,
    pub result: AnalysisResult,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total: usize,
    pub average_score: f64,
    pub sentiment_distribution: BTreeMap<Mood, usize>,
    pub most_common_sentiment: Option<Mood>,
}

/// Mood inference over diary text. Tables are fixed at construction; the
/// result cache is the only state that changes between calls.
#[derive(Debug)]
pub struct MoodEngine {
    config: EngineConfig,
    pipeline: ScoringPipeline,
    cache: Mutex<ResultCache>,
}

impl MoodEngine {
    pub fn new(config: EngineConfig) -> Self {
        let config = config.sanitized();
        let pipeline = ScoringPipeline::new(
            Lexicon::spanish(),
            HeuristicScorer::new(config.heuristic.clone()),
            BayesClassifier::new(BayesModel::seeded(), config.bayes.clone()),
            EmotionDetector::new(),
            FusionScorer::new(config.fusion.clone()),
        );
        let cache = Mutex::new(ResultCache::new(config.cache.capacity));
        Self {
            config,
            pipeline,
            cache,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn pipeline(&self) -> &ScoringPipeline {
        &self.pipeline
    }

    pub fn analyze(&self, text: &str) -> AnalysisResult {
        if let Some(hit) = self.lock_cache().get(text) {
            debug!(chars = text.len(), "mood cache hit");
            return hit.clone();
        }

        let tokens = normalize(text);
        if tokens.len() < self.config.analysis.min_words {
            debug!(
                words = tokens.len(),
                min_words = self.config.analysis.min_words,
                "text below word threshold"
            );
            return AnalysisResult::neutral(tokens.len());
        }

        let result = self.pipeline.score(&tokens);
        let mut cache = self.lock_cache();
        if let Some(evicted) = cache.insert(text.to_string(), result.clone()) {
            debug!(
                evicted_chars = evicted.len(),
                capacity = cache.capacity(),
                "mood cache evicted oldest entry"
            );
        }
        drop(cache);
        result
    }

    pub fn get_mood(&self, text: &str) -> Mood {
        self.analyze(text).mood
    }

    pub fn analyze_batch<S: AsRef<str>>(&self, texts: &[S]) -> Vec<BatchItem> {
        texts
            .iter()
            .map(|text| BatchItem {
                text: text.as_ref().to_string(),
                result: self.analyze(text.as_ref()),
            })
            .collect()
    }

    /// Aggregates over `texts`. Ties for the most common mood go to the mood
    /// seen first.
    pub fn get_statistics<S: AsRef<str>>(&self, texts: &[S]) -> Statistics {
        let mut distribution = BTreeMap::new();
        let mut first_seen: Vec<Mood> = Vec::new();
        let mut score_sum = 0.0;

        for text in texts {
            let result = self.analyze(text.as_ref());
            score_sum += result.score;
            *distribution.entry(result.mood).or_insert(0usize) += 1;
            if !first_seen.contains(&result.mood) {
                first_seen.push(result.mood);
            }
        }

        let mut most_common: Option<(Mood, usize)> = None;
        for mood in first_seen {
            let count = distribution.get(&mood).copied().unwrap_or(0);
            if most_common.map_or(true, |(_, best)| count > best) {
                most_common = Some((mood, count));
            }
        }

        let average_score = if texts.is_empty() {
            0.0
        } else {
            round3(score_sum / texts.len() as f64)
        };

        Statistics {
            total: texts.len(),
            average_score,
            sentiment_distribution: distribution,
            most_common_sentiment: most_common.map(|(mood, _)| mood),
        }
    }

    pub fn clear_cache(&self) {
        self.lock_cache().clear();
        debug!("mood cache cleared");
    }

    pub fn cache_len(&self) -> usize {
        self.lock_cache().len()
    }

    // The cache only holds derived results, so a poisoned lock is still usable.
    fn lock_cache(&self) -> MutexGuard<'_, ResultCache> {
        self.cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for MoodEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
