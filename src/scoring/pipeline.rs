use crate::lexicon::Lexicon;
use crate::scoring::{BayesClassifier, EmotionDetector, FusionScorer, HeuristicScorer};
use crate::{round3, AnalysisDetails, AnalysisResult};

/// Runs every scorer over the same tokens and fuses the outcome.
#[derive(Debug, Clone)]
pub struct ScoringPipeline {
    lexicon: Lexicon,
    heuristic: HeuristicScorer,
    bayes: BayesClassifier,
    emotions: EmotionDetector,
    fusion: FusionScorer,
}

impl ScoringPipeline {
    pub fn new(
        lexicon: Lexicon,
        heuristic: HeuristicScorer,
        bayes: BayesClassifier,
        emotions: EmotionDetector,
        fusion: FusionScorer,
    ) -> Self {
        Self {
            lexicon,
            heuristic,
            bayes,
            emotions,
            fusion,
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn heuristic(&self) -> &HeuristicScorer {
        &self.heuristic
    }

    pub fn bayes(&self) -> &BayesClassifier {
        &self.bayes
    }

    pub fn score(&self, tokens: &[String]) -> AnalysisResult {
        let heuristic_score = self.heuristic.score(&self.lexicon, tokens);
        let bayes_probs = self.bayes.predict(tokens);
        let emotions = self.emotions.detect(&self.lexicon, tokens);
        let fused = self.fusion.fuse(heuristic_score, &bayes_probs);

        AnalysisResult {
            mood: fused.mood,
            score: round3(fused.score),
            confidence: round3(fused.confidence),
            word_count: tokens.len(),
            emotions,
            details: AnalysisDetails {
                heuristic_score: round3(heuristic_score),
                bayes_score: round3(bayes_probs.score()),
                bayes_probs,
            },
        }
    }
}
