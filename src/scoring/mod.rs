pub mod bayes;
pub mod emotion;
pub mod fusion;
pub mod heuristic;
pub mod pipeline;

pub use bayes::{BayesClassifier, BayesConfig, BayesModel, SentimentClass};
pub use emotion::EmotionDetector;
pub use fusion::{FusedScore, FusionConfig, FusionScorer};
pub use heuristic::{HeuristicConfig, HeuristicScorer};
pub use pipeline::ScoringPipeline;
