use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use crate::cache::CacheConfig;
use crate::scoring::heuristic::MAX_NEGATION_WINDOW;
use crate::scoring::{BayesConfig, FusionConfig, HeuristicConfig};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("failed to write config {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// How eagerly a detected mood is applied to an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sensitivity {
    Low,
    Medium,
    High,
}

impl Sensitivity {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "low" | "baja" => Some(Sensitivity::Low),
            "medium" | "media" => Some(Sensitivity::Medium),
            "high" | "alta" => Some(Sensitivity::High),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Sensitivity::Low => "low",
            Sensitivity::Medium => "medium",
            Sensitivity::High => "high",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SensitivityConfig {
    pub level: Sensitivity,
    /// Minimum confidence per level. Higher sensitivity accepts weaker signals.
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

impl Default for SensitivityConfig {
    fn default() -> Self {
        Self {
            level: Sensitivity::Medium,
            low: 0.7,
            medium: 0.5,
            high: 0.3,
        }
    }
}

impl SensitivityConfig {
    pub fn threshold(&self, level: Sensitivity) -> f64 {
        match level {
            Sensitivity::Low => self.low,
            Sensitivity::Medium => self.medium,
            Sensitivity::High => self.high,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Texts with fewer tokens get the neutral default result.
    pub min_words: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self { min_words: 2 }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub analysis: AnalysisConfig,
    pub heuristic: HeuristicConfig,
    pub bayes: BayesConfig,
    pub fusion: FusionConfig,
    pub cache: CacheConfig,
    pub sensitivity: SensitivityConfig,
}

impl EngineConfig {
    pub fn load(path: Option<PathBuf>) -> Result<(Self, Option<PathBuf>), ConfigError> {
        let config_path = path.or_else(default_config_path);
        let mut config = match config_path.as_ref() {
            Some(path) if path.exists() => {
                let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                    path: path.clone(),
                    source,
                })?;
                info!(path = %path.display(), "loaded mood config");
                toml::from_str(&contents)?
            }
            _ => EngineConfig::default(),
        };

        config.apply_env_overrides();
        Ok((config, config_path))
    }

    pub fn write(&self, path: &Path) -> Result<(), ConfigError> {
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(write_err)?;
            }
        }
        let payload = toml::to_string_pretty(self)?;
        std::fs::write(path, payload).map_err(write_err)?;
        Ok(())
    }

    pub fn threshold(&self) -> f64 {
        self.sensitivity.threshold(self.sensitivity.level)
    }

    /// Clamps or renormalizes values that would make scoring meaningless.
    pub fn sanitized(mut self) -> Self {
        let defaults = EngineConfig::default();

        let mut heuristic_weight = finite_or(self.fusion.heuristic_weight, 0.0).max(0.0);
        let mut bayes_weight = finite_or(self.fusion.bayes_weight, 0.0).max(0.0);
        let total = heuristic_weight + bayes_weight;
        if total <= 0.0 {
            warn!("fusion weights are both zero, using defaults");
            heuristic_weight = defaults.fusion.heuristic_weight;
            bayes_weight = defaults.fusion.bayes_weight;
        } else if (total - 1.0).abs() > 1e-9 {
            warn!(total, "fusion weights do not sum to 1, renormalizing");
            heuristic_weight /= total;
            bayes_weight /= total;
        }
        self.fusion.heuristic_weight = heuristic_weight;
        self.fusion.bayes_weight = bayes_weight;

        let smoothing = self.bayes.smoothing;
        if !smoothing.is_finite() || smoothing <= 0.0 || smoothing > 1.0 {
            warn!(smoothing, "smoothing outside (0, 1], using default");
            self.bayes.smoothing = defaults.bayes.smoothing;
        }

        let weight = self.heuristic.intensifier_weight;
        if !weight.is_finite() || weight < 0.0 {
            warn!(weight, "invalid intensifier weight, using default");
            self.heuristic.intensifier_weight = defaults.heuristic.intensifier_weight;
        }

        if self.heuristic.negation_window > MAX_NEGATION_WINDOW {
            warn!(
                window = self.heuristic.negation_window,
                max = MAX_NEGATION_WINDOW,
                "negation window too large, clamping"
            );
            self.heuristic.negation_window = MAX_NEGATION_WINDOW;
        }

        self.sensitivity.low = crate::clamp01(self.sensitivity.low);
        self.sensitivity.medium = crate::clamp01(self.sensitivity.medium);
        self.sensitivity.high = crate::clamp01(self.sensitivity.high);
        self
    }

    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = parse_var(&lookup, "MOOD_MIN_WORDS") {
            self.analysis.min_words = value;
        }
        if let Some(value) = lookup("MOOD_SENSITIVITY") {
            match Sensitivity::parse(&value) {
                Some(level) => self.sensitivity.level = level,
                None => warn!(value = %value, "ignoring unknown MOOD_SENSITIVITY"),
            }
        }
        if let Some(value) = parse_var(&lookup, "MOOD_CACHE_CAPACITY") {
            self.cache.capacity = value;
        }
        if let Some(value) = parse_var(&lookup, "MOOD_NEGATION_WINDOW") {
            self.heuristic.negation_window = value;
        }
        if let Some(value) = parse_var(&lookup, "MOOD_HEURISTIC_WEIGHT") {
            self.fusion.heuristic_weight = value;
        }
        if let Some(value) = parse_var(&lookup, "MOOD_BAYES_WEIGHT") {
            self.fusion.bayes_weight = value;
        }
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    lookup(key).and_then(|value| value.trim().parse::<T>().ok())
}

fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

fn default_config_path() -> Option<PathBuf> {
    env::var("MOOD_CONFIG_PATH")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| Some(PathBuf::from("config/mood.toml")))
}
