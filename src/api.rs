use mood_engine::{AnalysisResult, Sensitivity};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ApiAnalyzeRequest {
    pub text: Option<String>,
    pub sensitivity: Option<String>,
}

impl ApiAnalyzeRequest {
    pub fn into_parts(self, fallback: Sensitivity) -> Result<(String, Sensitivity), String> {
        let text = self.text.unwrap_or_default();
        if text.trim().is_empty() {
            return Err("text is required".to_string());
        }
        let sensitivity = match self.sensitivity.as_deref() {
            Some(value) => Sensitivity::parse(value)
                .ok_or_else(|| format!("invalid sensitivity: {}", value))?,
            None => fallback,
        };
        Ok((text, sensitivity))
    }
}

#[derive(Debug, Serialize)]
pub struct ApiAnalyzeResponse {
    #[serde(flatten)]
    pub result: AnalysisResult,
    pub sensitivity: Sensitivity,
    pub threshold: f64,
    pub apply: bool,
}

impl ApiAnalyzeResponse {
    pub fn new(result: AnalysisResult, sensitivity: Sensitivity, threshold: f64) -> Self {
        let apply = result.confidence >= threshold;
        Self {
            result,
            sensitivity,
            threshold,
            apply,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ApiTextsRequest {
    pub texts: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(text: Option<&str>, sensitivity: Option<&str>) -> ApiAnalyzeRequest {
        ApiAnalyzeRequest {
            text: text.map(str::to_string),
            sensitivity: sensitivity.map(str::to_string),
        }
    }

    fn result_with_confidence(confidence: f64) -> AnalysisResult {
        AnalysisResult {
            confidence,
            ..AnalysisResult::neutral(3)
        }
    }

    #[test]
    fn missing_text_is_rejected() {
        let err = request(None, None)
            .into_parts(Sensitivity::Medium)
            .expect_err("missing text");
        assert_eq!(err, "text is required");
    }

    #[test]
    fn blank_text_is_rejected() {
        assert!(request(Some("  \n\t "), None)
            .into_parts(Sensitivity::Medium)
            .is_err());
    }

    #[test]
    fn unknown_sensitivity_is_rejected() {
        let err = request(Some("hoy fue un buen día"), Some("bogus"))
            .into_parts(Sensitivity::Medium)
            .expect_err("bad sensitivity");
        assert!(err.contains("bogus"));
    }

    #[test]
    fn sensitivity_falls_back_to_configured_level() {
        let (text, sensitivity) = request(Some("hoy fue un buen día"), None)
            .into_parts(Sensitivity::Low)
            .expect("valid request");
        assert_eq!(text, "hoy fue un buen día");
        assert_eq!(sensitivity, Sensitivity::Low);

        let (_, sensitivity) = request(Some("hoy fue un buen día"), Some("alta"))
            .into_parts(Sensitivity::Low)
            .expect("valid request");
        assert_eq!(sensitivity, Sensitivity::High);
    }

    #[test]
    fn apply_flag_includes_threshold() {
        let at = ApiAnalyzeResponse::new(result_with_confidence(0.5), Sensitivity::Medium, 0.5);
        assert!(at.apply);

        let below =
            ApiAnalyzeResponse::new(result_with_confidence(0.499), Sensitivity::Medium, 0.5);
        assert!(!below.apply);
    }

    #[test]
    fn response_flattens_result_fields() {
        let response = ApiAnalyzeResponse::new(result_with_confidence(0.8), Sensitivity::High, 0.3);
        let value = serde_json::to_value(&response).expect("serialize response");
        assert_eq!(value["mood"], "😐");
        assert_eq!(value["wordCount"], 3);
        assert_eq!(value["sensitivity"], "high");
        assert_eq!(value["apply"], true);
    }
}
