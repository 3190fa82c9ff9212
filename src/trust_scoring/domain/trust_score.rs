use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::Result;

/// The range every score in the system lives in.
pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;

/// Clamp a raw score into the 0-100 range.
pub fn clamp_score(value: f64) -> f64 {
    value.clamp(MIN_SCORE, MAX_SCORE)
}

/// Round a score to one decimal place for reporting.
pub fn round_score(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Overall tone of the reviews for one aspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    #[serde(alias = "Positive")]
    Positive,
    #[serde(alias = "Neutral")]
    Neutral,
    #[serde(alias = "Negative")]
    Negative,
}

impl Sentiment {
    /// Wire form, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }
}

/// The three aspects every analysis covers, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Aspect {
    Quality,
    Delivery,
    #[serde(rename = "Customer Service")]
    CustomerService,
}

impl Aspect {
    pub const ALL: [Aspect; 3] = [Aspect::Quality, Aspect::Delivery, Aspect::CustomerService];

    /// Display name as it appears in API responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            Aspect::Quality => "Quality",
            Aspect::Delivery => "Delivery",
            Aspect::CustomerService => "Customer Service",
        }
    }

    /// Lowercase form for use inside generated sentences.
    pub fn label(&self) -> &'static str {
        match self {
            Aspect::Quality => "quality",
            Aspect::Delivery => "delivery",
            Aspect::CustomerService => "customer service",
        }
    }
}

impl std::fmt::Display for Aspect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Score and evidence for a single aspect of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectAnalysis {
    pub aspect: Aspect,
    pub score: f64,
    pub sentiment: Sentiment,
    pub key_points: Vec<String>,
}

/// The complete trust verdict for a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrustScore {
    pub product_id: Uuid,
    pub overall_score: f64,
    pub total_reviews: u32,
    pub aspect_analysis: Vec<AspectAnalysis>,
    pub summary: String,
    pub recommendation: String,
    pub updated_at: DateTime<Utc>,
}

impl TrustScore {
    /// Check the structural invariants every stored or served score must
    /// hold: scores in range and exactly the three known aspects in
    /// reporting order. Externally produced scores go through this before
    /// they are accepted.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_SCORE..=MAX_SCORE).contains(&self.overall_score) {
            anyhow::bail!(
                "overall_score {} is outside the {}-{} range",
                self.overall_score,
                MIN_SCORE,
                MAX_SCORE
            );
        }

        let aspects: Vec<Aspect> = self.aspect_analysis.iter().map(|a| a.aspect).collect();
        if aspects != Aspect::ALL {
            anyhow::bail!(
                "aspect_analysis must cover Quality, Delivery and Customer Service exactly once, in that order"
            );
        }

        for analysis in &self.aspect_analysis {
            if !(MIN_SCORE..=MAX_SCORE).contains(&analysis.score) {
                anyhow::bail!(
                    "{} score {} is outside the {}-{} range",
                    analysis.aspect,
                    analysis.score,
                    MIN_SCORE,
                    MAX_SCORE
                );
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis(aspect: Aspect, score: f64) -> AspectAnalysis {
        AspectAnalysis {
            aspect,
            score,
            sentiment: Sentiment::Neutral,
            key_points: vec![],
        }
    }

    fn well_formed_score() -> TrustScore {
        TrustScore {
            product_id: Uuid::new_v4(),
            overall_score: 75.0,
            total_reviews: 5,
            aspect_analysis: vec![
                analysis(Aspect::Quality, 78.0),
                analysis(Aspect::Delivery, 72.0),
                analysis(Aspect::CustomerService, 65.0),
            ],
            summary: "Mixed reviews".to_string(),
            recommendation: "consider".to_string(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_clamp_score_bounds() {
        assert_eq!(clamp_score(-10.0), 0.0);
        assert_eq!(clamp_score(150.0), 100.0);
        assert_eq!(clamp_score(73.2), 73.2);
    }

    #[test]
    fn test_sentiment_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Sentiment::Positive).unwrap(),
            "\"positive\""
        );
    }

    #[test]
    fn test_sentiment_accepts_capitalized_input() {
        let sentiment: Sentiment = serde_json::from_str("\"Negative\"").unwrap();
        assert_eq!(sentiment, Sentiment::Negative);
    }

    #[test]
    fn test_aspect_serialized_names() {
        assert_eq!(
            serde_json::to_string(&Aspect::CustomerService).unwrap(),
            "\"Customer Service\""
        );
        assert_eq!(serde_json::to_string(&Aspect::Quality).unwrap(), "\"Quality\"");
    }

    #[test]
    fn test_validate_accepts_well_formed_score() {
        assert!(well_formed_score().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range_overall() {
        let mut score = well_formed_score();
        score.overall_score = 101.0;
        assert!(score.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_missing_aspect() {
        let mut score = well_formed_score();
        score.aspect_analysis.pop();
        assert!(score.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_misordered_aspects() {
        let mut score = well_formed_score();
        score.aspect_analysis.swap(0, 2);
        assert!(score.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_range_aspect_score() {
        let mut score = well_formed_score();
        score.aspect_analysis[1].score = -1.0;
        assert!(score.validate().is_err());
    }
}
