use crate::trust_scoring::domain::Sentiment;

/// Scores at or above this value count as high trust.
pub const HIGH_TRUST_THRESHOLD: f64 = 80.0;

/// Scores at or above this value (but below the high threshold) count as
/// moderate trust.
pub const MODERATE_TRUST_THRESHOLD: f64 = 60.0;

/// Weight applied to reviews from verified purchases when aggregating.
pub const VERIFIED_REVIEW_WEIGHT: f64 = 1.5;

/// Share of the overall score contributed by raw star ratings.
pub const RATING_COMPONENT_WEIGHT: f64 = 0.6;

/// Share of the overall score contributed by per-aspect text analysis.
pub const ASPECT_COMPONENT_WEIGHT: f64 = 0.4;

/// Polarity above this value reads as positive, below its negation as
/// negative, and anything between as neutral.
pub const POLARITY_SENTIMENT_THRESHOLD: f64 = 0.15;

/// ScoreBand policy for turning a 0-100 trust score into a verdict
///
/// This policy encodes the business rules shared by every consumer of a
/// trust score: which numeric ranges read as high, moderate or low trust,
/// and what purchase advice each band carries.
///
/// Band boundaries:
/// 1. High: score >= 80
/// 2. Moderate: 60 <= score < 80
/// 3. Low: score < 60
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    High,
    Moderate,
    Low,
}

impl ScoreBand {
    /// Classifies a trust score into its band
    ///
    /// # Arguments
    /// * `score` - Overall trust score, expected in the 0-100 range
    ///
    /// # Returns
    /// The band the score falls into
    pub fn for_score(score: f64) -> Self {
        if score >= HIGH_TRUST_THRESHOLD {
            ScoreBand::High
        } else if score >= MODERATE_TRUST_THRESHOLD {
            ScoreBand::Moderate
        } else {
            ScoreBand::Low
        }
    }

    /// Purchase advice keyword for this band, as used in recommendations
    pub fn verdict(&self) -> &'static str {
        match self {
            ScoreBand::High => "buy",
            ScoreBand::Moderate => "consider",
            ScoreBand::Low => "avoid",
        }
    }

    /// Short description of the overall review tone for this band
    pub fn descriptor(&self) -> &'static str {
        match self {
            ScoreBand::High => "Strongly positive reviews",
            ScoreBand::Moderate => "Mixed reviews",
            ScoreBand::Low => "Largely negative reviews",
        }
    }
}

/// Maps an aggregate polarity in [-1.0, 1.0] onto a sentiment label
///
/// # Arguments
/// * `polarity` - Weighted mean review polarity for an aspect
///
/// # Returns
/// The sentiment label reported for that aspect
pub fn sentiment_for_polarity(polarity: f64) -> Sentiment {
    if polarity > POLARITY_SENTIMENT_THRESHOLD {
        Sentiment::Positive
    } else if polarity < -POLARITY_SENTIMENT_THRESHOLD {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}
