use std::collections::HashSet;

use chrono::Utc;
use uuid::Uuid;

use crate::trust_scoring::domain::{
    clamp_score, round_score, Aspect, AspectAnalysis, Review, Sentiment, TrustScore,
};
use crate::trust_scoring::policies::score_bands::{
    ScoreBand, ASPECT_COMPONENT_WEIGHT, RATING_COMPONENT_WEIGHT,
};

use super::aspect_scorer::AspectScorer;

/// TrustCalculator produces the complete trust verdict for a product.
///
/// The overall score blends two components: the star ratings themselves
/// and the per-aspect text analysis. Verified purchases weigh into both.
/// The same inputs always produce the same verdict, which makes the
/// calculator usable both as the default engine and as the fallback when
/// an external engine fails.
pub struct TrustCalculator;

impl TrustCalculator {
    /// Compute the trust score for a product from its reviews.
    pub fn calculate(product_id: Uuid, reviews: &[Review]) -> TrustScore {
        if reviews.is_empty() {
            return Self::empty_score(product_id);
        }

        let rating_score = Self::rating_score(reviews);
        let aspect_analysis = AspectScorer::analyze(reviews);
        let aspect_mean = aspect_analysis.iter().map(|a| a.score).sum::<f64>()
            / aspect_analysis.len() as f64;

        let overall_score = round_score(clamp_score(
            RATING_COMPONENT_WEIGHT * rating_score + ASPECT_COMPONENT_WEIGHT * aspect_mean,
        ));
        let band = ScoreBand::for_score(overall_score);

        TrustScore {
            product_id,
            overall_score,
            total_reviews: reviews.len() as u32,
            summary: Self::summary(band, reviews),
            recommendation: Self::recommendation(band, &aspect_analysis),
            aspect_analysis,
            updated_at: Utc::now(),
        }
    }

    /// Weighted mean star rating mapped onto the 0-100 range.
    pub fn rating_score(reviews: &[Review]) -> f64 {
        let mut weighted = 0.0;
        let mut total_weight = 0.0;
        for review in reviews {
            weighted += review.weight() * review.rating.fraction();
            total_weight += review.weight();
        }
        if total_weight == 0.0 {
            return 50.0;
        }
        100.0 * weighted / total_weight
    }

    /// Neutral verdict served when no reviews could be gathered.
    fn empty_score(product_id: Uuid) -> TrustScore {
        let aspect_analysis = Aspect::ALL
            .into_iter()
            .map(|aspect| AspectAnalysis {
                aspect,
                score: 50.0,
                sentiment: Sentiment::Neutral,
                key_points: vec!["No reviews available to analyze".to_string()],
            })
            .collect();

        TrustScore {
            product_id,
            overall_score: 50.0,
            total_reviews: 0,
            aspect_analysis,
            summary: "No reviews found for this product".to_string(),
            recommendation: "consider - Not enough review data to make a recommendation"
                .to_string(),
            updated_at: Utc::now(),
        }
    }

    /// One-line description of the review base.
    fn summary(band: ScoreBand, reviews: &[Review]) -> String {
        let platforms: HashSet<_> = reviews.iter().map(|r| r.platform).collect();
        let mean_stars = reviews
            .iter()
            .map(|r| f64::from(r.rating.stars()))
            .sum::<f64>()
            / reviews.len() as f64;
        let noun = if platforms.len() == 1 {
            "platform"
        } else {
            "platforms"
        };

        format!(
            "{} across {} {} with an average rating of {:.1} stars",
            band.descriptor(),
            platforms.len(),
            noun,
            mean_stars
        )
    }

    /// Verdict plus the aspect that most supports or undermines it.
    fn recommendation(band: ScoreBand, aspects: &[AspectAnalysis]) -> String {
        let strongest = aspects
            .iter()
            .max_by(|a, b| a.score.total_cmp(&b.score))
            .map(|a| a.aspect.label())
            .unwrap_or("quality");
        let weakest = aspects
            .iter()
            .min_by(|a, b| a.score.total_cmp(&b.score))
            .map(|a| a.aspect.label())
            .unwrap_or("quality");

        match band {
            ScoreBand::High => format!(
                "buy - Reviewers consistently rate this product well and {} stands out",
                strongest
            ),
            ScoreBand::Moderate => format!(
                "consider - Generally positive reviews with reservations about {}",
                weakest
            ),
            ScoreBand::Low => format!(
                "avoid - Recurring complaints, especially about {}",
                weakest
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trust_scoring::domain::{Platform, Rating};
    use chrono::NaiveDate;

    fn review(rating: u8, verified: bool, platform: Platform, text: &str) -> Review {
        Review {
            id: Uuid::new_v4(),
            product_id: Uuid::new_v4(),
            author: "Reviewer".to_string(),
            rating: Rating::new(rating).unwrap(),
            title: String::new(),
            content: text.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            verified,
            platform,
        }
    }

    fn glowing_reviews() -> Vec<Review> {
        vec![
            review(5, true, Platform::Amazon, "Excellent quality, fast delivery, great customer service"),
            review(5, true, Platform::Ebay, "Amazing quality, arrived on time, very helpful support"),
            review(5, false, Platform::Walmart, "Outstanding quality, perfect delivery, great service"),
        ]
    }

    fn damning_reviews() -> Vec<Review> {
        vec![
            review(1, true, Platform::Amazon, "Terrible quality, broke quickly, awful customer service"),
            review(1, true, Platform::Target, "Poor quality, late delivery, unhelpful support"),
            review(2, false, Platform::Walmart, "Bad quality, slow shipping, worst service"),
        ]
    }

    #[test]
    fn test_empty_reviews_give_neutral_verdict() {
        let product_id = Uuid::new_v4();
        let score = TrustCalculator::calculate(product_id, &[]);

        assert_eq!(score.product_id, product_id);
        assert_eq!(score.overall_score, 50.0);
        assert_eq!(score.total_reviews, 0);
        assert!(score.recommendation.starts_with("consider"));
        for analysis in &score.aspect_analysis {
            assert_eq!(analysis.score, 50.0);
            assert_eq!(analysis.sentiment, Sentiment::Neutral);
        }
        assert!(score.validate().is_ok());
    }

    #[test]
    fn test_glowing_reviews_recommend_buying() {
        let score = TrustCalculator::calculate(Uuid::new_v4(), &glowing_reviews());

        assert!(score.overall_score >= 80.0);
        assert!(score.recommendation.starts_with("buy"));
        assert!(score.summary.starts_with("Strongly positive reviews"));
        assert_eq!(score.total_reviews, 3);
        assert!(score.validate().is_ok());
    }

    #[test]
    fn test_damning_reviews_recommend_avoiding() {
        let score = TrustCalculator::calculate(Uuid::new_v4(), &damning_reviews());

        assert!(score.overall_score < 60.0);
        assert!(score.recommendation.starts_with("avoid"));
        assert!(score.summary.starts_with("Largely negative reviews"));
        assert!(score.validate().is_ok());
    }

    #[test]
    fn test_summary_counts_distinct_platforms() {
        let reviews = vec![
            review(4, true, Platform::Amazon, "good quality"),
            review(4, true, Platform::Amazon, "good quality again"),
        ];
        let score = TrustCalculator::calculate(Uuid::new_v4(), &reviews);
        assert!(score.summary.contains("1 platform "));
        assert!(score.summary.contains("4.0 stars"));
    }

    #[test]
    fn test_rating_score_weights_verified_reviews() {
        let balanced = vec![
            review(5, false, Platform::Amazon, "no keywords here"),
            review(1, false, Platform::Ebay, "no keywords here"),
        ];
        assert_eq!(TrustCalculator::rating_score(&balanced), 50.0);

        let tilted = vec![
            review(5, true, Platform::Amazon, "no keywords here"),
            review(1, false, Platform::Ebay, "no keywords here"),
        ];
        assert!(TrustCalculator::rating_score(&tilted) > 50.0);
    }

    #[test]
    fn test_same_reviews_give_same_verdict() {
        let reviews = glowing_reviews();
        let first = TrustCalculator::calculate(Uuid::new_v4(), &reviews);
        let second = TrustCalculator::calculate(Uuid::new_v4(), &reviews);

        assert_eq!(first.overall_score, second.overall_score);
        assert_eq!(first.summary, second.summary);
        assert_eq!(first.recommendation, second.recommendation);
        assert_eq!(
            first.aspect_analysis.len(),
            second.aspect_analysis.len()
        );
        for (a, b) in first.aspect_analysis.iter().zip(&second.aspect_analysis) {
            assert_eq!(a.score, b.score);
            assert_eq!(a.sentiment, b.sentiment);
            assert_eq!(a.key_points, b.key_points);
        }
    }

    #[test]
    fn test_overall_blends_ratings_and_aspects() {
        // High stars with no aspect mentions: aspects sit at neutral 50,
        // so the overall lands between the rating score and 50.
        let reviews = vec![
            review(5, true, Platform::Amazon, "nothing relevant"),
            review(5, true, Platform::Ebay, "nothing relevant"),
        ];
        let score = TrustCalculator::calculate(Uuid::new_v4(), &reviews);
        // rating component 100, aspect component 50
        assert_eq!(score.overall_score, 80.0);
    }
}
