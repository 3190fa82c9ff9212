use crate::trust_scoring::domain::{
    clamp_score, round_score, Aspect, AspectAnalysis, Review,
};
use crate::trust_scoring::policies::score_bands::{
    sentiment_for_polarity, POLARITY_SENTIMENT_THRESHOLD,
};

use super::lexicon;

/// Raw per-aspect tallies gathered from a set of reviews.
#[derive(Debug, Clone, PartialEq)]
pub struct AspectSignals {
    pub aspect: Aspect,
    /// Reviews that talk about this aspect at all.
    pub mentions: usize,
    /// Mentions coming from verified purchases.
    pub verified_mentions: usize,
    /// Mentions whose polarity reads as positive.
    pub positive: usize,
    /// Mentions whose polarity reads as negative.
    pub negative: usize,
    /// Weighted mean polarity across mentions, 0.0 when nothing mentions
    /// the aspect.
    pub polarity: f64,
}

/// AspectScorer turns reviews into per-aspect scores with evidence.
///
/// A review contributes to an aspect only when its text mentions that
/// aspect. The contribution is the review's polarity, a blend of its star
/// rating and the praise/complaint terms in its text, weighted so that
/// verified purchases count for more.
pub struct AspectScorer;

impl AspectScorer {
    /// Score all three aspects for the given reviews, in reporting order.
    pub fn analyze(reviews: &[Review]) -> Vec<AspectAnalysis> {
        Aspect::ALL
            .into_iter()
            .map(|aspect| {
                let signals = Self::signals_for(aspect, reviews);
                AspectAnalysis {
                    aspect,
                    score: round_score(clamp_score(50.0 + 50.0 * signals.polarity)),
                    sentiment: sentiment_for_polarity(signals.polarity),
                    key_points: Self::key_points(&signals),
                }
            })
            .collect()
    }

    /// Gather the raw tallies for one aspect.
    pub fn signals_for(aspect: Aspect, reviews: &[Review]) -> AspectSignals {
        let mut signals = AspectSignals {
            aspect,
            mentions: 0,
            verified_mentions: 0,
            positive: 0,
            negative: 0,
            polarity: 0.0,
        };

        let mut weighted_polarity = 0.0;
        let mut total_weight = 0.0;

        for review in reviews {
            if !lexicon::mentions_aspect(&review.full_text(), aspect) {
                continue;
            }

            signals.mentions += 1;
            if review.verified {
                signals.verified_mentions += 1;
            }

            let polarity = Self::review_polarity(review);
            if polarity > POLARITY_SENTIMENT_THRESHOLD {
                signals.positive += 1;
            } else if polarity < -POLARITY_SENTIMENT_THRESHOLD {
                signals.negative += 1;
            }

            weighted_polarity += review.weight() * polarity;
            total_weight += review.weight();
        }

        if total_weight > 0.0 {
            signals.polarity = weighted_polarity / total_weight;
        }

        signals
    }

    /// Polarity of a single review in [-1.0, 1.0].
    ///
    /// Blends the star rating with the tone of the text in equal parts.
    /// When the text carries no recognized praise or complaint terms, the
    /// rating alone decides.
    pub fn review_polarity(review: &Review) -> f64 {
        let rating_polarity = review.rating.polarity();
        let (positive, negative) = lexicon::sentiment_hits(&review.full_text());

        if positive + negative == 0 {
            return rating_polarity;
        }

        let text_polarity = (positive as f64 - negative as f64) / (positive + negative) as f64;
        (rating_polarity + text_polarity) / 2.0
    }

    /// Short, templated evidence lines for one aspect. At most three.
    fn key_points(signals: &AspectSignals) -> Vec<String> {
        if signals.mentions == 0 {
            return vec!["Not mentioned in the reviews analyzed".to_string()];
        }

        let label = signals.aspect.label();
        let mut points = Vec::new();

        if signals.positive > 0 {
            points.push(format!(
                "{} of {} reviews are positive about {}",
                signals.positive, signals.mentions, label
            ));
        }
        if signals.negative > 0 {
            points.push(format!(
                "{} of {} reviews report {} problems",
                signals.negative, signals.mentions, label
            ));
        }
        if points.is_empty() {
            points.push(format!("Reviews mention {} without strong sentiment", label));
        }
        if signals.verified_mentions > 0 && points.len() < 3 {
            points.push(format!(
                "Includes {} verified purchase reviews",
                signals.verified_mentions
            ));
        }

        points
    }
}
