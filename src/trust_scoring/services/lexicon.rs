//! Keyword lexicon backing the deterministic review analysis.
//!
//! Matching is case-insensitive and boundary-aware: a term only counts
//! when it is not embedded inside a longer word, so "deliver" does not
//! fire on "delivery" and "late" does not fire on "plate". Multi-word
//! phrases are matched on the raw text after lowercasing.

use crate::trust_scoring::domain::Aspect;

/// Terms that mark a review as talking about product quality.
const QUALITY_TRIGGERS: &[&str] = &[
    "quality",
    "broke",
    "broken",
    "defect",
    "defective",
    "sturdy",
    "durable",
    "flimsy",
    "well made",
    "build",
    "material",
    "craftsmanship",
    "as described",
    "match the description",
];

/// Terms that mark a review as talking about delivery and shipping.
const DELIVERY_TRIGGERS: &[&str] = &[
    "delivery",
    "deliver",
    "delivered",
    "shipping",
    "shipped",
    "arrived",
    "arrive",
    "package",
    "packaging",
    "courier",
    "on time",
    "late",
];

/// Terms that mark a review as talking about customer service.
const CUSTOMER_SERVICE_TRIGGERS: &[&str] = &[
    "customer service",
    "support",
    "helpful",
    "unhelpful",
    "responsive",
    "respond",
    "response",
    "refund",
    "warranty",
    "service",
];

/// Words and phrases that read as praise.
pub const POSITIVE_TERMS: &[&str] = &[
    "excellent",
    "outstanding",
    "amazing",
    "great",
    "good",
    "love",
    "perfect",
    "awesome",
    "fantastic",
    "fast",
    "helpful",
    "recommend",
    "exceeded",
    "happy",
    "pleased",
    "decent",
    "safely",
    "on time",
    "works well",
];

/// Words and phrases that read as complaints.
pub const NEGATIVE_TERMS: &[&str] = &[
    "poor",
    "bad",
    "terrible",
    "awful",
    "horrible",
    "broke",
    "broken",
    "defective",
    "disappointed",
    "disappointing",
    "waste",
    "slow",
    "late",
    "unhelpful",
    "refund",
    "worst",
    "cheaply",
    "stopped working",
    "longer than expected",
    "didn't match",
];

/// Trigger terms for one aspect.
pub fn aspect_triggers(aspect: Aspect) -> &'static [&'static str] {
    match aspect {
        Aspect::Quality => QUALITY_TRIGGERS,
        Aspect::Delivery => DELIVERY_TRIGGERS,
        Aspect::CustomerService => CUSTOMER_SERVICE_TRIGGERS,
    }
}

/// Whether the text talks about the given aspect at all.
pub fn mentions_aspect(text: &str, aspect: Aspect) -> bool {
    let text = text.to_lowercase();
    aspect_triggers(aspect)
        .iter()
        .any(|term| contains_term(&text, term))
}

/// Count distinct positive and negative terms in the text.
///
/// Each term counts at most once per text, so repetition does not
/// inflate the tone of a single review.
pub fn sentiment_hits(text: &str) -> (usize, usize) {
    let text = text.to_lowercase();
    let positive = POSITIVE_TERMS
        .iter()
        .filter(|term| contains_term(&text, term))
        .count();
    let negative = NEGATIVE_TERMS
        .iter()
        .filter(|term| contains_term(&text, term))
        .count();
    (positive, negative)
}

/// Boundary-aware substring search. `text` must already be lowercase.
fn contains_term(text: &str, term: &str) -> bool {
    let mut start = 0;
    while let Some(offset) = text[start..].find(term) {
        let begin = start + offset;
        let end = begin + term.len();
        let before_ok = text[..begin]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let after_ok = text[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        if before_ok && after_ok {
            return true;
        }
        // All terms start with an ASCII letter, so begin + 1 stays on a
        // char boundary.
        start = begin + 1;
    }
    false
}
