pub mod product;
pub mod review;
pub mod trust_score;

pub use product::{Product, ProductDraft};
pub use review::{Platform, Rating, Review};
pub use trust_score::{clamp_score, round_score, Aspect, AspectAnalysis, Sentiment, TrustScore};
