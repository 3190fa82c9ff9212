pub mod aspect_scorer;
pub mod lexicon;
pub mod trust_calculator;

pub use aspect_scorer::{AspectScorer, AspectSignals};
pub use trust_calculator::TrustCalculator;
