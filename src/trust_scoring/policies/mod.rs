pub mod score_bands;

pub use score_bands::ScoreBand;
