/// Analysis engine adapters implementing the AnalysisEngine port
mod gemini_engine;
mod lexicon_engine;

pub use gemini_engine::GeminiEngine;
pub use lexicon_engine::LexiconEngine;
