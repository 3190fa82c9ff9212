mod engine_factory;
mod formatter_factory;
mod presenter_factory;

pub use engine_factory::EngineFactory;
pub use formatter_factory::FormatterFactory;
pub use presenter_factory::{PresenterFactory, PresenterType};
