//! trust-lens - Product trust scoring from marketplace reviews
//!
//! This library gathers reviews for a product from several marketplaces,
//! scores them with an analysis engine and serves the resulting trust
//! scores over a REST API, following hexagonal architecture principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`trust_scoring`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use trust_lens::prelude::*;
//! use std::sync::Arc;
//!
//! # async fn demo() -> Result<()> {
//! // Create adapters
//! let store = SqliteStore::in_memory().await?;
//! let sources = sample_sources();
//! let engine = Arc::new(LexiconEngine::new());
//! let progress = Arc::new(TracingProgressReporter::new());
//!
//! // Create use case with injected dependencies
//! let use_case = AnalyzeProductUseCase::new(sources, engine, Arc::new(store), progress);
//!
//! // Execute
//! let request = AnalyzeProductRequest::default();
//! let report = use_case.analyze(request).await?;
//! println!("{}", report.product.name);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod shared;
pub mod trust_scoring;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::inbound::rest::{self, AppState};
    pub use crate::adapters::outbound::console::{StderrProgressReporter, TracingProgressReporter};
    pub use crate::adapters::outbound::engine::{GeminiEngine, LexiconEngine};
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::marketplaces::{sample_sources, CachingReviewSource};
    pub use crate::adapters::outbound::persistence::SqliteStore;
    pub use crate::application::dto::{
        AnalysisReport, AnalyzeProductRequest, DashboardAnalytics, ProductListing,
    };
    pub use crate::application::factories::{EngineFactory, FormatterFactory, PresenterFactory};
    pub use crate::application::use_cases::{
        AnalyzeProductUseCase, DashboardAnalyticsUseCase, ProductQueriesUseCase,
    };
    pub use crate::config::{EngineConfig, EngineProvider, ServiceConfig};
    pub use crate::ports::inbound::{DashboardPort, ProductAnalysisPort, ProductQueryPort};
    pub use crate::ports::outbound::{
        AnalysisEngine, AnalyticsRepository, OutputPresenter, ProductRepository, ProgressReporter,
        ReportFormatter, ReviewRepository, ReviewSource,
    };
    pub use crate::shared::Result;
    pub use crate::trust_scoring::domain::{Platform, Product, Review, TrustScore};
    pub use crate::trust_scoring::services::TrustCalculator;
}
