/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (marketplaces, analysis engines,
/// storage, console, etc.).
pub mod analysis_engine;
pub mod analytics_repository;
pub mod output_presenter;
pub mod product_repository;
pub mod progress_reporter;
pub mod report_formatter;
pub mod review_repository;
pub mod review_source;

pub use analysis_engine::AnalysisEngine;
pub use analytics_repository::{AnalyticsRepository, DashboardSnapshot, PlatformCount};
pub use output_presenter::OutputPresenter;
pub use product_repository::ProductRepository;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
pub use review_repository::ReviewRepository;
pub use review_source::{ReviewSource, ReviewSubject};
