/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod analyze_request;
mod dashboard;
mod listings;
mod output_format;
mod report;

pub use analyze_request::AnalyzeProductRequest;
pub use dashboard::{DashboardAnalytics, RecentActivity};
pub use listings::{ProductListing, ReviewListing};
pub use output_format::OutputFormat;
pub use report::AnalysisReport;
