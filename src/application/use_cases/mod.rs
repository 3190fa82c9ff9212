/// Use cases module containing application business logic orchestration
mod analyze_product;
mod dashboard_analytics;
mod product_queries;

pub use analyze_product::AnalyzeProductUseCase;
pub use dashboard_analytics::DashboardAnalyticsUseCase;
pub use product_queries::ProductQueriesUseCase;
