/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define the interfaces that external adapters (REST API, CLI)
/// use to interact with the application core.
pub mod dashboard_port;
pub mod product_analysis_port;
pub mod product_query_port;

pub use dashboard_port::DashboardPort;
pub use product_analysis_port::ProductAnalysisPort;
pub use product_query_port::ProductQueryPort;
