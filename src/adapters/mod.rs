/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the ports: the REST
/// API that drives the application and the marketplace, engine, storage
/// and console integrations it drives in turn.
pub mod inbound;
pub mod outbound;
