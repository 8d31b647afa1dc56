/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports: the Jira REST client,
/// filesystem storage, the xlsx template writer and console output.
pub mod outbound;
