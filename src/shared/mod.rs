/// Shared utilities used across layers: error types, the result alias,
/// and filesystem safety checks.
pub mod error;
pub mod result;
pub mod security;

pub use result::Result;
