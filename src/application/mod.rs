/// Application layer - Use cases and DTOs
///
/// This layer orchestrates the domain services and reaches the tracker,
/// the filesystem and the spreadsheet library only through ports.
pub mod dto;
pub mod use_cases;
