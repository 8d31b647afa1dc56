/// Domain layer: tickets, grouping metadata, tables and run reports,
/// plus the pure services that operate on them.
pub mod domain;
pub mod services;
