pub mod csv_group;
pub mod csv_table;
pub mod file_metadata;
pub mod reports;
pub mod ticket;

pub use csv_group::{CsvGroup, GroupingResult, UnparsedFile};
pub use csv_table::{column_letter, CsvTable};
pub use file_metadata::{FileMetadata, GroupKey, MetadataError, TestType};
pub use reports::{FetchReport, GroupOutcome, SummaryReport, TicketOutcome, UnparsedEntry};
pub use ticket::{Attachment, Ticket, TicketKey};
