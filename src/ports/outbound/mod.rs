/// Outbound ports (driven ports) - infrastructure interfaces
///
/// The use cases talk to the tracker, the filesystem, the spreadsheet
/// library and the console only through these traits.
pub mod attachment_store;
pub mod csv_reader;
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_formatter;
pub mod summary_writer;
pub mod ticket_repository;

pub use attachment_store::{AttachmentStore, StoreOutcome};
pub use csv_reader::CsvReader;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
pub use summary_writer::{GroupSummaryData, SummaryWriter, WrittenSummary};
pub use ticket_repository::{TicketRepository, TrackerError};
