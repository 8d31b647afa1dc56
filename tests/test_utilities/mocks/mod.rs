/// Mock implementations for testing
mod mock_attachment_store;
mod mock_progress_reporter;
mod mock_summary_writer;
mod mock_ticket_repository;

#[allow(unused_imports)]
pub use mock_attachment_store::MockAttachmentStore;
pub use mock_progress_reporter::MockProgressReporter;
#[allow(unused_imports)]
pub use mock_summary_writer::MockSummaryWriter;
#[allow(unused_imports)]
pub use mock_ticket_repository::MockTicketRepository;
