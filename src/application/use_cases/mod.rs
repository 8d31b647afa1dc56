/// Use cases module containing application business logic orchestration
mod fetch_attachments;
mod generate_summaries;

pub use fetch_attachments::FetchAttachmentsUseCase;
pub use generate_summaries::GenerateSummariesUseCase;
