/// Data Transfer Objects for the application layer
mod fetch_request;
mod summarize_request;

pub use fetch_request::FetchRequest;
pub use summarize_request::SummarizeRequest;
