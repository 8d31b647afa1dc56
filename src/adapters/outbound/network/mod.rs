/// Network adapters for the issue tracker API
mod jira_client;

pub use jira_client::JiraTicketRepository;
