use crate::config::Credentials;
use crate::ports::outbound::{TicketRepository, TrackerError};
use crate::summary_generation::domain::{Attachment, Ticket, TicketKey};
use reqwest::blocking::{Client, Response};
use reqwest::header::ACCEPT;
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Deserialize)]
struct JiraIssue {
    key: String,
    fields: JiraFields,
}

#[derive(Debug, Deserialize)]
struct JiraFields {
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    attachment: Option<Vec<JiraAttachment>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JiraAttachment {
    id: String,
    filename: String,
    #[serde(default)]
    size: u64,
    #[serde(default)]
    mime_type: Option<String>,
    content: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JiraUser {
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    email_address: Option<String>,
}

impl From<JiraAttachment> for Attachment {
    fn from(a: JiraAttachment) -> Self {
        Attachment {
            id: a.id,
            filename: a.filename,
            size: a.size,
            mime_type: a.mime_type,
            content_url: a.content,
        }
    }
}

/// JiraTicketRepository adapter for the Jira REST API (v2)
///
/// Every request uses HTTP basic auth with the account email and API token.
/// Attachment downloads are only sent to the configured server, so the
/// credentials never leave it.
pub struct JiraTicketRepository {
    client: Client,
    base_url: Url,
    email: String,
    api_key: String,
}

impl JiraTicketRepository {
    pub fn new(credentials: &Credentials) -> crate::shared::Result<Self> {
        let base_url = Url::parse(&format!("{}/", credentials.server_url.trim_end_matches('/')))
            .map_err(|e| {
                anyhow::anyhow!(
                    "Invalid JIRA_SERVER_URL '{}': {}",
                    credentials.server_url,
                    e
                )
            })?;

        if !matches!(base_url.scheme(), "http" | "https") {
            anyhow::bail!(
                "Invalid JIRA_SERVER_URL '{}': only http and https are supported",
                credentials.server_url
            );
        }

        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("jira-csv-summary/{}", version);
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url,
            email: credentials.email.clone(),
            api_key: credentials.api_key.clone(),
        })
    }

    pub fn server(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    fn issue_url(&self, key: &TicketKey) -> Result<Url, TrackerError> {
        let path = format!(
            "rest/api/2/issue/{}?fields=summary,attachment",
            urlencoding::encode(key.as_str())
        );
        self.base_url
            .join(&path)
            .map_err(|e| TrackerError::InvalidResponse {
                resource: key.to_string(),
                details: e.to_string(),
            })
    }

    /// Attachment URLs come from the server; refuse to send credentials anywhere else
    fn validate_content_url(&self, attachment: &Attachment) -> Result<Url, TrackerError> {
        let url = Url::parse(&attachment.content_url).map_err(|e| TrackerError::InvalidResponse {
            resource: attachment.filename.clone(),
            details: format!("invalid attachment URL: {}", e),
        })?;

        let same_origin = url.scheme() == self.base_url.scheme()
            && url.host_str() == self.base_url.host_str()
            && url.port_or_known_default() == self.base_url.port_or_known_default();

        if !same_origin {
            return Err(TrackerError::InvalidResponse {
                resource: attachment.filename.clone(),
                details: format!(
                    "attachment URL {} is not on the configured Jira server",
                    url
                ),
            });
        }

        Ok(url)
    }

    fn get(&self, url: Url, resource: &str) -> Result<Response, TrackerError> {
        self.client
            .get(url)
            .basic_auth(&self.email, Some(&self.api_key))
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|e| TrackerError::Transport {
                resource: resource.to_string(),
                details: e.to_string(),
            })
    }

    fn check_status(response: Response, resource: &str) -> Result<Response, TrackerError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        Err(match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => TrackerError::Unauthorized {
                resource: resource.to_string(),
                status: status.as_u16(),
            },
            _ => TrackerError::Status {
                resource: resource.to_string(),
                status: status.as_u16(),
            },
        })
    }

    fn decode<T: DeserializeOwned>(response: Response, resource: &str) -> Result<T, TrackerError> {
        response.json::<T>().map_err(|e| TrackerError::InvalidResponse {
            resource: resource.to_string(),
            details: e.to_string(),
        })
    }
}

impl TicketRepository for JiraTicketRepository {
    fn verify_credentials(&self) -> Result<String, TrackerError> {
        let resource = "current user";
        let url = self
            .base_url
            .join("rest/api/2/myself")
            .map_err(|e| TrackerError::InvalidResponse {
                resource: resource.to_string(),
                details: e.to_string(),
            })?;

        let response = Self::check_status(self.get(url, resource)?, resource)?;
        let user: JiraUser = Self::decode(response, resource)?;

        Ok(user
            .display_name
            .or(user.email_address)
            .unwrap_or_else(|| self.email.clone()))
    }

    fn fetch_ticket(&self, key: &TicketKey) -> Result<Ticket, TrackerError> {
        let resource = key.as_str();
        let response = self.get(self.issue_url(key)?, resource)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(TrackerError::NotFound(key.to_string()));
        }

        let response = Self::check_status(response, resource)?;
        let issue: JiraIssue = Self::decode(response, resource)?;
        Ok(issue_to_ticket(key, issue))
    }

    fn download_attachment(&self, attachment: &Attachment) -> Result<Vec<u8>, TrackerError> {
        let resource = attachment.filename.as_str();
        let url = self.validate_content_url(attachment)?;

        let response = self
            .client
            .get(url)
            .basic_auth(&self.email, Some(&self.api_key))
            .send()
            .map_err(|e| TrackerError::Transport {
                resource: resource.to_string(),
                details: e.to_string(),
            })?;

        let response = Self::check_status(response, resource)?;
        let bytes = response.bytes().map_err(|e| TrackerError::Transport {
            resource: resource.to_string(),
            details: e.to_string(),
        })?;

        Ok(bytes.to_vec())
    }
}

fn issue_to_ticket(requested: &TicketKey, issue: JiraIssue) -> Ticket {
    // Jira answers moved issues with their new key.
    let key = TicketKey::new(&issue.key).unwrap_or_else(|_| requested.clone());

    Ticket {
        key,
        summary: issue.fields.summary.unwrap_or_default(),
        attachments: issue
            .fields
            .attachment
            .unwrap_or_default()
            .into_iter()
            .map(Attachment::from)
            .collect(),
    }
}
