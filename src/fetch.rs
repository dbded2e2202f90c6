//! Page fetcher: one authenticated GET per page against the metrics
//! participants endpoint.
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;

use crate::config::Config;
use crate::meeting::{Meeting, MeetingType};
use crate::page::{PageError, RawPage};
use crate::token::{TokenError, TokenIssuer};

/// Fixed page size requested from the API.
pub const PAGE_SIZE: u32 = 10;

// Unreserved characters per RFC 3986 stay as-is.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error(transparent)]
    Token(#[from] TokenError),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed response: {0}")]
    Malformed(#[from] PageError),
}

/// Source of raw participant pages.
pub trait PageFetcher {
    fn fetch_page(
        &mut self,
        meeting: &Meeting,
        continuation_token: Option<&str>,
    ) -> Result<RawPage, FetchError>;
}

/// Path and query for one page of the past-participants report.
pub fn participants_path(meeting: &Meeting, continuation_token: Option<&str>) -> String {
    let mut path = format!(
        "/v2/metrics/{}/{}/participants?page_size={}&type=past",
        meeting.meeting_type.api_segment(),
        utf8_percent_encode(&meeting.id, QUERY_VALUE),
        PAGE_SIZE
    );
    if meeting.meeting_type == MeetingType::Webinar {
        path.push_str("&include_fields=registrant_id");
    }
    if let Some(token) = continuation_token.filter(|t| !t.is_empty()) {
        path.push_str("&next_page_token=");
        path.extend(utf8_percent_encode(token, QUERY_VALUE));
    }
    path
}

/// Request URL as logged: the continuation token is left out.
fn log_target(base_url: &str, meeting: &Meeting) -> String {
    format!("{}{}", base_url, participants_path(meeting, None))
}

/// Fetches pages over HTTPS, minting a fresh bearer token per request.
pub struct HttpPageFetcher {
    client: Client,
    issuer: TokenIssuer,
    base_url: String,
}

impl HttpPageFetcher {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(concat!("roster-rs/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            issuer: TokenIssuer::new(config),
            base_url: config.base_url.clone(),
        })
    }

    pub fn with_token_issuer(mut self, issuer: TokenIssuer) -> Self {
        self.issuer = issuer;
        self
    }
}

impl PageFetcher for HttpPageFetcher {
    fn fetch_page(
        &mut self,
        meeting: &Meeting,
        continuation_token: Option<&str>,
    ) -> Result<RawPage, FetchError> {
        let url = format!(
            "{}{}",
            self.base_url,
            participants_path(meeting, continuation_token)
        );
        log::debug!("GET {}", log_target(&self.base_url, meeting));
        let token = self.issuer.issue()?;
        let resp = self
            .client
            .get(url)
            .bearer_auth(token)
            .header(CONTENT_TYPE, "application/json")
            .send()?;
        let status = resp.status();
        let body = resp.text()?;
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(RawPage::parse(&body)?)
    }
}
