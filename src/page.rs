//! Raw API pages.
//!
//! A `RawPage` wraps the JSON object returned by the participants endpoint
//! verbatim. Only the two keys the pipeline depends on are inspected:
//! `participants` and `next_page_token`.
use serde_json::{Map, Value};

use crate::participant::Participant;

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("response is not a JSON object")]
    NotAnObject,
    #[error("response has no 'participants' list")]
    MissingParticipants,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawPage(Map<String, Value>);

impl RawPage {
    pub fn from_value(value: Value) -> Result<Self, PageError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            _ => Err(PageError::NotAnObject),
        }
    }

    pub fn parse(text: &str) -> Result<Self, PageError> {
        Self::from_value(serde_json::from_str(text)?)
    }

    /// Continuation token; `None` when absent, null, or empty.
    pub fn next_page_token(&self) -> Option<&str> {
        self.0
            .get("next_page_token")
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())
    }

    /// Participant entries in API order. Entries that are not objects are
    /// yielded as empty participants so they drop out at extraction.
    pub fn participants(&self) -> Result<Vec<Participant>, PageError> {
        let list = self
            .0
            .get("participants")
            .and_then(Value::as_array)
            .ok_or(PageError::MissingParticipants)?;
        Ok(list.iter().map(Participant::from_entry).collect())
    }

    /// Single-line JSON rendering for the JSON-lines raw file.
    pub fn to_line(&self) -> String {
        Value::Object(self.0.clone()).to_string()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}
