//! Roster: the first-seen-wins mapping from email to display name, and the
//! extractor that builds it from persisted raw pages.
//!
//! Typical usage:
//!
//! ```no_run
//! use roster::roster::extract_file;
//! # fn main() -> anyhow::Result<()> {
//! let roster = extract_file("fetched_participants_meeting_123.json")?;
//! for entry in roster.entries() {
//!     println!("{}", entry.label());
//! }
//! # Ok(())
//! # }
//! ```
use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};

use crate::io::{LineIter, iter_json_lines};
use crate::page::RawPage;
use crate::participant::{Participant, display_label, redact_email};

/// A participant that survived dedup and the presence checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub name: String,
    pub email: String,
}

impl RosterEntry {
    pub fn signature(&self) -> String {
        redact_email(&self.email)
    }

    /// `name (signature)`
    pub fn label(&self) -> String {
        display_label(&self.name, &self.email)
    }
}

/// Insertion-ordered email -> name mapping.
#[derive(Debug, Default)]
pub struct Roster {
    entries: Vec<RosterEntry>,
    seen: HashSet<String>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer one raw participant. Returns true if it was added.
    ///
    /// Checks run in a fixed order: email present, email unseen, name present.
    /// A repeat email is therefore rejected before its name is looked at.
    pub fn offer(&mut self, p: &Participant) -> bool {
        let Some(email) = p.email() else {
            return false;
        };
        if self.seen.contains(email) {
            return false;
        }
        let Some(name) = p.name() else {
            return false;
        };
        self.seen.insert(email.to_string());
        self.entries.push(RosterEntry {
            name: name.to_string(),
            email: email.to_string(),
        });
        true
    }

    /// Offer every participant of a page in API order.
    pub fn add_page(&mut self, page: &RawPage) -> Result<()> {
        for p in page.participants()? {
            self.offer(&p);
        }
        Ok(())
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, email: &str) -> bool {
        self.seen.contains(email)
    }
}

/// Build a roster from JSON lines, one raw page per line. Blank lines are
/// skipped; any other line that fails to parse is an error naming its line
/// number.
pub fn extract_lines(lines: LineIter) -> Result<Roster> {
    let mut roster = Roster::new();
    for (idx, line) in lines.enumerate() {
        let lineno = idx + 1;
        let line = line.with_context(|| format!("read line {}", lineno))?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let page = RawPage::parse(trimmed).with_context(|| format!("line {}", lineno))?;
        roster
            .add_page(&page)
            .with_context(|| format!("line {}", lineno))?;
    }
    Ok(roster)
}

/// Build a roster from the raw-page file written by the pagination driver.
pub fn extract_file<P: AsRef<Path>>(path: P) -> Result<Roster> {
    let path = path.as_ref();
    let lines = iter_json_lines(path)?;
    extract_lines(lines).with_context(|| format!("extract {}", path.display()))
}
