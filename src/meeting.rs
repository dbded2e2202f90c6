//! Meeting identity: which kind of session (meeting or webinar) and its ID,
//! plus the intermediate file names derived from them.
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MeetingTypeError {
    #[error("unknown meeting type '{0}' (expected 'meeting' or 'webinar')")]
    Unknown(String),
}

/// Kind of session whose participants are fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeetingType {
    Meeting,
    Webinar,
}

impl MeetingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MeetingType::Meeting => "meeting",
            MeetingType::Webinar => "webinar",
        }
    }

    /// Collection segment used by the metrics API (`meetings` / `webinars`).
    pub fn api_segment(&self) -> &'static str {
        match self {
            MeetingType::Meeting => "meetings",
            MeetingType::Webinar => "webinars",
        }
    }
}

impl fmt::Display for MeetingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MeetingType {
    type Err = MeetingTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "meeting" => Ok(MeetingType::Meeting),
            "webinar" => Ok(MeetingType::Webinar),
            other => Err(MeetingTypeError::Unknown(other.to_string())),
        }
    }
}

/// A single meeting or webinar occurrence series, addressed by type and ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meeting {
    pub meeting_type: MeetingType,
    pub id: String,
}

impl Meeting {
    pub fn new(meeting_type: MeetingType, id: impl Into<String>) -> Self {
        Self {
            meeting_type,
            id: id.into(),
        }
    }

    /// `fetched_participants_{type}_{id}.json`
    pub fn raw_file_name(&self) -> String {
        format!("fetched_participants_{}_{}.json", self.meeting_type, self.id)
    }

    /// `extracted_participants_{type}_{id}.tsv`
    pub fn tsv_file_name(&self) -> String {
        format!("extracted_participants_{}_{}.tsv", self.meeting_type, self.id)
    }

    pub fn raw_path(&self, dir: &Path) -> PathBuf {
        dir.join(self.raw_file_name())
    }

    pub fn tsv_path(&self, dir: &Path) -> PathBuf {
        dir.join(self.tsv_file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_types_only() {
        assert_eq!("meeting".parse::<MeetingType>(), Ok(MeetingType::Meeting));
        assert_eq!("webinar".parse::<MeetingType>(), Ok(MeetingType::Webinar));
        assert_eq!(
            "webcast".parse::<MeetingType>(),
            Err(MeetingTypeError::Unknown("webcast".to_string()))
        );
        assert!("Meeting".parse::<MeetingType>().is_err());
    }

    #[test]
    fn file_names_follow_type_and_id() {
        let m = Meeting::new(MeetingType::Webinar, "81234567890");
        assert_eq!(
            m.raw_file_name(),
            "fetched_participants_webinar_81234567890.json"
        );
        assert_eq!(
            m.tsv_file_name(),
            "extracted_participants_webinar_81234567890.tsv"
        );
        assert_eq!(
            m.tsv_path(Path::new("out")),
            Path::new("out").join("extracted_participants_webinar_81234567890.tsv")
        );
    }
}
