//! Participant data model and the redacted email signature.
//!
//! A `Participant` is materialised from one entry of a page's `participants`
//! array. Either field may be missing; such entries never reach the roster.
use serde_json::Value;

/// Number of local-part characters kept in a redacted signature.
pub const SIGNATURE_PREFIX_CHARS: usize = 4;
/// Appended after the kept prefix.
pub const MASK_CHAR: char = '*';

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Participant {
    pub email: Option<String>,
    pub user_name: Option<String>,
}

impl Participant {
    pub fn new(email: &str, user_name: &str) -> Self {
        Self {
            email: Some(email.to_string()),
            user_name: Some(user_name.to_string()),
        }
    }

    /// Read `email` and `user_name` string fields from a raw entry. Non-string
    /// values count as absent.
    pub fn from_entry(entry: &Value) -> Self {
        let field = |key: &str| entry.get(key).and_then(Value::as_str).map(str::to_string);
        Self {
            email: field("email"),
            user_name: field("user_name"),
        }
    }

    /// Email if present and non-empty.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref().filter(|e| !e.is_empty())
    }

    /// Name if present and non-empty.
    pub fn name(&self) -> Option<&str> {
        self.user_name.as_deref().filter(|n| !n.is_empty())
    }
}

/// First four characters of the local part followed by `*`. Local parts
/// shorter than four characters are kept whole; an email without `@` is
/// treated as all local part.
pub fn redact_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or_default();
    let mut sig: String = local.chars().take(SIGNATURE_PREFIX_CHARS).collect();
    sig.push(MASK_CHAR);
    sig
}

/// `name (signature)` as shown on the console and in the TSV's third column.
pub fn display_label(name: &str, email: &str) -> String {
    format!("{} ({})", name, redact_email(email))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn redaction_keeps_first_four_of_local_part() {
        assert_eq!(redact_email("alexander@example.com"), "alex*");
        assert_eq!(redact_email("bob1@example.com"), "bob1*");
    }

    #[test]
    fn short_local_parts_are_not_padded() {
        assert_eq!(redact_email("a@b.com"), "a*");
        assert_eq!(redact_email("@b.com"), "*");
    }

    #[test]
    fn redaction_counts_chars_not_bytes() {
        assert_eq!(redact_email("jörgen@example.de"), "jörg*");
    }

    #[test]
    fn missing_at_uses_whole_string() {
        assert_eq!(redact_email("nobody"), "nobo*");
    }

    #[test]
    fn from_entry_treats_non_strings_and_empties_as_absent() {
        let p = Participant::from_entry(&json!({"email": "", "user_name": 7}));
        assert_eq!(p.email(), None);
        assert_eq!(p.name(), None);
        let p = Participant::from_entry(&json!({"email": "a@x.com", "user_name": "Alice", "id": "z"}));
        assert_eq!(p, Participant::new("a@x.com", "Alice"));
    }

    #[test]
    fn display_label_combines_name_and_signature() {
        assert_eq!(display_label("Alice", "alice@x.com"), "Alice (alic*)");
    }
}
