use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use nutype::nutype;
use regex::Regex;

use crate::i18n::Language;

/// A contact message as handed to the store: built fresh per submission
/// attempt and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub author: ContactAuthor,
    pub subject: ContactSubject,
    pub content: ContactContent,
    pub language: Language,
    pub submitted_at: DateTime<Utc>,
    /// Opaque user-agent string of the submitting client, diagnostics only.
    pub client_context: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactAuthor {
    pub name: ContactAuthorName,
    pub email: ContactEmail,
}

#[nutype(
    sanitize(trim),
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactAuthorName(String);

#[nutype(
    sanitize(trim),
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactSubject(String);

#[nutype(
    sanitize(trim),
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactContent(String);

#[nutype(
    sanitize(trim),
    validate(regex = CONTACT_EMAIL_REGEX),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactEmail(String);

/// `local-part@domain.tld`, no whitespace anywhere.
pub static CONTACT_EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Key assigned by the store when a message is appended. Never chosen locally.
#[nutype(derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Deref,
    From,
    Display,
    Serialize,
    Deserialize
))]
pub struct MessageKey(String);

/// The four raw text fields exactly as read from the surface, untrusted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactFormDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// A draft that passed validation; everything except the submission context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    pub author: ContactAuthor,
    pub subject: ContactSubject,
    pub content: ContactContent,
}
