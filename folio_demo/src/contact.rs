use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use folio_models::{
    contact::{
        ContactAuthor, ContactForm, ContactFormDraft, ContactMessage, MessageKey,
    },
    i18n::Language,
};

pub static SUBMITTED_AT_1: LazyLock<DateTime<Utc>> =
    LazyLock::new(|| "2026-08-06T09:41:27.513Z".parse().unwrap());

pub const CLIENT_CONTEXT_1: &str = "Folio Contact Backend (Version 0.0.0)";

pub static DRAFT_1: LazyLock<ContactFormDraft> = LazyLock::new(|| ContactFormDraft {
    name: "Ann".into(),
    email: "ann@x.com".into(),
    subject: "Hi".into(),
    message: "Hello".into(),
});

pub static FORM_1: LazyLock<ContactForm> = LazyLock::new(|| ContactForm {
    author: ContactAuthor {
        name: "Ann".try_into().unwrap(),
        email: "ann@x.com".try_into().unwrap(),
    },
    subject: "Hi".try_into().unwrap(),
    content: "Hello".try_into().unwrap(),
});

pub static MESSAGE_1: LazyLock<ContactMessage> = LazyLock::new(|| ContactMessage {
    author: FORM_1.author.clone(),
    subject: FORM_1.subject.clone(),
    content: FORM_1.content.clone(),
    language: Language::En,
    submitted_at: *SUBMITTED_AT_1,
    client_context: CLIENT_CONTEXT_1.into(),
});

pub static KEY_1: LazyLock<MessageKey> =
    LazyLock::new(|| MessageKey::from("-OXQ3pZk7vR2sT9uWxYa".to_owned()));
