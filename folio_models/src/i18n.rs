use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// UI language selected at submit time. The site ships Polish first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Pl,
    En,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Language::Pl => "pl",
            Language::En => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pl" => Ok(Language::Pl),
            "en" => Ok(Language::En),
            other => Err(ParseLanguageError(other.into())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLanguageError(String);

impl fmt::Display for ParseLanguageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown language `{}`, expected `pl` or `en`", self.0)
    }
}

impl std::error::Error for ParseLanguageError {}

/// Catalog of user-facing strings. Every entry exists in both languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiText {
    /// Generic alert when the store is not ready to take submissions.
    SubmitUnavailable,
    /// Alert when at least one required field is blank.
    FillAllFields,
    /// Alert when the email address does not look like an address.
    InvalidEmail,
    /// Alert when the store rejected the append.
    SubmitFailed,
    /// Trigger label while the append is in flight.
    Sending,
    /// Fallback trigger label after a failed submission.
    SendMessage,
    /// Confirmation panel content after a successful submission.
    MessageSent,
    PromptName,
    PromptEmail,
    PromptSubject,
    PromptMessage,
}

impl UiText {
    pub const fn localized(self, language: Language) -> &'static str {
        use Language::{En, Pl};

        match (self, language) {
            (UiText::SubmitUnavailable, Pl) => "Wystąpił błąd. Spróbuj ponownie.",
            (UiText::SubmitUnavailable, En) => "An error occurred. Please try again.",
            (UiText::FillAllFields, Pl) => "Proszę wypełnić wszystkie pola.",
            (UiText::FillAllFields, En) => "Please fill in all fields.",
            (UiText::InvalidEmail, Pl) => "Proszę podać prawidłowy adres e-mail.",
            (UiText::InvalidEmail, En) => "Please enter a valid email address.",
            (UiText::SubmitFailed, Pl) => {
                "Wystąpił błąd podczas wysyłania wiadomości. Spróbuj ponownie."
            }
            (UiText::SubmitFailed, En) => {
                "An error occurred while sending the message. Please try again."
            }
            (UiText::Sending, Pl) => "Wysyłanie...",
            (UiText::Sending, En) => "Sending...",
            (UiText::SendMessage, Pl) => "Wyślij Wiadomość",
            (UiText::SendMessage, En) => "Send Message",
            (UiText::MessageSent, Pl) => "Dziękuję za wiadomość! Odezwę się wkrótce.",
            (UiText::MessageSent, En) => "Thank you for your message! I will get back to you soon.",
            (UiText::PromptName, Pl) => "Imię",
            (UiText::PromptName, En) => "Name",
            (UiText::PromptEmail, Pl) => "Adres e-mail",
            (UiText::PromptEmail, En) => "Email address",
            (UiText::PromptSubject, Pl) => "Temat",
            (UiText::PromptSubject, En) => "Subject",
            (UiText::PromptMessage, Pl) => "Wiadomość",
            (UiText::PromptMessage, En) => "Message",
        }
    }
}
