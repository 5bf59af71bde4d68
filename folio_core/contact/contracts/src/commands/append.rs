use std::future::Future;

use folio_models::{
    contact::{ContactForm, MessageKey},
    i18n::Language,
};

use crate::ContactSubmitError;

/// Builds the message from a validated form and performs the single store
/// append, returning the store-assigned key.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactAppendCommandService: Send + Sync + 'static {
    fn invoke(
        &self,
        form: ContactForm,
        language: Language,
    ) -> impl Future<Output = Result<MessageKey, ContactSubmitError>> + Send;
}

#[cfg(feature = "mock")]
impl MockContactAppendCommandService {
    pub fn with_invoke(
        mut self,
        form: ContactForm,
        language: Language,
        result: Result<MessageKey, ContactSubmitError>,
    ) -> Self {
        self.expect_invoke()
            .once()
            .with(
                mockall::predicate::eq(form),
                mockall::predicate::eq(language),
            )
            .return_once(move |_, _| Box::pin(std::future::ready(result)));
        self
    }
}
