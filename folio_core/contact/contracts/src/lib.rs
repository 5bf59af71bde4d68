use std::future::Future;

use folio_models::i18n::Language;
use thiserror::Error;

pub mod commands;

/// The contact submission flow: one call runs a whole submission attempt.
///
/// All outcomes are terminal at this layer. The flow reports them through the
/// presentation surface (and tracing) instead of returning them, so nothing
/// above it needs to know the error taxonomy.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFeatureService: Send + Sync + 'static {
    fn submit(&self, language: Language) -> impl Future<Output = ()> + Send;
}

#[derive(Debug, Error)]
pub enum ContactSubmitError {
    #[error("The message store is not ready.")]
    StoreNotReady,
    #[error("At least one required field is empty.")]
    EmptyField,
    #[error("The email address does not look like an address.")]
    InvalidEmail,
    #[error("Failed to append the message to the store.")]
    Append(#[source] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactFeatureService {
    pub fn with_submit(mut self, language: Language) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(language))
            .return_once(|_| Box::pin(std::future::ready(())));
        self
    }
}
