use std::future::Future;

use folio_models::contact::{ContactMessage, MessageKey};

/// Append-capable remote document store holding the contact messages.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait StoreService: Send + Sync + 'static {
    /// Whether the store finished initializing and accepts appends.
    fn is_ready(&self) -> bool;

    /// Appends `message` to the named collection. The store assigns the key;
    /// it is never chosen by the caller.
    fn append(
        &self,
        collection: &str,
        message: &ContactMessage,
    ) -> impl Future<Output = anyhow::Result<MessageKey>> + Send;

    /// Connectivity probe against the store root.
    fn ping(&self) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[cfg(feature = "mock")]
impl MockStoreService {
    pub fn with_is_ready(mut self, ready: bool) -> Self {
        self.expect_is_ready().once().return_const(ready);
        self
    }

    pub fn with_append(
        mut self,
        collection: String,
        message: ContactMessage,
        result: anyhow::Result<MessageKey>,
    ) -> Self {
        self.expect_append()
            .once()
            .with(
                mockall::predicate::eq(collection),
                mockall::predicate::eq(message),
            )
            .return_once(move |_, _| Box::pin(std::future::ready(result)));
        self
    }
}
