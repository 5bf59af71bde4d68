use std::sync::Arc;

use folio_core_contact_contracts::{
    commands::append::ContactAppendCommandService, ContactSubmitError,
};
use folio_models::{
    contact::{ContactForm, ContactMessage, MessageKey},
    i18n::Language,
};
use folio_shared_contracts::time::TimeService;
use folio_store_contracts::StoreService;

/// Collection the website has always appended contact messages to.
const MESSAGES_COLLECTION: &str = "messages";

#[derive(Debug, Clone)]
pub struct ContactAppendCommandServiceImpl<Time, Store> {
    time: Time,
    store: Store,
    config: ContactAppendCommandConfig,
}

#[derive(Debug, Clone)]
pub struct ContactAppendCommandConfig {
    /// Recorded on every message as the submitting client's user agent.
    pub client_context: Arc<str>,
}

impl<Time, Store> ContactAppendCommandServiceImpl<Time, Store> {
    pub fn new(time: Time, store: Store, config: ContactAppendCommandConfig) -> Self {
        Self {
            time,
            store,
            config,
        }
    }
}

impl<Time, Store> ContactAppendCommandService for ContactAppendCommandServiceImpl<Time, Store>
where
    Time: TimeService,
    Store: StoreService,
{
    #[tracing::instrument(skip(self, form))]
    async fn invoke(
        &self,
        form: ContactForm,
        language: Language,
    ) -> Result<MessageKey, ContactSubmitError> {
        let message = ContactMessage {
            author: form.author,
            subject: form.subject,
            content: form.content,
            language,
            submitted_at: self.time.now(),
            client_context: self.config.client_context.as_ref().to_owned(),
        };

        self.store
            .append(MESSAGES_COLLECTION, &message)
            .await
            .map_err(ContactSubmitError::Append)
    }
}
