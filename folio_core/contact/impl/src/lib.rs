use std::sync::{Arc, Mutex, PoisonError};

use folio_core_contact_contracts::{
    commands::append::ContactAppendCommandService, ContactFeatureService, ContactSubmitError,
};
use folio_models::i18n::{Language, UiText};
use folio_store_contracts::StoreService;
use folio_surface_contracts::SurfaceService;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

pub mod commands;

mod validate;

#[derive(Debug, Clone)]
pub struct ContactFeatureServiceImpl<Store, Surface, ContactAppend> {
    store: Store,
    surface: Surface,
    contact_append: ContactAppend,
    config: ContactFeatureConfig,
    state: Arc<State>,
}

#[derive(Debug, Clone)]
pub struct ContactFeatureConfig {
    /// How long the confirmation panel stays up before the form is restored.
    pub auto_reset_delay: std::time::Duration,
}

/// Handle of the last scheduled auto-reset. The flow owns it but never aborts
/// it; a task outliving its purpose only touches surface state that is reset
/// anyway.
#[derive(Debug, Default)]
struct State {
    reset_task: Mutex<Option<JoinHandle<()>>>,
}

impl<Store, Surface, ContactAppend> ContactFeatureServiceImpl<Store, Surface, ContactAppend> {
    pub fn new(
        store: Store,
        surface: Surface,
        contact_append: ContactAppend,
        config: ContactFeatureConfig,
    ) -> Self {
        Self {
            store,
            surface,
            contact_append,
            config,
            state: Arc::default(),
        }
    }
}

impl<Store, Surface, ContactAppend> ContactFeatureService
    for ContactFeatureServiceImpl<Store, Surface, ContactAppend>
where
    Store: StoreService,
    Surface: SurfaceService + Clone,
    ContactAppend: ContactAppendCommandService,
{
    #[tracing::instrument(skip(self))]
    async fn submit(&self, language: Language) {
        if !self.store.is_ready() {
            warn!("Rejecting submission, the message store is not ready");
            self.surface
                .alert(alert_text(&ContactSubmitError::StoreNotReady).localized(language));
            return;
        }

        let form = match validate::checked_form(self.surface.form_fields()) {
            Ok(form) => form,
            Err(rejection) => {
                debug!("Rejecting submission: {rejection}");
                self.surface.alert(alert_text(&rejection).localized(language));
                return;
            }
        };

        let original_label = self.surface.trigger_label();
        self.surface.set_trigger_enabled(false);
        self.surface.set_trigger_busy(true);
        self.surface
            .set_trigger_label(UiText::Sending.localized(language));

        match self.contact_append.invoke(form, language).await {
            Ok(key) => {
                info!(%key, "Contact message stored");
                self.surface.set_form_visible(false);
                self.surface.set_confirmation_visible(true);
                self.schedule_reset(original_label);
            }
            Err(err) => {
                error!("Failed to store contact message: {err}");
                self.surface.set_trigger_enabled(true);
                self.surface.set_trigger_busy(false);
                // The original label is deliberately not restored here; a
                // failed attempt falls back to the stock send label.
                self.surface
                    .set_trigger_label(UiText::SendMessage.localized(language));
                self.surface.alert(alert_text(&err).localized(language));
            }
        }
    }
}

impl<Store, Surface, ContactAppend> ContactFeatureServiceImpl<Store, Surface, ContactAppend>
where
    Surface: SurfaceService + Clone,
{
    /// Dismisses the confirmation and restores the form after the configured
    /// delay, fire-and-forget.
    fn schedule_reset(&self, original_label: String) {
        let surface = self.surface.clone();
        let delay = self.config.auto_reset_delay;

        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            surface.reset_form();
            surface.set_form_visible(true);
            surface.set_confirmation_visible(false);
            surface.set_trigger_enabled(true);
            surface.set_trigger_busy(false);
            surface.set_trigger_label(&original_label);
        });

        *self
            .state
            .reset_task
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(task);
    }
}

fn alert_text(error: &ContactSubmitError) -> UiText {
    match error {
        ContactSubmitError::StoreNotReady => UiText::SubmitUnavailable,
        ContactSubmitError::EmptyField => UiText::FillAllFields,
        ContactSubmitError::InvalidEmail => UiText::InvalidEmail,
        ContactSubmitError::Append(_) => UiText::SubmitFailed,
    }
}
