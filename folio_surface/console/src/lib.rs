use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use folio_models::{
    contact::ContactFormDraft,
    i18n::{Language, UiText},
};
use folio_surface_contracts::SurfaceService;
use tokio::sync::Notify;

/// Terminal rendition of the contact page: holds the field values and the
/// trigger/panel state, and prints the transitions a visitor would see.
#[derive(Debug, Clone)]
pub struct ConsoleSurface {
    language: Language,
    state: Arc<Mutex<SurfaceState>>,
    idle: Arc<Notify>,
}

#[derive(Debug)]
struct SurfaceState {
    fields: ContactFormDraft,
    trigger_enabled: bool,
    trigger_busy: bool,
    trigger_label: String,
    form_visible: bool,
    confirmation_visible: bool,
}

impl ConsoleSurface {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            state: Arc::new(Mutex::new(SurfaceState {
                fields: ContactFormDraft::default(),
                trigger_enabled: true,
                trigger_busy: false,
                trigger_label: UiText::SendMessage.localized(language).to_owned(),
                form_visible: true,
                confirmation_visible: false,
            })),
            idle: Arc::new(Notify::new()),
        }
    }

    /// Fills the four inputs, as if the visitor had typed them.
    pub fn set_fields(&self, fields: ContactFormDraft) {
        self.state().fields = fields;
    }

    pub fn form_visible(&self) -> bool {
        self.state().form_visible
    }

    pub fn confirmation_visible(&self) -> bool {
        self.state().confirmation_visible
    }

    pub fn trigger_enabled(&self) -> bool {
        self.state().trigger_enabled
    }

    pub fn trigger_busy(&self) -> bool {
        self.state().trigger_busy
    }

    /// Resolves once the form is visible again; immediately if it already is.
    pub async fn wait_until_idle(&self) {
        while !self.form_visible() {
            self.idle.notified().await;
        }
    }

    fn state(&self) -> MutexGuard<'_, SurfaceState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SurfaceService for ConsoleSurface {
    fn form_fields(&self) -> ContactFormDraft {
        self.state().fields.clone()
    }

    fn trigger_label(&self) -> String {
        self.state().trigger_label.clone()
    }

    fn set_trigger_enabled(&self, enabled: bool) {
        self.state().trigger_enabled = enabled;
    }

    fn set_trigger_busy(&self, busy: bool) {
        self.state().trigger_busy = busy;
    }

    fn set_trigger_label(&self, label: &str) {
        let mut state = self.state();
        state.trigger_label = label.to_owned();
        // Only the busy label is printed; restores stay silent.
        if state.trigger_busy {
            drop(state);
            println!("{label}");
        }
    }

    fn set_form_visible(&self, visible: bool) {
        self.state().form_visible = visible;
        if visible {
            self.idle.notify_one();
        }
    }

    fn set_confirmation_visible(&self, visible: bool) {
        self.state().confirmation_visible = visible;
        if visible {
            println!("{}", UiText::MessageSent.localized(self.language));
        }
    }

    fn reset_form(&self) {
        self.state().fields = ContactFormDraft::default();
    }

    fn alert(&self, message: &str) {
        println!("! {message}");
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn starts_idle_with_send_label() {
        let surface = ConsoleSurface::new(Language::Pl);

        assert!(surface.form_visible());
        assert!(!surface.confirmation_visible());
        assert!(surface.trigger_enabled());
        assert!(!surface.trigger_busy());
        assert_eq!(surface.trigger_label(), "Wyślij Wiadomość");
    }

    #[test]
    fn fields_round_trip_and_reset() {
        let surface = ConsoleSurface::new(Language::En);
        let fields = ContactFormDraft {
            name: "Ann".into(),
            email: "ann@x.com".into(),
            subject: "Hi".into(),
            message: "Hello".into(),
        };

        surface.set_fields(fields.clone());
        assert_eq!(surface.form_fields(), fields);

        surface.reset_form();
        assert_eq!(surface.form_fields(), ContactFormDraft::default());
    }

    #[tokio::test]
    async fn wait_until_idle_returns_immediately_when_form_visible() {
        let surface = ConsoleSurface::new(Language::En);

        surface.wait_until_idle().await;
    }

    #[tokio::test]
    async fn wait_until_idle_resolves_once_form_restored() {
        let surface = ConsoleSurface::new(Language::En);
        surface.set_form_visible(false);

        let waiter = tokio::spawn({
            let surface = surface.clone();
            async move { surface.wait_until_idle().await }
        });

        tokio::task::yield_now().await;
        assert!(!waiter.is_finished());

        surface.set_form_visible(true);
        waiter.await.unwrap();
    }
}
