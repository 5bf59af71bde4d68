use std::sync::Arc;

use folio_models::contact::ContactFormDraft;

/// The presentation surface of the contact page: the four text inputs, the
/// submit trigger, the form panel, and the confirmation panel.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait SurfaceService: Send + Sync + 'static {
    /// Current values of the four text inputs, exactly as entered.
    fn form_fields(&self) -> ContactFormDraft;

    /// Current label of the submit trigger.
    fn trigger_label(&self) -> String;

    fn set_trigger_enabled(&self, enabled: bool);

    fn set_trigger_busy(&self, busy: bool);

    fn set_trigger_label(&self, label: &str);

    fn set_form_visible(&self, visible: bool);

    fn set_confirmation_visible(&self, visible: bool);

    /// Restores all four inputs to empty.
    fn reset_form(&self);

    /// Surfaces a message to the user immediately.
    fn alert(&self, message: &str);
}

/// The flow hands its surface to the scheduled auto-reset task, so a shared
/// surface must itself be a surface.
impl<S: SurfaceService> SurfaceService for Arc<S> {
    fn form_fields(&self) -> ContactFormDraft {
        (**self).form_fields()
    }

    fn trigger_label(&self) -> String {
        (**self).trigger_label()
    }

    fn set_trigger_enabled(&self, enabled: bool) {
        (**self).set_trigger_enabled(enabled);
    }

    fn set_trigger_busy(&self, busy: bool) {
        (**self).set_trigger_busy(busy);
    }

    fn set_trigger_label(&self, label: &str) {
        (**self).set_trigger_label(label);
    }

    fn set_form_visible(&self, visible: bool) {
        (**self).set_form_visible(visible);
    }

    fn set_confirmation_visible(&self, visible: bool) {
        (**self).set_confirmation_visible(visible);
    }

    fn reset_form(&self) {
        (**self).reset_form();
    }

    fn alert(&self, message: &str) {
        (**self).alert(message);
    }
}

#[cfg(feature = "mock")]
impl MockSurfaceService {
    pub fn with_form_fields(mut self, fields: ContactFormDraft) -> Self {
        self.expect_form_fields()
            .once()
            .return_once(move || fields);
        self
    }

    pub fn with_trigger_label(mut self, label: String) -> Self {
        self.expect_trigger_label().once().return_const(label);
        self
    }

    pub fn with_set_trigger_enabled(mut self, enabled: bool) -> Self {
        self.expect_set_trigger_enabled()
            .once()
            .with(mockall::predicate::eq(enabled))
            .return_const(());
        self
    }

    pub fn with_set_trigger_busy(mut self, busy: bool) -> Self {
        self.expect_set_trigger_busy()
            .once()
            .with(mockall::predicate::eq(busy))
            .return_const(());
        self
    }

    pub fn with_set_trigger_label(mut self, label: String) -> Self {
        self.expect_set_trigger_label()
            .once()
            .with(mockall::predicate::eq(label))
            .return_const(());
        self
    }

    pub fn with_set_form_visible(mut self, visible: bool) -> Self {
        self.expect_set_form_visible()
            .once()
            .with(mockall::predicate::eq(visible))
            .return_const(());
        self
    }

    pub fn with_set_confirmation_visible(mut self, visible: bool) -> Self {
        self.expect_set_confirmation_visible()
            .once()
            .with(mockall::predicate::eq(visible))
            .return_const(());
        self
    }

    pub fn with_reset_form(mut self) -> Self {
        self.expect_reset_form().once().return_const(());
        self
    }

    pub fn with_alert(mut self, message: String) -> Self {
        self.expect_alert()
            .once()
            .with(mockall::predicate::eq(message))
            .return_const(());
        self
    }
}
