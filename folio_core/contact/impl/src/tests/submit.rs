use std::{sync::Arc, time::Duration};

use anyhow::anyhow;
use folio_core_contact_contracts::{
    commands::append::MockContactAppendCommandService, ContactFeatureService, ContactSubmitError,
};
use folio_demo::contact::{DRAFT_1, FORM_1, KEY_1};
use folio_models::{
    contact::ContactFormDraft,
    i18n::{Language, UiText},
};
use folio_store_contracts::MockStoreService;
use folio_surface_contracts::MockSurfaceService;

use crate::{ContactFeatureConfig, ContactFeatureServiceImpl};

const AUTO_RESET_DELAY: Duration = Duration::from_secs(5);

fn sut(
    store: MockStoreService,
    surface: MockSurfaceService,
    contact_append: MockContactAppendCommandService,
) -> ContactFeatureServiceImpl<
    MockStoreService,
    Arc<MockSurfaceService>,
    MockContactAppendCommandService,
> {
    ContactFeatureServiceImpl::new(
        store,
        Arc::new(surface),
        contact_append,
        ContactFeatureConfig {
            auto_reset_delay: AUTO_RESET_DELAY,
        },
    )
}

#[tokio::test]
async fn store_not_ready() {
    for language in [Language::Pl, Language::En] {
        // Arrange
        let store = MockStoreService::new().with_is_ready(false);
        let surface = MockSurfaceService::new()
            .with_alert(UiText::SubmitUnavailable.localized(language).into());

        let sut = sut(store, surface, MockContactAppendCommandService::new());

        // Act
        sut.submit(language).await;

        // Assert: the mocks panic on any append or busy-state call; nothing
        // beyond the alert may happen.
    }
}

#[tokio::test]
async fn rejects_blank_fields() {
    for blank in ["", "   "] {
        for field in 0..4 {
            // Arrange
            let mut draft = DRAFT_1.clone();
            match field {
                0 => draft.name = blank.into(),
                1 => draft.email = blank.into(),
                2 => draft.subject = blank.into(),
                _ => draft.message = blank.into(),
            }

            let store = MockStoreService::new().with_is_ready(true);
            let surface = MockSurfaceService::new()
                .with_form_fields(draft)
                .with_alert(UiText::FillAllFields.localized(Language::Pl).into());

            let sut = sut(store, surface, MockContactAppendCommandService::new());

            // Act
            sut.submit(Language::Pl).await;
        }
    }
}

#[tokio::test]
async fn rejects_malformed_email() {
    for email in ["annx.com", "ann@xcom", "an n@x.com"] {
        // Arrange
        let draft = ContactFormDraft {
            email: email.into(),
            ..DRAFT_1.clone()
        };

        let store = MockStoreService::new().with_is_ready(true);
        let surface = MockSurfaceService::new()
            .with_form_fields(draft)
            .with_alert(UiText::InvalidEmail.localized(Language::En).into());

        let sut = sut(store, surface, MockContactAppendCommandService::new());

        // Act
        sut.submit(Language::En).await;
    }
}

#[tokio::test(start_paused = true)]
async fn ok() {
    // Arrange
    let language = Language::En;
    let draft = ContactFormDraft {
        name: "  Ann ".into(),
        email: " ann@x.com ".into(),
        subject: " Hi ".into(),
        message: " Hello ".into(),
    };

    let store = MockStoreService::new().with_is_ready(true);
    let surface = MockSurfaceService::new()
        .with_form_fields(draft)
        .with_trigger_label("Write to me".into())
        .with_set_trigger_enabled(false)
        .with_set_trigger_busy(true)
        .with_set_trigger_label(UiText::Sending.localized(language).into())
        .with_set_form_visible(false)
        .with_set_confirmation_visible(true);
    let contact_append = MockContactAppendCommandService::new().with_invoke(
        FORM_1.clone(),
        language,
        Ok(KEY_1.clone()),
    );

    let sut = sut(store, surface, contact_append);

    // Act
    sut.submit(language).await;

    // Assert: exactly one append with the trimmed fields (checked by the
    // command mock) and the auto-reset is pending but has not fired.
    assert!(sut.state.reset_task.lock().unwrap().is_some());
}

#[tokio::test(start_paused = true)]
async fn auto_reset_restores_form_after_delay() {
    // Arrange
    let language = Language::Pl;
    let store = MockStoreService::new().with_is_ready(true);
    let surface = MockSurfaceService::new()
        .with_form_fields(DRAFT_1.clone())
        .with_trigger_label("Napisz do mnie".into())
        .with_set_trigger_enabled(false)
        .with_set_trigger_busy(true)
        .with_set_trigger_label(UiText::Sending.localized(language).into())
        .with_set_form_visible(false)
        .with_set_confirmation_visible(true)
        // Fired by the scheduled reset:
        .with_reset_form()
        .with_set_form_visible(true)
        .with_set_confirmation_visible(false)
        .with_set_trigger_enabled(true)
        .with_set_trigger_busy(false)
        .with_set_trigger_label("Napisz do mnie".into());
    let contact_append = MockContactAppendCommandService::new().with_invoke(
        FORM_1.clone(),
        language,
        Ok(KEY_1.clone()),
    );

    let sut = sut(store, surface, contact_append);

    // Act
    sut.submit(language).await;

    let task = sut.state.reset_task.lock().unwrap().take().unwrap();

    // Let the reset task register its timer, then stop just short of the
    // delay.
    tokio::task::yield_now().await;
    tokio::time::advance(AUTO_RESET_DELAY - Duration::from_millis(1)).await;
    assert!(!task.is_finished());

    tokio::time::advance(Duration::from_millis(1)).await;

    // Assert: propagates any unexpected-call panic from the reset task.
    task.await.unwrap();
}

#[tokio::test]
async fn append_failure_restores_trigger_with_fallback_label() {
    // Arrange
    let language = Language::Pl;
    let store = MockStoreService::new().with_is_ready(true);
    let surface = MockSurfaceService::new()
        .with_form_fields(DRAFT_1.clone())
        .with_trigger_label("Napisz do mnie".into())
        .with_set_trigger_enabled(false)
        .with_set_trigger_busy(true)
        .with_set_trigger_label(UiText::Sending.localized(language).into())
        .with_set_trigger_enabled(true)
        .with_set_trigger_busy(false)
        // The stock send label, not the captured "Napisz do mnie".
        .with_set_trigger_label(UiText::SendMessage.localized(language).into())
        .with_alert(UiText::SubmitFailed.localized(language).into());
    let contact_append = MockContactAppendCommandService::new().with_invoke(
        FORM_1.clone(),
        language,
        Err(ContactSubmitError::Append(anyhow!("network down"))),
    );

    let sut = sut(store, surface, contact_append);

    // Act
    sut.submit(language).await;

    // Assert: the form was never hidden, the confirmation never shown (the
    // mock panics on either call) and no reset was scheduled.
    assert!(sut.state.reset_task.lock().unwrap().is_none());
}
