use anyhow::ensure;
use folio_config::Config;
use folio_core_contact_contracts::ContactFeatureService;
use folio_models::{contact::ContactFormDraft, i18n::Language};

use crate::environment;

/// Submits a single message and exits; fails if it was not accepted.
pub async fn send(config: Config, draft: ContactFormDraft, language: Language) -> anyhow::Result<()> {
    let (contact, surface) = environment::contact(&config, language).await;

    surface.set_fields(draft);
    contact.submit(language).await;

    ensure!(
        surface.confirmation_visible(),
        "The message was not accepted"
    );

    Ok(())
}
