use std::io::Write;

use anyhow::Context;
use folio_config::Config;
use folio_core_contact_contracts::ContactFeatureService;
use folio_models::{
    contact::ContactFormDraft,
    i18n::{Language, UiText},
};

use crate::environment;

/// Runs the interactive contact form until stdin is exhausted.
pub async fn form(config: Config, language: Language) -> anyhow::Result<()> {
    let (contact, surface) = environment::contact(&config, language).await;

    let stdin = std::io::stdin();
    let mut lines = stdin.lines();

    loop {
        let Some(draft) = read_draft(&mut lines, language)? else {
            break;
        };

        surface.set_fields(draft);
        contact.submit(language).await;

        // Blocks while the confirmation is up, until the auto-reset restores
        // the form.
        surface.wait_until_idle().await;
    }

    Ok(())
}

fn read_draft(
    lines: &mut impl Iterator<Item = std::io::Result<String>>,
    language: Language,
) -> anyhow::Result<Option<ContactFormDraft>> {
    let mut draft = ContactFormDraft::default();

    for (prompt, field) in [
        (UiText::PromptName, &mut draft.name),
        (UiText::PromptEmail, &mut draft.email),
        (UiText::PromptSubject, &mut draft.subject),
        (UiText::PromptMessage, &mut draft.message),
    ] {
        print!("{}: ", prompt.localized(language));
        std::io::stdout()
            .flush()
            .context("Failed to flush stdout")?;

        match lines.next() {
            Some(line) => *field = line.context("Failed to read from stdin")?,
            None => return Ok(None),
        }
    }

    Ok(Some(draft))
}
