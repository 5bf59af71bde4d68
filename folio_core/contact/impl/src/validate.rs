use folio_core_contact_contracts::ContactSubmitError;
use folio_models::contact::{
    ContactAuthor, ContactAuthorName, ContactContent, ContactEmail, ContactForm,
    ContactFormDraft, ContactSubject,
};

/// Checks the draft in page order: presence of all four fields first, then
/// the email shape. Returns the trimmed, validated form.
pub(crate) fn checked_form(draft: ContactFormDraft) -> Result<ContactForm, ContactSubmitError> {
    let ContactFormDraft {
        name,
        email,
        subject,
        message,
    } = draft;

    if [&name, &email, &subject, &message]
        .iter()
        .any(|field| field.trim().is_empty())
    {
        return Err(ContactSubmitError::EmptyField);
    }

    let email = ContactEmail::try_new(email).map_err(|_| ContactSubmitError::InvalidEmail)?;
    let name = ContactAuthorName::try_new(name).map_err(|_| ContactSubmitError::EmptyField)?;
    let subject = ContactSubject::try_new(subject).map_err(|_| ContactSubmitError::EmptyField)?;
    let content = ContactContent::try_new(message).map_err(|_| ContactSubmitError::EmptyField)?;

    Ok(ContactForm {
        author: ContactAuthor { name, email },
        subject,
        content,
    })
}

#[cfg(test)]
mod tests {
    use folio_demo::contact::{DRAFT_1, FORM_1};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn ok() {
        let form = checked_form(DRAFT_1.clone()).unwrap();

        assert_eq!(form, *FORM_1);
    }

    #[test]
    fn ok_trims_whitespace() {
        let draft = ContactFormDraft {
            name: "  Ann ".into(),
            email: " ann@x.com\n".into(),
            subject: "\tHi".into(),
            message: " Hello ".into(),
        };

        let form = checked_form(draft).unwrap();

        assert_eq!(form, *FORM_1);
    }

    #[test]
    fn rejects_any_blank_field() {
        for blank in ["", "   ", "\t\n"] {
            for field in 0..4 {
                let mut draft = DRAFT_1.clone();
                match field {
                    0 => draft.name = blank.into(),
                    1 => draft.email = blank.into(),
                    2 => draft.subject = blank.into(),
                    _ => draft.message = blank.into(),
                }

                let result = checked_form(draft);

                assert!(
                    matches!(result, Err(ContactSubmitError::EmptyField)),
                    "field {field} = {blank:?}: {result:?}"
                );
            }
        }
    }

    #[test]
    fn rejects_malformed_email() {
        for email in ["annx.com", "ann@xcom", "ann@x.", "an n@x.com", "ann@@"] {
            let draft = ContactFormDraft {
                email: email.into(),
                ..DRAFT_1.clone()
            };

            let result = checked_form(draft);

            assert!(
                matches!(result, Err(ContactSubmitError::InvalidEmail)),
                "{email:?}: {result:?}"
            );
        }
    }
}
