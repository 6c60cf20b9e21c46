use email_address::EmailAddress;
use folio_models::contact::{
    ContactAuthor, ContactContent, ContactMessage, ContactName, ContactSubject,
};
use serde::Deserialize;

use super::ApiFieldError;

pub const DEFAULT_SUBJECT: &str = "Contact form message";

/// Raw contact form payload. Every field deserializes leniently so that
/// missing or invalid fields are reported per field by [`Self::validate`]
/// instead of failing deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiContactMessage {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

impl ApiContactMessage {
    pub fn validate(self) -> Result<ContactMessage, Vec<ApiFieldError>> {
        let mut errors = Vec::new();

        let name = ContactName::try_new(self.name.unwrap_or_default())
            .map_err(|_| errors.push(ApiFieldError::new("name", "Provide a valid name.")))
            .ok();

        let email = self
            .email
            .as_deref()
            .unwrap_or_default()
            .trim()
            .parse::<EmailAddress>()
            .map_err(|_| {
                errors.push(ApiFieldError::new(
                    "email",
                    "Provide a valid email address.",
                ))
            })
            .ok();

        let subject = match self.subject.as_deref().map(str::trim) {
            None | Some("") => Some(ContactSubject::try_new(DEFAULT_SUBJECT).unwrap()),
            Some(subject) => ContactSubject::try_new(subject)
                .map_err(|_| {
                    errors.push(ApiFieldError::new(
                        "subject",
                        "The subject must not exceed 120 characters.",
                    ))
                })
                .ok(),
        };

        let content = ContactContent::try_new(self.message.unwrap_or_default())
            .map_err(|_| {
                errors.push(ApiFieldError::new(
                    "message",
                    "The message must be at least 10 characters long.",
                ))
            })
            .ok();

        match (name, email, subject, content) {
            (Some(name), Some(email), Some(subject), Some(content)) => Ok(ContactMessage {
                author: ContactAuthor { name, email },
                subject,
                content,
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ApiContactMessage {
        ApiContactMessage {
            name: Some("Max Mustermann".into()),
            email: Some("max.mustermann@example.de".into()),
            subject: Some("Test".into()),
            message: Some("Hello World!".into()),
        }
    }

    #[test]
    fn ok() {
        let message = valid().validate().unwrap();
        assert_eq!(*message.author.name, "Max Mustermann");
        assert_eq!(message.author.email.as_str(), "max.mustermann@example.de");
        assert_eq!(*message.subject, "Test");
        assert_eq!(*message.content, "Hello World!");
    }

    #[test]
    fn missing_email() {
        let errors = ApiContactMessage {
            email: None,
            ..valid()
        }
        .validate()
        .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "email");
    }

    #[test]
    fn invalid_email() {
        let errors = ApiContactMessage {
            email: Some("not-an-address".into()),
            ..valid()
        }
        .validate()
        .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "email");
    }

    #[test]
    fn message_just_too_short() {
        let errors = ApiContactMessage {
            message: Some("123456789".into()),
            ..valid()
        }
        .validate()
        .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "message");
    }

    #[test]
    fn message_min_length_passes() {
        let message = ApiContactMessage {
            message: Some("1234567890".into()),
            ..valid()
        }
        .validate()
        .unwrap();
        assert_eq!(*message.content, "1234567890");
    }

    #[test]
    fn subject_defaults_when_absent_or_blank() {
        for subject in [None, Some("".into()), Some("   ".into())] {
            let message = ApiContactMessage { subject, ..valid() }.validate().unwrap();
            assert_eq!(*message.subject, DEFAULT_SUBJECT);
        }
    }

    #[test]
    fn subject_too_long() {
        let errors = ApiContactMessage {
            subject: Some("x".repeat(121)),
            ..valid()
        }
        .validate()
        .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "subject");
    }

    #[test]
    fn empty_body_reports_each_required_field() {
        let errors = ApiContactMessage::default().validate().unwrap_err();
        let fields = errors.iter().map(|err| err.field.as_str()).collect::<Vec<_>>();
        assert_eq!(fields, ["name", "email", "message"]);
    }

    #[test]
    fn fields_are_trimmed() {
        let message = ApiContactMessage {
            name: Some("  Max Mustermann  ".into()),
            email: Some("  max.mustermann@example.de  ".into()),
            subject: Some("  Test  ".into()),
            message: Some("  Hello World!  ".into()),
        }
        .validate()
        .unwrap();
        assert_eq!(*message.author.name, "Max Mustermann");
        assert_eq!(message.author.email.as_str(), "max.mustermann@example.de");
        assert_eq!(*message.subject, "Test");
        assert_eq!(*message.content, "Hello World!");
    }
}
