use std::sync::Arc;

use email_address::EmailAddress;
use folio_core_contact_contracts::{ContactFeatureService, ContactReceipt, ContactSubmitError};
use folio_email_contracts::{ContentType, Email, EmailSendError, EmailService};
use folio_models::{contact::ContactMessage, email_address::EmailAddressWithName};
use folio_templates_contracts::{AutoReplyTemplate, ContactNotificationTemplate, TemplateService};
use url::Url;

const AUTO_REPLY_SUBJECT: &str = "Thanks for getting in touch!";

#[derive(Debug, Clone)]
pub struct ContactFeatureServiceImpl<Email, Templates> {
    pub email: Email,
    pub templates: Templates,
    pub config: ContactFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct ContactFeatureConfig {
    /// Inbox the submission is forwarded to. Absent when the deployment has
    /// not set `mailer.inbox`.
    pub inbox: Option<Arc<EmailAddress>>,
    pub auto_reply: bool,
    pub sender_name: Arc<str>,
    pub links: Arc<ProfileLinks>,
}

#[derive(Debug, Clone, Default)]
pub struct ProfileLinks {
    pub portfolio: Option<Url>,
    pub github: Option<Url>,
    pub linkedin: Option<Url>,
    pub whatsapp: Option<Url>,
}

impl<EmailS, Templates> ContactFeatureService for ContactFeatureServiceImpl<EmailS, Templates>
where
    EmailS: EmailService,
    Templates: TemplateService,
{
    async fn submit(&self, message: ContactMessage) -> Result<ContactReceipt, ContactSubmitError> {
        let Some(inbox) = self.config.inbox.as_deref() else {
            return Err(ContactSubmitError::NotConfigured {
                missing: vec!["mailer.inbox"],
            });
        };

        let body = self.templates.render(&ContactNotificationTemplate {
            name: (*message.author.name).clone(),
            email: message.author.email.to_string(),
            content: (*message.content).clone(),
        })?;

        let notification = Email {
            recipient: inbox.clone().into(),
            subject: format!("[Contact Form] {}", *message.subject),
            body,
            content_type: ContentType::Text,
            reply_to: Some(EmailAddressWithName::named(
                message.author.email.clone(),
                (*message.author.name).clone(),
            )),
        };
        self.email.send(notification).await.map_err(send_error)?;

        if !self.config.auto_reply {
            return Ok(ContactReceipt {
                auto_reply_sent: false,
            });
        }

        let links = &self.config.links;
        let body = self.templates.render(&AutoReplyTemplate {
            name: (*message.author.name).clone(),
            sender_name: self.config.sender_name.to_string(),
            portfolio_url: links.portfolio.as_ref().map(Url::to_string),
            github_url: links.github.as_ref().map(Url::to_string),
            linkedin_url: links.linkedin.as_ref().map(Url::to_string),
            whatsapp_url: links.whatsapp.as_ref().map(Url::to_string),
        })?;

        let auto_reply = Email {
            recipient: EmailAddressWithName::named(
                message.author.email,
                (*message.author.name).clone(),
            ),
            subject: AUTO_REPLY_SUBJECT.into(),
            body,
            content_type: ContentType::Text,
            reply_to: None,
        };
        self.email.send(auto_reply).await.map_err(send_error)?;

        Ok(ContactReceipt {
            auto_reply_sent: true,
        })
    }
}

fn send_error(err: EmailSendError) -> ContactSubmitError {
    match err {
        EmailSendError::NotConfigured { missing } => ContactSubmitError::NotConfigured { missing },
        err => ContactSubmitError::Send(err),
    }
}
