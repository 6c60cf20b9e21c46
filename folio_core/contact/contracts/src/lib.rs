use std::future::Future;

use folio_email_contracts::EmailSendError;
use folio_models::contact::ContactMessage;
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFeatureService: Send + Sync + 'static {
    /// Forward a contact form submission to the site owner's inbox and send
    /// the auto-reply to the submitter, when enabled.
    fn submit(
        &self,
        message: ContactMessage,
    ) -> impl Future<Output = Result<ContactReceipt, ContactSubmitError>> + Send;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactReceipt {
    pub auto_reply_sent: bool,
}

#[derive(Debug, Error)]
pub enum ContactSubmitError {
    #[error("Email delivery is not configured (missing {})", missing.join(", "))]
    NotConfigured { missing: Vec<&'static str> },
    #[error("Failed to send message.")]
    Send(#[source] EmailSendError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
