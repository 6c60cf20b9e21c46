use std::{fmt, str::FromStr};

use email_address::EmailAddress;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An email address with an optional display name ("Jane Doe <jane@example.com>").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAddressWithName {
    pub email: EmailAddress,
    pub name: Option<String>,
}

impl EmailAddressWithName {
    pub fn named(email: EmailAddress, name: impl Into<String>) -> Self {
        Self {
            email,
            name: Some(name.into()),
        }
    }

    pub fn into_email_address(self) -> EmailAddress {
        self.email
    }
}

impl From<EmailAddress> for EmailAddressWithName {
    fn from(email: EmailAddress) -> Self {
        Self { email, name: None }
    }
}

#[derive(Debug, Error)]
pub enum MailboxParseError {
    #[error("Invalid mailbox syntax")]
    Syntax,
    #[error(transparent)]
    Address(#[from] email_address::Error),
}

impl FromStr for EmailAddressWithName {
    type Err = MailboxParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let Some(lt) = s.find('<') else {
            return Ok(s.parse::<EmailAddress>()?.into());
        };
        let addr = s[lt..]
            .strip_prefix('<')
            .and_then(|rest| rest.strip_suffix('>'))
            .ok_or(MailboxParseError::Syntax)?;
        let email = addr.trim().parse::<EmailAddress>()?;
        let name = s[..lt].trim();
        Ok(Self {
            email,
            name: (!name.is_empty()).then(|| name.into()),
        })
    }
}

impl fmt::Display for EmailAddressWithName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{name} <{}>", self.email),
            None => self.email.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bare_address() {
        let mailbox = "jane@example.com".parse::<EmailAddressWithName>().unwrap();
        assert_eq!(mailbox.email.as_str(), "jane@example.com");
        assert_eq!(mailbox.name, None);
    }

    #[test]
    fn parse_named_mailbox() {
        let mailbox = "Jane Doe <jane@example.com>"
            .parse::<EmailAddressWithName>()
            .unwrap();
        assert_eq!(mailbox.email.as_str(), "jane@example.com");
        assert_eq!(mailbox.name.as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn parse_rejects_unclosed_mailbox() {
        assert!("Jane Doe <jane@example.com"
            .parse::<EmailAddressWithName>()
            .is_err());
    }

    #[test]
    fn display_roundtrip() {
        for input in ["jane@example.com", "Jane Doe <jane@example.com>"] {
            let mailbox = input.parse::<EmailAddressWithName>().unwrap();
            assert_eq!(mailbox.to_string(), input);
        }
    }
}
