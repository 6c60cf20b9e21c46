use email_address::EmailAddress;
use nutype::nutype;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub author: ContactAuthor,
    pub subject: ContactSubject,
    pub content: ContactContent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactAuthor {
    pub name: ContactName,
    pub email: EmailAddress,
}

#[nutype(
    sanitize(trim),
    validate(len_char_min = 2, len_char_max = 256),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactName(String);

#[nutype(
    sanitize(trim),
    validate(len_char_max = 120),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactSubject(String);

#[nutype(
    sanitize(trim),
    validate(len_char_min = 10, len_char_max = 4096),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactContent(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_bounds() {
        assert!(ContactName::try_new("J").is_err());
        assert!(ContactName::try_new("  J  ").is_err());
        assert!(ContactName::try_new("Jo").is_ok());
        assert!(ContactName::try_new("x".repeat(256)).is_ok());
        assert!(ContactName::try_new("x".repeat(257)).is_err());
    }

    #[test]
    fn name_is_trimmed() {
        let name = ContactName::try_new("  Jaelson Santos  ").unwrap();
        assert_eq!(*name, "Jaelson Santos");
    }

    #[test]
    fn subject_bounds() {
        assert!(ContactSubject::try_new("").is_ok());
        assert!(ContactSubject::try_new("x".repeat(120)).is_ok());
        assert!(ContactSubject::try_new("x".repeat(121)).is_err());
    }

    #[test]
    fn content_bounds() {
        assert!(ContactContent::try_new("123456789").is_err());
        assert!(ContactContent::try_new("1234567890").is_ok());
        assert!(ContactContent::try_new("1234567   ").is_err());
        assert!(ContactContent::try_new("x".repeat(4096)).is_ok());
        assert!(ContactContent::try_new("x".repeat(4097)).is_err());
    }
}
