//! Customer email addresses.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Why a string is not a usable email address.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    #[error("email address is required")]
    Empty,
    #[error("email address is longer than {max} characters")]
    TooLong { max: usize },
    #[error("email address needs an '@'")]
    MissingAt,
    #[error("email address has more than one '@'")]
    ExtraAt,
    #[error("email address is missing the name before '@'")]
    NoMailbox,
    #[error("email address domain '{0}' is not a host name")]
    BadDomain(String),
}

/// A customer's email address, trimmed and checked for a plausible shape.
///
/// Accepts `mailbox@host.tld`: one `@`, something before it, and a host
/// with at least one dot that neither starts nor ends with one. Delivery is
/// never attempted, so nothing stricter is enforced.
///
/// ```
/// use aura_scents_core::Email;
///
/// let email = Email::parse("  kotagoda1@gmail.com ").unwrap();
/// assert_eq!(email.as_str(), "kotagoda1@gmail.com");
/// assert_eq!(email.domain(), "gmail.com");
///
/// assert!(Email::parse("kotagoda1@localhost").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Email {
    address: String,
    at: usize,
}

impl Email {
    /// Longest address accepted, per RFC 5321.
    pub const MAX_LENGTH: usize = 254;

    /// Validate `input` as an email address.
    ///
    /// # Errors
    ///
    /// Returns the first [`EmailError`] the trimmed input runs into.
    pub fn parse(input: &str) -> Result<Self, EmailError> {
        let address = input.trim();
        match address.len() {
            0 => return Err(EmailError::Empty),
            len if len > Self::MAX_LENGTH => {
                return Err(EmailError::TooLong {
                    max: Self::MAX_LENGTH,
                });
            }
            _ => {}
        }

        let (mailbox, host) = address.split_once('@').ok_or(EmailError::MissingAt)?;
        if host.contains('@') {
            return Err(EmailError::ExtraAt);
        }
        if mailbox.is_empty() {
            return Err(EmailError::NoMailbox);
        }
        if !is_host_name(host) {
            return Err(EmailError::BadDomain(host.to_owned()));
        }

        Ok(Self {
            at: mailbox.len(),
            address: address.to_owned(),
        })
    }

    /// The full address.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.address
    }

    /// Everything before the `@`.
    #[must_use]
    pub fn mailbox(&self) -> &str {
        self.address.get(..self.at).unwrap_or_default()
    }

    /// Everything after the `@`.
    #[must_use]
    pub fn domain(&self) -> &str {
        self.address.get(self.at + 1..).unwrap_or_default()
    }
}

fn is_host_name(host: &str) -> bool {
    host.contains('.')
        && !host.starts_with('.')
        && !host.ends_with('.')
        && !host.contains("..")
        && !host.chars().any(char::is_whitespace)
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address)
    }
}

impl std::str::FromStr for Email {
    type Err = EmailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Email {
    type Error = EmailError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.address
    }
}
