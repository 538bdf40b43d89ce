//! Authentication primitives such as login and registration credentials.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate string inputs before a handler talks to a port or service.

use std::fmt;

use zeroize::Zeroizing;

/// Maximum stored email length, matching the `users.email` column intent.
pub const EMAIL_MAX: usize = 150;

/// Domain error returned when credential payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialValidationError {
    /// Email was missing or blank once trimmed.
    EmptyEmail,
    /// Email does not look like an address (no `@`, or embedded whitespace).
    InvalidEmail,
    /// Email exceeds the storable length.
    EmailTooLong { max: usize },
    /// Password was blank.
    EmptyPassword,
}

impl fmt::Display for CredentialValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::InvalidEmail => write!(f, "email must be a valid address"),
            Self::EmailTooLong { max } => {
                write!(f, "email must be at most {max} characters")
            }
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for CredentialValidationError {}

/// Validated email/password pair used by registration and authentication.
///
/// ## Invariants
/// - `email` is trimmed, non-empty, contains a single-host `@`, and fits the
///   stored column. It is otherwise kept exactly as entered: lookups are
///   case-sensitive as stored.
/// - `password` is non-empty and retains caller-provided whitespace to avoid
///   surprising credential comparisons. It is held in a zeroizing buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    email: String,
    password: Zeroizing<String>,
}

impl Credentials {
    /// Construct credentials from raw email/password inputs.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, CredentialValidationError> {
        let normalized = email.trim();
        if normalized.is_empty() {
            return Err(CredentialValidationError::EmptyEmail);
        }
        if normalized.chars().count() > EMAIL_MAX {
            return Err(CredentialValidationError::EmailTooLong { max: EMAIL_MAX });
        }
        let (local, host) = normalized
            .split_once('@')
            .ok_or(CredentialValidationError::InvalidEmail)?;
        if local.is_empty() || host.is_empty() || normalized.chars().any(char::is_whitespace) {
            return Err(CredentialValidationError::InvalidEmail);
        }

        if password.is_empty() {
            return Err(CredentialValidationError::EmptyPassword);
        }

        Ok(Self {
            email: normalized.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Email string suitable for user lookups.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password string provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "pw", CredentialValidationError::EmptyEmail)]
    #[case("   ", "pw", CredentialValidationError::EmptyEmail)]
    #[case("not-an-address", "pw", CredentialValidationError::InvalidEmail)]
    #[case("@example.com", "pw", CredentialValidationError::InvalidEmail)]
    #[case("alice@", "pw", CredentialValidationError::InvalidEmail)]
    #[case("alice smith@example.com", "pw", CredentialValidationError::InvalidEmail)]
    #[case("alice@example.com", "", CredentialValidationError::EmptyPassword)]
    fn invalid_credentials(
        #[case] email: &str,
        #[case] password: &str,
        #[case] expected: CredentialValidationError,
    ) {
        let err =
            Credentials::try_from_parts(email, password).expect_err("invalid inputs must fail");
        assert_eq!(err, expected);
    }

    #[test]
    fn overlong_email_is_rejected() {
        let local = "a".repeat(EMAIL_MAX);
        let email = format!("{local}@example.com");
        let err = Credentials::try_from_parts(&email, "pw").expect_err("too long");
        assert_eq!(err, CredentialValidationError::EmailTooLong { max: EMAIL_MAX });
    }

    #[rstest]
    #[case("  alice@example.com  ", "secret")]
    #[case("Bob@Example.com", "correct horse battery staple")]
    fn valid_credentials_trim_email(#[case] email: &str, #[case] password: &str) {
        let creds =
            Credentials::try_from_parts(email, password).expect("valid inputs should succeed");
        assert_eq!(creds.email(), email.trim());
        assert_eq!(creds.password(), password);
    }
}
