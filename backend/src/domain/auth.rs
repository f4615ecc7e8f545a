//! Login credentials and the demo credential check.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate string inputs before a handler compares them.

use std::fmt;

use coffee_data::has_malformed_characters;
use zeroize::Zeroizing;

/// Domain error returned when login payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginValidationError {
    /// Username was missing or blank once trimmed.
    EmptyUsername,
    /// Username contains characters outside `[A-Za-z0-9_]`.
    MalformedUsername,
    /// Password was blank.
    EmptyPassword,
}

impl LoginValidationError {
    /// Payload field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyUsername | Self::MalformedUsername => "benutzername",
            Self::EmptyPassword => "passwort",
        }
    }

    /// Stable machine-readable code for error details.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyUsername => "empty_username",
            Self::MalformedUsername => "malformed_username",
            Self::EmptyPassword => "empty_password",
        }
    }
}

impl fmt::Display for LoginValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUsername => write!(f, "username must not be empty"),
            Self::MalformedUsername => write!(
                f,
                "username may only contain letters, digits and underscores"
            ),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for LoginValidationError {}

/// Validated login credentials.
///
/// ## Invariants
/// - `username` is trimmed, non-empty and limited to `[A-Za-z0-9_]`.
/// - `password` is required to be non-empty but retains caller-provided
///   whitespace to avoid surprising credential comparisons.
///
/// # Examples
/// ```
/// use backend::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts("admin", "password").expect("valid");
/// assert_eq!(creds.username(), "admin");
/// assert_eq!(creds.password(), "password");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    username: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw username/password inputs.
    pub fn try_from_parts(username: &str, password: &str) -> Result<Self, LoginValidationError> {
        let normalized = username.trim();
        if normalized.is_empty() {
            return Err(LoginValidationError::EmptyUsername);
        }
        if has_malformed_characters(normalized) {
            return Err(LoginValidationError::MalformedUsername);
        }

        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }

        Ok(Self {
            username: normalized.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Username as submitted, trimmed.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Password string provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    /// Whether both parts equal `expected`.
    pub fn matches(&self, expected: &LoginCredentials) -> bool {
        self.username == expected.username && *self.password == *expected.password
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "pw", LoginValidationError::EmptyUsername)]
    #[case("   ", "pw", LoginValidationError::EmptyUsername)]
    #[case("kaffee-fan", "pw", LoginValidationError::MalformedUsername)]
    #[case("Jürgen", "pw", LoginValidationError::MalformedUsername)]
    #[case("ad min", "pw", LoginValidationError::MalformedUsername)]
    #[case("user", "", LoginValidationError::EmptyPassword)]
    fn invalid_credentials(
        #[case] username: &str,
        #[case] password: &str,
        #[case] expected: LoginValidationError,
    ) {
        let err = LoginCredentials::try_from_parts(username, password)
            .expect_err("invalid inputs must fail");
        assert_eq!(err, expected);
    }

    #[rstest]
    #[case("  admin  ", "secret")]
    #[case("latte_lover42", "correct horse battery staple")]
    fn valid_credentials_trim_username(#[case] username: &str, #[case] password: &str) {
        let creds = LoginCredentials::try_from_parts(username, password)
            .expect("valid inputs should succeed");
        assert_eq!(creds.username(), username.trim());
        assert_eq!(creds.password(), password);
    }

    #[rstest]
    #[case(LoginValidationError::EmptyUsername, "benutzername", "empty_username")]
    #[case(
        LoginValidationError::MalformedUsername,
        "benutzername",
        "malformed_username"
    )]
    #[case(LoginValidationError::EmptyPassword, "passwort", "empty_password")]
    fn errors_name_field_and_code(
        #[case] err: LoginValidationError,
        #[case] field: &str,
        #[case] code: &str,
    ) {
        assert_eq!(err.field(), field);
        assert_eq!(err.code(), code);
    }

    #[rstest]
    #[case("admin", "password", true)]
    #[case("admin", "Password", false)]
    #[case("root", "password", false)]
    fn matches_compares_both_parts(
        #[case] username: &str,
        #[case] password: &str,
        #[case] expected: bool,
    ) {
        let configured =
            LoginCredentials::try_from_parts("admin", "password").expect("valid creds");
        let submitted = LoginCredentials::try_from_parts(username, password).expect("valid shape");
        assert_eq!(submitted.matches(&configured), expected);
    }
}
