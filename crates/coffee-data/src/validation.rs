//! Username and password rules shared by the generators and the login
//! endpoint.
//!
//! # Validation Rules
//!
//! - Usernames: 5 to 20 characters drawn from `A-Z`, `a-z`, `0-9` and `_`
//! - Passwords: 8 to 16 ASCII letters or digits

/// Minimum length of a generated username.
pub const USERNAME_MIN: usize = 5;

/// Maximum length of a generated username.
pub const USERNAME_MAX: usize = 20;

/// Minimum length of a valid password.
pub const PASSWORD_MIN: usize = 8;

/// Maximum length of a generated password.
pub const PASSWORD_MAX: usize = 16;

/// Returns `true` if the character may appear in a username.
#[must_use]
pub const fn is_username_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Returns `true` if the username contains a character outside
/// `[A-Za-z0-9_]`. Length is not considered.
///
/// # Examples
///
/// ```
/// use coffee_data::has_malformed_characters;
///
/// assert!(!has_malformed_characters("kaffee_fan42"));
/// assert!(has_malformed_characters("kaffee-fan"));
/// assert!(has_malformed_characters("Jürgen"));
/// ```
#[must_use]
pub fn has_malformed_characters(username: &str) -> bool {
    !username.chars().all(is_username_char)
}

/// Validates a username against the character set and length bounds.
///
/// # Examples
///
/// ```
/// use coffee_data::is_valid_username;
///
/// assert!(is_valid_username("latte_lover"));
/// assert!(!is_valid_username("abc"));          // Too short
/// assert!(!is_valid_username("milch.schaum")); // Invalid character
/// ```
#[must_use]
pub fn is_valid_username(username: &str) -> bool {
    let length = username.chars().count();
    (USERNAME_MIN..=USERNAME_MAX).contains(&length) && !has_malformed_characters(username)
}

/// Validates a password against the length bounds and alphabet.
#[must_use]
pub fn is_valid_password(password: &str) -> bool {
    let length = password.chars().count();
    (PASSWORD_MIN..=PASSWORD_MAX).contains(&length)
        && password.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Replaces characters outside the username alphabet with underscores.
///
/// Length is not enforced here.
#[must_use]
pub(crate) fn sanitize_username(raw: &str) -> String {
    raw.chars()
        .map(|c| if is_username_char(c) { c } else { '_' })
        .collect()
}

/// Appends `fallback` until the token reaches [`PASSWORD_MIN`] characters.
#[must_use]
pub(crate) fn pad_password(mut token: String, fallback: char) -> String {
    while token.chars().count() < PASSWORD_MIN {
        token.push(fallback);
    }
    token
}
