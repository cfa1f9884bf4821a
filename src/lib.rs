use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub mod charset;
pub mod form;
pub mod length;
pub mod password_generation;
pub mod settings;

pub use charset::{CharClass, CharClassSet};
pub use form::FormState;
pub use password_generation::PasswordGenerator;
pub use settings::Settings;

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct PassgenError(PassgenErrorRepr);

impl PassgenError {
    /// True if generation was attempted with no character class selected.
    pub fn is_empty_alphabet(&self) -> bool {
        matches!(self.0, PassgenErrorRepr::EmptyAlphabet)
    }

    pub fn is_invalid_length(&self) -> bool {
        matches!(self.0, PassgenErrorRepr::InvalidLength(_))
    }
}

impl From<PassgenErrorRepr> for PassgenError {
    fn from(err: PassgenErrorRepr) -> PassgenError {
        PassgenError(err)
    }
}

#[derive(Debug, thiserror::Error)]
enum PassgenErrorRepr {
    #[error("no character class is selected; select at least one to generate a password")]
    EmptyAlphabet,
    #[error("invalid password length {0:?}: expected a whole number")]
    InvalidLength(String),
    #[error(
        "unknown character class {0:?} (expected one of: lowercase, uppercase, digits, punctuation)"
    )]
    UnknownCharClass(String),
    #[error("failed to read settings from {}: {1}", .0.display())]
    SettingsIo(PathBuf, #[source] io::Error),
    #[error("failed to parse settings in {}: {1}", .0.display())]
    SettingsParse(PathBuf, #[source] serde_yaml::Error),
}

/// A generated password.
///
/// The `Debug` impl does not show the contents, so a `Secret` can sit inside structs that get
/// logged.
#[derive(Clone, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Secret(String);

opaque_debug::implement!(Secret);

impl Secret {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters (not bytes).
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl From<String> for Secret {
    fn from(s: String) -> Secret {
        Secret(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_debug_hides_contents() {
        let secret = Secret::from("hunter2".to_owned());
        let debugged = format!("{:?}", secret);
        assert!(!debugged.contains("hunter2"));
        assert_eq!(secret.as_str(), "hunter2");
    }

    #[test]
    fn error_predicates() {
        let err = PassgenError::from(PassgenErrorRepr::EmptyAlphabet);
        assert!(err.is_empty_alphabet());
        assert!(!err.is_invalid_length());

        let err = PassgenError::from(PassgenErrorRepr::InvalidLength("abc".to_owned()));
        assert!(err.is_invalid_length());
        assert!(err.to_string().contains("\"abc\""));
    }
}
