//! The form's starting values, optionally read from a YAML file.
//!
//! ```yaml
//! length: 24
//! classes: [lowercase, uppercase, digits]
//! ```

use std::env;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::charset::{CharClass, CharClassSet};
use crate::form::FormState;
use crate::length::DEFAULT_LENGTH;
use crate::{PassgenError, PassgenErrorRepr};

#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub length: usize,
    pub classes: Vec<CharClass>,
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            length: DEFAULT_LENGTH,
            classes: CharClass::ALL.to_vec(),
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> Result<Settings, PassgenError> {
        let file =
            File::open(path).map_err(|err| PassgenErrorRepr::SettingsIo(path.to_owned(), err))?;
        let settings = serde_yaml::from_reader(file)
            .map_err(|err| PassgenErrorRepr::SettingsParse(path.to_owned(), err))?;
        tracing::debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Load settings from `path` if one was given, else from the default location if a file
    /// exists there, else use the built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Settings, PassgenError> {
        if let Some(path) = path {
            return Settings::load(path);
        }
        match default_path() {
            Some(path) => match Settings::load(&path) {
                Err(PassgenError(PassgenErrorRepr::SettingsIo(_, err)))
                    if err.kind() == io::ErrorKind::NotFound =>
                {
                    Ok(Settings::default())
                }
                r => r,
            },
            None => Ok(Settings::default()),
        }
    }

    pub fn class_set(&self) -> CharClassSet {
        self.classes.iter().copied().collect()
    }

    pub fn form_state(&self) -> FormState {
        FormState::new(self.length, self.class_set())
    }
}

/// `$HOME/.config/passgen/settings.yaml`, or `None` if `HOME` isn't set.
pub fn default_path() -> Option<PathBuf> {
    let home = env::var_os("HOME")?;
    let mut p = PathBuf::from(home);
    p.push(".config");
    p.push("passgen");
    p.push("settings.yaml");
    Some(p)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn settings_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn loads_partial_file_with_defaults() {
        let file = settings_file("length: 24\n");
        let settings = Settings::load(file.path()).unwrap();
        assert_eq!(settings.length, 24);
        assert_eq!(settings.class_set(), CharClassSet::all());
    }

    #[test]
    fn loads_classes() {
        let file = settings_file("classes: [digits, lowercase]\n");
        let settings = Settings::load(file.path()).unwrap();
        assert_eq!(settings.length, DEFAULT_LENGTH);
        let form = settings.form_state();
        assert_eq!(
            form.generator().allowed_chars(),
            "abcdefghijklmnopqrstuvwxyz0123456789"
        );
    }

    #[test]
    fn out_of_range_length_is_clamped_in_form() {
        let file = settings_file("length: 4000\n");
        let settings = Settings::load(file.path()).unwrap();
        assert_eq!(settings.form_state().length(), 128);
    }

    #[test]
    fn rejects_bad_files() {
        let file = settings_file("classes: [emoji]\n");
        assert!(Settings::load(file.path()).is_err());
        let file = settings_file("colour: blue\n");
        assert!(Settings::load(file.path()).is_err());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.yaml");
        assert!(Settings::load_or_default(Some(&missing)).is_err());
    }
}
