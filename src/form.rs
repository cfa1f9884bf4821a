//! State behind the password form, independent of whatever draws it.
//!
//! A front end owns a `FormState`, forwards every input change to one of its setters, and calls
//! `generate_password` when the user asks for one. Each setter rebuilds the generator, so the
//! generator always matches what the form shows.

use crate::charset::{CharClass, CharClassSet};
use crate::length::{clamp_length, parse_length, DEFAULT_LENGTH};
use crate::password_generation::PasswordGenerator;
use crate::{PassgenError, Secret};

#[derive(Debug)]
pub struct FormState {
    length: usize,
    classes: CharClassSet,
    generator: PasswordGenerator,
    password: Option<Secret>,
}

impl Default for FormState {
    fn default() -> FormState {
        FormState::new(DEFAULT_LENGTH, CharClassSet::all())
    }
}

impl FormState {
    pub fn new(length: usize, classes: CharClassSet) -> FormState {
        let length = clamp_length(length);
        FormState {
            length,
            classes,
            generator: PasswordGenerator::new(length, classes),
            password: None,
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn classes(&self) -> CharClassSet {
        self.classes
    }

    pub fn generator(&self) -> &PasswordGenerator {
        &self.generator
    }

    /// The most recently generated password, if any.
    pub fn password(&self) -> Option<&Secret> {
        self.password.as_ref()
    }

    /// Whether generating would succeed; false when no class is selected.
    pub fn can_generate(&self) -> bool {
        !self.classes.is_empty()
    }

    pub fn set_length(&mut self, length: usize) {
        self.length = clamp_length(length);
        self.recompute();
    }

    /// Set the length from raw user input. On error the current length is kept.
    pub fn set_length_input(&mut self, input: &str) -> Result<(), PassgenError> {
        let length = parse_length(input)?;
        self.length = length;
        self.recompute();
        Ok(())
    }

    pub fn set_class(&mut self, class: CharClass, selected: bool) {
        self.classes.set(class, selected);
        self.recompute();
    }

    pub fn toggle_class(&mut self, class: CharClass) {
        self.classes.toggle(class);
        self.recompute();
    }

    pub fn set_classes(&mut self, classes: CharClassSet) {
        self.classes = classes;
        self.recompute();
    }

    /// Generate a new password and make it the displayed one.
    ///
    /// If nothing is selected the displayed password is cleared and the error returned; the form
    /// itself stays usable.
    pub fn generate_password(&mut self) -> Result<&Secret, PassgenError> {
        match self.generator.generate() {
            Ok(secret) => Ok(self.password.insert(secret)),
            Err(err) => {
                self.password = None;
                Err(err)
            }
        }
    }

    fn recompute(&mut self) {
        self.generator = PasswordGenerator::new(self.length, self.classes);
        tracing::debug!(
            length = self.length,
            classes = ?self.classes,
            "rebuilt password generator"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_sixteen_characters_of_everything() {
        let mut form = FormState::default();
        assert_eq!(form.length(), 16);
        assert_eq!(form.classes(), CharClassSet::all());
        assert!(form.password().is_none());
        assert_eq!(form.generate_password().unwrap().char_count(), 16);
    }

    #[test]
    fn changes_rebuild_the_generator() {
        let mut form = FormState::default();
        form.set_length(10);
        for class in [CharClass::Lowercase, CharClass::Uppercase, CharClass::Punctuation] {
            form.toggle_class(class);
        }
        assert_eq!(form.generator().length(), 10);
        assert_eq!(form.generator().allowed_chars(), "0123456789");
        let password = form.generate_password().unwrap().clone();
        assert!(password.as_str().chars().all(|c| c.is_ascii_digit()));
        assert_eq!(form.password(), Some(&password));
    }

    #[test]
    fn empty_selection_is_reported_not_fatal() {
        let mut form = FormState::default();
        form.generate_password().unwrap();
        form.set_classes(CharClassSet::empty());
        assert!(!form.can_generate());
        assert!(form.generate_password().unwrap_err().is_empty_alphabet());
        assert!(form.password().is_none());

        form.set_class(CharClass::Digits, true);
        assert!(form.can_generate());
        assert_eq!(form.generate_password().unwrap().char_count(), 16);
    }

    #[test]
    fn bad_length_input_keeps_previous_length() {
        let mut form = FormState::default();
        form.set_length_input("24").unwrap();
        assert_eq!(form.length(), 24);
        assert!(form.set_length_input("lots").unwrap_err().is_invalid_length());
        assert_eq!(form.length(), 24);
        assert_eq!(form.generator().length(), 24);
    }

    #[test]
    fn lengths_are_clamped() {
        let mut form = FormState::new(0, CharClassSet::all());
        assert_eq!(form.length(), 1);
        form.set_length(500);
        assert_eq!(form.length(), 128);
        form.set_length_input("1000").unwrap();
        assert_eq!(form.generator().length(), 128);
    }
}
