//! The fixed character classes passwords are drawn from.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{PassgenError, PassgenErrorRepr};

static LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
static UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
static DIGITS: &str = "0123456789";
static PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digits,
    Punctuation,
}

impl CharClass {
    /// Every class, in the order their members are concatenated into an alphabet.
    pub const ALL: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Digits,
        CharClass::Punctuation,
    ];

    pub fn members(self) -> &'static str {
        match self {
            CharClass::Lowercase => LOWERCASE,
            CharClass::Uppercase => UPPERCASE,
            CharClass::Digits => DIGITS,
            CharClass::Punctuation => PUNCTUATION,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CharClass::Lowercase => "lowercase",
            CharClass::Uppercase => "uppercase",
            CharClass::Digits => "digits",
            CharClass::Punctuation => "punctuation",
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CharClass {
    type Err = PassgenError;

    fn from_str(s: &str) -> Result<CharClass, PassgenError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lowercase" | "ascii_lowercase" | "lower" => Ok(CharClass::Lowercase),
            "uppercase" | "ascii_uppercase" | "upper" => Ok(CharClass::Uppercase),
            "digits" | "digit" => Ok(CharClass::Digits),
            "punctuation" | "symbols" => Ok(CharClass::Punctuation),
            _ => Err(PassgenErrorRepr::UnknownCharClass(s.to_owned()).into()),
        }
    }
}

/// A set of selected character classes.
#[derive(Clone, Copy, Default, Eq, PartialEq, Hash)]
pub struct CharClassSet(u8);

impl CharClassSet {
    pub fn empty() -> CharClassSet {
        CharClassSet(0)
    }

    pub fn all() -> CharClassSet {
        CharClass::ALL.into_iter().collect()
    }

    pub fn contains(&self, class: CharClass) -> bool {
        self.0 & class.bit() != 0
    }

    pub fn insert(&mut self, class: CharClass) {
        self.0 |= class.bit();
    }

    pub fn remove(&mut self, class: CharClass) {
        self.0 &= !class.bit();
    }

    pub fn set(&mut self, class: CharClass, selected: bool) {
        if selected {
            self.insert(class)
        } else {
            self.remove(class)
        }
    }

    pub fn toggle(&mut self, class: CharClass) {
        self.0 ^= class.bit();
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// The selected classes in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = CharClass> + '_ {
        CharClass::ALL.into_iter().filter(|c| self.contains(*c))
    }

    /// The members of every selected class, concatenated in canonical order.
    pub fn alphabet(&self) -> String {
        self.iter().map(CharClass::members).collect()
    }
}

impl FromIterator<CharClass> for CharClassSet {
    fn from_iter<I: IntoIterator<Item = CharClass>>(iter: I) -> CharClassSet {
        let mut set = CharClassSet::empty();
        for class in iter {
            set.insert(class);
        }
        set
    }
}

impl fmt::Debug for CharClassSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
