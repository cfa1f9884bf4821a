//! Utilities for generating passwords.

use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};

use crate::charset::CharClassSet;
use crate::{PassgenError, PassgenErrorRepr, Secret};

/// Generate a simple, impossible-to-guess password by just randomly sampling the given alphabet.
///
/// Note that `rand`'s underlying uniform sampler does the right thing to prevent bias: if it can't
/// generate a value that is within the given range (or really, a multiple of the range), it
/// re-samples.
pub fn generate_random_password<R>(
    rng: &mut R,
    alphabet: &[char],
    len: usize,
) -> Result<Secret, PassgenError>
where
    R: Rng + CryptoRng + ?Sized,
{
    if alphabet.is_empty() {
        return Err(PassgenErrorRepr::EmptyAlphabet.into());
    }
    let mut secret = String::with_capacity(len);
    for _ in 0..len {
        let ch = alphabet
            .choose(rng)
            .ok_or(PassgenErrorRepr::EmptyAlphabet)?;
        secret.push(*ch);
    }
    Ok(Secret(secret))
}

/// A password length plus the character classes to draw from.
///
/// The alphabet is computed once, when the generator is built. Changing the length or the
/// selection means building a new generator.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PasswordGenerator {
    length: usize,
    classes: CharClassSet,
    allowed_chars: String,
}

impl PasswordGenerator {
    pub fn new(length: usize, classes: CharClassSet) -> PasswordGenerator {
        PasswordGenerator {
            length,
            classes,
            allowed_chars: classes.alphabet(),
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn classes(&self) -> CharClassSet {
        self.classes
    }

    /// Members of the selected classes, concatenated in canonical class order. Empty iff no class
    /// is selected.
    pub fn allowed_chars(&self) -> &str {
        &self.allowed_chars
    }

    /// Fails with an empty-alphabet error if no class is selected, whatever the length.
    pub fn ensure_can_generate(&self) -> Result<(), PassgenError> {
        if self.allowed_chars.is_empty() {
            return Err(PassgenErrorRepr::EmptyAlphabet.into());
        }
        Ok(())
    }

    /// Generate a password using the thread-local CSPRNG.
    pub fn generate(&self) -> Result<Secret, PassgenError> {
        self.generate_with(&mut rand::thread_rng())
    }

    pub fn generate_with<R>(&self, rng: &mut R) -> Result<Secret, PassgenError>
    where
        R: Rng + CryptoRng + ?Sized,
    {
        self.ensure_can_generate()?;
        let alphabet = self.allowed_chars.chars().collect::<Vec<_>>();
        let secret = generate_random_password(rng, &alphabet, self.length)?;
        tracing::debug!(
            length = self.length,
            alphabet_size = alphabet.len(),
            "generated password"
        );
        Ok(secret)
    }

    /// Entropy of a generated password, in bits. Zero when nothing can be generated.
    pub fn entropy_bits(&self) -> f64 {
        let alphabet_size = self.allowed_chars.chars().count();
        if alphabet_size == 0 {
            return 0.0;
        }
        self.length as f64 * (alphabet_size as f64).log2()
    }
}
