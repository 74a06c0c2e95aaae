//! Synthetic external id generation.
//!
//! Ids have the fixed shape `__export__.sale_order_<2 letters>_<8 letters>`.
//! The letter supply is a trait so tests can script an exact sequence while
//! production draws uniformly from `a..=z`. Collisions are possible but
//! astronomically unlikely and are not checked against existing records.

use rand::Rng;

use soi_model::{EXTERNAL_ID_PREFIX, ExternalId};

use crate::error::Result;

/// A supply of lowercase ASCII letters.
///
/// Implementations must only yield `a..=z`; anything else makes the
/// generated id fail validation.
pub trait LetterSource {
    fn next_letter(&mut self) -> char;
}

/// Uniform random letters from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomLetters;

impl LetterSource for RandomLetters {
    fn next_letter(&mut self) -> char {
        let offset: u8 = rand::thread_rng().gen_range(0..26);
        (b'a' + offset) as char
    }
}

/// A fixed, cycling letter sequence for deterministic runs.
#[derive(Debug, Clone)]
pub struct ScriptedLetters {
    letters: Vec<char>,
    next: usize,
}

impl ScriptedLetters {
    /// # Panics
    ///
    /// Panics if `letters` is empty.
    pub fn new(letters: &str) -> Self {
        let letters: Vec<char> = letters.chars().collect();
        assert!(!letters.is_empty(), "ScriptedLetters needs at least one letter");
        Self { letters, next: 0 }
    }
}

impl LetterSource for ScriptedLetters {
    fn next_letter(&mut self) -> char {
        let letter = self.letters[self.next % self.letters.len()];
        self.next += 1;
        letter
    }
}

/// Generate a fresh external id from the given letter supply.
///
/// Two calls share no state beyond the supply itself; there is no counter.
pub fn generate_record_id(letters: &mut dyn LetterSource) -> Result<ExternalId> {
    let mut id = String::with_capacity(EXTERNAL_ID_PREFIX.len() + 11);
    id.push_str(EXTERNAL_ID_PREFIX);
    for _ in 0..2 {
        id.push(letters.next_letter());
    }
    id.push('_');
    for _ in 0..8 {
        id.push(letters.next_letter());
    }
    Ok(ExternalId::new(id)?)
}
