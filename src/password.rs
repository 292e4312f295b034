use crate::errors::GenerationError;
use crate::generators::{CharacterClass, build_pool};

use rand::Rng;
use tracing::debug;

/// Which character classes feed the pool. Every flag is stated by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterClasses {
    pub letters: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl CharacterClasses {
    pub fn is_enabled(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Letters => self.letters,
            CharacterClass::Digits => self.digits,
            CharacterClass::Symbols => self.symbols,
        }
    }

    /// Enabled classes in pool order.
    pub fn enabled(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL
            .into_iter()
            .filter(|class| self.is_enabled(*class))
    }

    pub fn none(&self) -> bool {
        !(self.letters || self.digits || self.symbols)
    }

    pub fn pool(&self) -> Vec<char> {
        build_pool(self.enabled())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordRequest {
    pub length: i64,
    pub classes: CharacterClasses,
}

/// Generates a password using the thread-local random generator.
///
/// The generator is fine for convenience passwords but no claim of
/// cryptographic unpredictability is made for the output.
pub fn generate(request: &PasswordRequest) -> Result<String, GenerationError> {
    generate_with(request, &mut rand::rng())
}

/// Generates a password drawing from `rng`.
///
/// Every position is picked independently and uniformly from the pool, with
/// replacement. An empty selection is rejected before the length is looked at.
pub fn generate_with<R>(request: &PasswordRequest, rng: &mut R) -> Result<String, GenerationError>
where
    R: Rng + ?Sized,
{
    if request.classes.none() {
        return Err(GenerationError::NoCharacterClassSelected);
    }

    let length = match usize::try_from(request.length) {
        Ok(n) if n > 0 => n,
        _ => return Err(GenerationError::InvalidLength(request.length)),
    };

    let pool = request.classes.pool();
    debug!(pool_size = pool.len(), length, "generating password");

    let password = (0..length)
        .map(|_| pool[rng.random_range(0..pool.len())])
        .collect();

    Ok(password)
}
