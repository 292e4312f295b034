const LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// A fixed set of characters that can be switched on for a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterClass {
    Letters,
    Digits,
    Symbols,
}

impl CharacterClass {
    /// Every class, in the order their sets are laid into the pool.
    pub const ALL: [CharacterClass; 3] = [
        CharacterClass::Letters,
        CharacterClass::Digits,
        CharacterClass::Symbols,
    ];

    pub fn charset(self) -> &'static str {
        match self {
            CharacterClass::Letters => LETTERS,
            CharacterClass::Digits => DIGITS,
            CharacterClass::Symbols => SYMBOLS,
        }
    }
}

/// Concatenates the sets of the given classes, in the order they are yielded.
pub fn build_pool<I>(classes: I) -> Vec<char>
where
    I: IntoIterator<Item = CharacterClass>,
{
    let mut pool = Vec::new();
    for class in classes {
        pool.extend(class.charset().chars());
    }

    pool
}
