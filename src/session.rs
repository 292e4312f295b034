use std::io::{self, BufRead, Write};
use std::num::IntErrorKind;

use tracing::warn;

use crate::errors::SessionError;
use crate::password::{CharacterClasses, PasswordRequest, generate};

const BANNER: &str = "Welcome to the Password Generator!";
const RULE: &str = "----------------------------------";

const LENGTH_PROMPT: &str = "Enter desired password length (e.g., 12): ";
const LETTERS_PROMPT: &str = "Include letters? (yes/no): ";
const NUMBERS_PROMPT: &str = "Include numbers? (yes/no): ";
const SYMBOLS_PROMPT: &str = "Include symbols? (yes/no): ";

const NOT_A_NUMBER: &str = "Invalid input. Please enter a number.";
const NOT_POSITIVE: &str = "Length must be a positive number. Please try again.";
const TOO_LARGE: &str = "Length is too large. Please try again.";

/// One interactive round: ask for the settings, generate, print.
pub struct Session<R, W> {
    input: R,
    output: W,
    line: String,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            line: String::new(),
        }
    }

    pub fn run(&mut self) -> Result<(), SessionError> {
        writeln!(self.output, "{}", BANNER)?;
        writeln!(self.output, "{}", RULE)?;

        let request = self.read_request()?;

        match generate(&request) {
            Ok(password) => {
                writeln!(self.output)?;
                writeln!(self.output, "Generated Password:  {}", password)?;
            }
            Err(e) => writeln!(self.output, "{}", e.user_message())?,
        }
        self.output.flush()?;

        Ok(())
    }

    pub fn read_request(&mut self) -> Result<PasswordRequest, SessionError> {
        let length = self.read_length()?;
        let classes = CharacterClasses {
            letters: self.read_yes_no(LETTERS_PROMPT)?,
            digits: self.read_yes_no(NUMBERS_PROMPT)?,
            symbols: self.read_yes_no(SYMBOLS_PROMPT)?,
        };

        Ok(PasswordRequest { length, classes })
    }

    fn read_length(&mut self) -> Result<i64, SessionError> {
        loop {
            let answer = self.prompt(LENGTH_PROMPT)?;
            match answer.parse::<i64>() {
                Ok(n) if n > 0 => return Ok(n),
                Ok(_) => writeln!(self.output, "{}", NOT_POSITIVE)?,
                Err(e) => match e.kind() {
                    IntErrorKind::PosOverflow => writeln!(self.output, "{}", TOO_LARGE)?,
                    IntErrorKind::NegOverflow => writeln!(self.output, "{}", NOT_POSITIVE)?,
                    _ => writeln!(self.output, "{}", NOT_A_NUMBER)?,
                },
            }
        }
    }

    fn read_yes_no(&mut self, question: &str) -> Result<bool, SessionError> {
        let answer = self.prompt(question)?;
        Ok(is_yes(answer))
    }

    /// Writes `question` and returns the trimmed reply.
    ///
    /// A line that is not valid UTF-8 is consumed and answered as empty.
    fn prompt(&mut self, question: &str) -> Result<&str, SessionError> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        self.line.clear();
        match self.input.read_line(&mut self.line) {
            Ok(0) => {
                warn!(question, "input closed while waiting for an answer");
                writeln!(self.output)?;
                self.output.flush()?;
                return Err(SessionError::InputClosed);
            }
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                warn!(question, error = %e, "discarding unreadable answer");
                self.line.clear();
            }
            Err(e) => return Err(e.into()),
        }

        Ok(self.line.trim())
    }
}

fn is_yes(answer: &str) -> bool {
    answer.to_lowercase().starts_with('y')
}
