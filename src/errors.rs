use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("no character class selected")]
    NoCharacterClassSelected,
    #[error("invalid password length: {0}")]
    InvalidLength(i64),
}

impl GenerationError {
    /// Text shown to the person at the prompt.
    pub fn user_message(&self) -> &'static str {
        match self {
            GenerationError::NoCharacterClassSelected => {
                "Error: Please select at least one character type for your password."
            }
            GenerationError::InvalidLength(_) => {
                "Error: The password length must be a positive number."
            }
        }
    }
}

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("input closed before the session finished")]
    InputClosed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_length() {
        let e = GenerationError::InvalidLength(-5);
        assert_eq!(e.to_string(), "invalid password length: -5");
    }

    #[test]
    fn user_messages() {
        assert_eq!(
            GenerationError::NoCharacterClassSelected.user_message(),
            "Error: Please select at least one character type for your password."
        );
        assert_eq!(
            GenerationError::InvalidLength(0).user_message(),
            "Error: The password length must be a positive number."
        );
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let e = SessionError::from(io);

        assert!(matches!(e, SessionError::Io(_)));
        assert_eq!(e.to_string(), "I/O error: pipe closed");
    }
}
