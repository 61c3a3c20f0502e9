use std::error;
use std::fmt;

// type alias for Result for use across the library
pub type Result<T> = std::result::Result<T, Error>;

/// Failure while splitting raw path text into tokens.
///
/// `index` is the character offset into the raw input.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenizeError {
    UnexpectedChar { ch: char, index: usize },
    MalformedNumber { text: String, index: usize },
}

impl fmt::Display for TokenizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenizeError::UnexpectedChar { ch, index } => {
                write!(f, "unexpected character '{ch}' at index {index}")
            }
            TokenizeError::MalformedNumber { text, index } => {
                write!(f, "malformed number '{text}' at index {index}")
            }
        }
    }
}

/// What the interpreter found where an operand was required.
#[derive(Debug, Clone, PartialEq)]
pub enum Found {
    End,
    Command { letter: char, index: usize },
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::End => write!(f, "reached end of path data"),
            Found::Command { letter, index } => {
                write!(f, "found command '{letter}' at index {index}")
            }
        }
    }
}

/// Failure while executing a token sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum InterpretError {
    /// No tokens at all
    Empty,
    /// A number appeared where a command letter was required
    ExpectedCommand { value: f64, index: usize },
    /// A command ran out of operands before its arity was satisfied
    MissingOperand {
        command: char,
        operand: &'static str,
        position: usize,
        arity: usize,
        found: Found,
    },
}

impl fmt::Display for InterpretError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterpretError::Empty => write!(f, "path data contains no commands"),
            InterpretError::ExpectedCommand { value, index } => {
                write!(
                    f,
                    "expected a command letter at index {index} but found number {value}"
                )
            }
            InterpretError::MissingOperand {
                command,
                operand,
                position,
                arity,
                found,
            } => write!(
                f,
                "command '{command}' is missing operand '{operand}' ({position} of {arity}): {found}"
            ),
        }
    }
}

#[derive(Debug)]
pub enum Error {
    Tokenize(TokenizeError),
    Interpret(InterpretError),
    /// Fewer than three points after flattening; holds the count found
    Polygon(usize),
    /// Coordinates whose extent can't be represented
    Geometry(String),
    Validation(String),
    InvalidValue(String, String),
    Document(String),
    Cli(String),
    Io(std::io::Error),
    Other(Box<dyn error::Error + Send + Sync>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Tokenize(e) => write!(f, "Tokenize error: {e}"),
            Error::Interpret(e) => write!(f, "Interpret error: {e}"),
            Error::Polygon(count) => write!(
                f,
                "Polygon error: insufficient points (found {count}, need at least 3)"
            ),
            Error::Geometry(reason) => write!(f, "Geometry error: {reason}"),
            Error::Validation(reason) => write!(f, "Validation error: {reason}"),
            Error::InvalidValue(what, value) => write!(f, "Invalid {what}: '{value}'"),
            Error::Document(reason) => write!(f, "Document error: {reason}"),
            Error::Cli(reason) => write!(f, "{reason}"),
            Error::Io(source) => write!(f, "IO error: {source}"),
            Error::Other(source) => write!(f, "{source}"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Io(source) => Some(source),
            Error::Other(source) => Some(&**source),
            _ => None,
        }
    }
}

impl Error {
    pub fn from_err<T>(err: T) -> Error
    where
        T: error::Error + Send + Sync + 'static,
    {
        Error::Other(Box::new(err))
    }
}

impl From<TokenizeError> for Error {
    fn from(err: TokenizeError) -> Error {
        Error::Tokenize(err)
    }
}

impl From<InterpretError> for Error {
    fn from(err: InterpretError) -> Error {
        Error::Interpret(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::Io(err)
    }
}
