use std::io;
use std::result;

pub type Result<T> = result::Result<T, SobolError>;

#[derive(Debug, Fail)]
pub enum SobolError {
    #[fail(display = "Failed to read direction number table: {}", _0)]
    Io(#[cause] io::Error),
    #[fail(display = "Malformed direction number table at line {}: {}", line, reason)]
    Format { line: usize, reason: String },
    #[fail(display = "Dimension {} not in table ({} dimensions loaded)", dimension, available)]
    Dimension { dimension: usize, available: usize },
    #[fail(display = "Index {} needs more than the matrix's {} columns", index, columns)]
    IndexOutOfRange { index: u64, columns: usize },
    #[fail(display = "Invalid parameter: {}", _0)]
    Parameter(String),
}

impl From<io::Error> for SobolError {
    fn from(e: io::Error) -> SobolError {
        SobolError::Io(e)
    }
}

impl SobolError {
    pub(crate) fn format<S: Into<String>>(line: usize, reason: S) -> SobolError {
        SobolError::Format {
            line,
            reason: reason.into(),
        }
    }
}
