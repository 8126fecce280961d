// shared/src/lib.rs

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("transport: {0}")]
    Transport(String),
    #[error("controller returned status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("invalid arguments: {reason}")]
    InvalidArguments { reason: &'static str },
}

impl Error {
    /// True when the controller could not be reached or answered with a
    /// non-success status. Decoding and validation failures are not.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Error::Transport(_) | Error::Status(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

pub mod config;
