/// Result alias that carries the custom [`AudioLevelError`] type.
pub type Result<T> = std::result::Result<T, AudioLevelError>;

/// Common error type for the core crate.
#[derive(Debug, thiserror::Error)]
pub enum AudioLevelError {
    /// The encoded audio buffer was not valid base64. Malformed PCM content
    /// is never an error; the decoder simply consumes whatever bytes are
    /// present.
    #[error("invalid base64 audio buffer: {0}")]
    Decode(#[from] base64::DecodeError),
    /// Wrapper around standard IO errors.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// The capture configuration file could not be parsed.
    #[error("{0}")]
    Config(#[from] serde_json::Error),
    /// Free-form error raised by the application layer.
    #[error("{0}")]
    Message(String),
}

impl AudioLevelError {
    /// Creates a new error that simply wraps the provided message.
    pub fn msg<T: Into<String>>(msg: T) -> Self {
        Self::Message(msg.into())
    }
}

impl From<&str> for AudioLevelError {
    fn from(value: &str) -> Self {
        Self::msg(value)
    }
}

impl From<String> for AudioLevelError {
    fn from(value: String) -> Self {
        Self::Message(value)
    }
}
