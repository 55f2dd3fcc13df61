//! Error types for setup generation

/// Result type used throughout the generator
pub type SetupResult<T> = Result<T, SetupError>;

/// Setup generation error type
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    /// A required argument was missing or unusable. Carries the argument name.
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// The provisioning URL could not be turned into a QR symbol
    #[error("QR encoding error: {0}")]
    QrEncoding(String),
    /// The rendered QR symbol could not be written as PNG
    #[error("Image encoding error: {0}")]
    ImageEncoding(String),
}

impl SetupError {
    /// Name of the offending argument, if this is an argument error
    pub fn argument(&self) -> Option<&'static str> {
        match self {
            SetupError::InvalidArgument(name) => Some(name),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = SetupError::InvalidArgument("issuer");
        assert_eq!(err.to_string(), "Invalid argument: issuer");
        assert_eq!(err.argument(), Some("issuer"));

        let err = SetupError::QrEncoding("data too long".to_string());
        assert_eq!(err.argument(), None);
    }
}
