use super::Error;

/// Error when the metadata layer is misused by the programmer.
///
/// This occurs when:
/// - An association is declared with options its kind cannot carry (a
///   `BelongsToMany` without a `through` table)
/// - Two associations on one entity share an alias
/// - Connection options name neither a url nor a driver
///
/// These errors are caught during model initialization, not at declaration
/// time.
#[derive(Debug)]
pub(super) struct ConfigurationError {
    message: Box<str>,
}

impl std::error::Error for ConfigurationError {}

impl core::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid configuration: {}", self.message)
    }
}

impl Error {
    /// Creates a configuration error from a programmer-facing message.
    pub fn configuration(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Configuration(ConfigurationError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a configuration error.
    pub fn is_configuration(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Configuration(_))
    }
}
