use super::Error;

/// Error when a connection url cannot be parsed or names an unknown scheme.
#[derive(Debug)]
pub(super) struct InvalidConnectionUrlError {
    url: Box<str>,
    message: Box<str>,
}

impl std::error::Error for InvalidConnectionUrlError {}

impl core::fmt::Display for InvalidConnectionUrlError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid connection url `{}`: {}", self.url, self.message)
    }
}

impl Error {
    /// Creates an invalid connection url error.
    pub fn invalid_connection_url(url: impl Into<String>, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidConnectionUrl(
            InvalidConnectionUrlError {
                url: url.into().into(),
                message: message.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is an invalid connection url error.
    pub fn is_invalid_connection_url(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidConnectionUrl(_))
    }
}
