use super::Error;

/// Error when connection resolution needs a default connection and none has
/// been registered.
///
/// Surfaces on the first resolve of a binding, not at declaration time.
#[derive(Debug)]
pub(super) struct NoDefaultConnectionError;

impl std::error::Error for NoDefaultConnectionError {}

impl core::fmt::Display for NoDefaultConnectionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("no default connection is registered")
    }
}

impl Error {
    /// Creates a no default connection error.
    pub fn no_default_connection() -> Error {
        Error::from(super::ErrorKind::NoDefaultConnection(
            NoDefaultConnectionError,
        ))
    }

    /// Returns `true` if this error is a no default connection error.
    pub fn is_no_default_connection(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::NoDefaultConnection(_))
    }
}
