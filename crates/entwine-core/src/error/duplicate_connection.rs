use super::Error;

/// Error when a connection name is registered twice.
///
/// The first registration always wins; the connection that was already
/// registered under the name stays retrievable.
#[derive(Debug)]
pub(super) struct DuplicateConnectionError {
    name: Box<str>,
}

impl std::error::Error for DuplicateConnectionError {}

impl core::fmt::Display for DuplicateConnectionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "connection `{}` is already registered", self.name)
    }
}

impl Error {
    /// Creates a duplicate connection error naming the colliding registration.
    pub fn duplicate_connection(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::DuplicateConnection(
            DuplicateConnectionError {
                name: name.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is a duplicate connection error.
    pub fn is_duplicate_connection(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::DuplicateConnection(_))
    }
}
