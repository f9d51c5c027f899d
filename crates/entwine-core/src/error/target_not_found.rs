use super::Error;

/// Error when an association targets a model name with no initialized model
/// in the same connection.
///
/// Associations are always resolved within the scope of a single connection;
/// a model initialized on another connection does not satisfy the lookup.
#[derive(Debug)]
pub(super) struct TargetNotFoundError {
    model: Box<str>,
}

impl std::error::Error for TargetNotFoundError {}

impl core::fmt::Display for TargetNotFoundError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "target model `{}` is not found in the current connection",
            self.model
        )
    }
}

impl Error {
    /// Creates a target not found error naming the missing model.
    pub fn target_not_found(model: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::TargetNotFound(TargetNotFoundError {
            model: model.into().into(),
        }))
    }

    /// Returns `true` if this error is a target not found error.
    pub fn is_target_not_found(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::TargetNotFound(_))
    }
}
