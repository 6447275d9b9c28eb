/// Failure channel of a [`Deferred`](crate::Deferred) value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OperationError {
    /// The legacy operation reported its error tag. Displays the message verbatim.
    #[error("{message}")]
    OperationFailed { message: String },
    /// The legacy operation dropped its completion handler without calling it.
    #[error("legacy operation dropped its completion handler without reporting")]
    Abandoned,
}

impl OperationError {
    /// Failure reason as reported to the caller.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::OperationFailed { message } => message.clone(),
            Self::Abandoned => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_failed_displays_message_verbatim() {
        let err = OperationError::OperationFailed {
            message: "disk is full".to_string(),
        };
        assert_eq!(err.to_string(), "disk is full");
        assert_eq!(err.message(), "disk is full");
    }

    #[test]
    fn abandoned_has_descriptive_message() {
        assert!(OperationError::Abandoned.message().contains("completion handler"));
    }
}
