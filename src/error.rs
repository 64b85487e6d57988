//! Error type shared by every breed lookup.

/// The single failure of a breed lookup.
///
/// Remote "error" responses, malformed bodies, transport failures and invalid
/// input all collapse into this one kind. Callers cannot tell a genuine 404
/// apart from a network error, and are not supposed to.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Breed not found: {reason}")]
pub struct BreedNotFound {
    reason: String,
}

impl BreedNotFound {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Human-readable cause reported by the provider.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Result type for breed lookups.
pub type LookupResult<T> = Result<T, BreedNotFound>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_reason() {
        let err = BreedNotFound::new("Invalid breed name: ");
        assert_eq!(err.to_string(), "Breed not found: Invalid breed name: ");
        assert_eq!(err.reason(), "Invalid breed name: ");
    }
}
