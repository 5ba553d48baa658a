//! Error types for the hemerai-collate crate.

/// Error type for all fallible operations in the hemerai-collate crate.
///
/// Rejected combinations are not errors; they are reported through
/// [`CollateResult`](crate::CollateResult).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CollateError {
    /// Returned when the number of combinations exceeds the configured limit.
    #[error("{count} combinations exceed the limit of {limit}")]
    TooManyCombinations {
        /// Number of combinations the input would produce.
        count: usize,
        /// Configured maximum.
        limit: usize,
    },

    /// Returned when the number of combinations does not fit in `usize`.
    #[error("number of combinations overflows usize")]
    CombinationOverflow,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_too_many_combinations() {
        let e = CollateError::TooManyCombinations {
            count: 1000,
            limit: 100,
        };
        assert_eq!(e.to_string(), "1000 combinations exceed the limit of 100");
    }

    #[test]
    fn error_overflow() {
        assert_eq!(
            CollateError::CombinationOverflow.to_string(),
            "number of combinations overflows usize"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CollateError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CollateError>();
    }
}
