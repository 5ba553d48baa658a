//! Error types for the hemerai-equation crate.

/// Error type for all fallible operations in the hemerai-equation crate.
///
/// An equation list with no entries is a valid answer, not an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EquationError {
    /// Calendar error.
    #[error(transparent)]
    Calendar(#[from] hemerai_calendar::CalendarError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use hemerai_calendar::CalendarError;

    #[test]
    fn calendar_error_is_transparent() {
        let err = EquationError::from(CalendarError::AutoWithoutYear);
        assert_eq!(err.to_string(), "prytany type AUTO requires a year");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<EquationError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<EquationError>();
    }
}
