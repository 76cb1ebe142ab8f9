//! Errors raised when reading the contents of `Maybe` and `Either`.

/// Reading a value or error that is not there.
///
/// # Examples
///
/// ```rust
/// use yafl::data::{AccessError, Maybe};
///
/// let empty: Maybe<i32> = Maybe::Nothing;
/// let error = empty.value().unwrap_err();
/// assert_eq!(error, AccessError::Nothing);
/// assert_eq!(error.to_string(), "Maybe holds nothing");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessError {
    /// The value of a `Maybe::Nothing` was requested.
    Nothing,
    /// The value of an `Either::Error` was requested.
    NoValue,
    /// The error of an `Either::Ok` was requested.
    NoError,
}

impl std::fmt::Display for AccessError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            Self::Nothing => "Maybe holds nothing",
            Self::NoValue => "Either holds an error, not a value",
            Self::NoError => "Either holds a value, not an error",
        };
        formatter.write_str(message)
    }
}

impl std::error::Error for AccessError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(AccessError::Nothing, "Maybe holds nothing")]
    #[case(AccessError::NoValue, "Either holds an error, not a value")]
    #[case(AccessError::NoError, "Either holds a value, not an error")]
    fn display_messages(#[case] error: AccessError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    fn usable_as_boxed_error() {
        let boxed: Box<dyn std::error::Error> = Box::new(AccessError::NoValue);
        assert!(boxed.source().is_none());
    }
}
