//! Errors raised by the expectation engine.
//!
//! Except for [`MockError::Unmet`], these reach the code under test wrapped in
//! [`respmock_core::Error::Custom`], exactly where a backend error would appear.
//! Tests can tell them apart with `err.downcast_ref::<MockError>()`.

/// Error produced by the mock rather than scripted by the test.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MockError {
    /// No pending expectation can take the call.
    #[error("call to '{command}' was not expected: no pending expectation matches it")]
    UnexpectedCall {
        /// The call that was made
        command: String,
    },

    /// The next expectation (strict order) names a different command or arguments.
    #[error("call to '{actual}' does not match the next expectation '{expected}': {reason}")]
    Mismatch {
        /// The expectation that was due
        expected: String,
        /// The call that was made
        actual: String,
        /// What differed
        reason: String,
    },

    /// The expectation matched but was never given a value or an error.
    #[error("expectation '{command}' was matched but has no value or error configured")]
    Unconfigured {
        /// The matched expectation
        command: String,
    },

    /// The expectation was registered for a different reply shape than the call returns.
    #[error("expectation '{command}' was declared with reply shape {expected}, but the call returns {actual}")]
    ShapeMismatch {
        /// The matched expectation
        command: String,
        /// Shape the expectation was registered with
        expected: &'static str,
        /// Shape the command method returns
        actual: &'static str,
    },

    /// A regular-expression argument of the expectation does not compile.
    #[error("expectation '{command}' has an invalid argument pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The expectation
        command: String,
        /// The offending pattern
        pattern: String,
        /// Compiler message
        reason: String,
    },

    /// Some expectations were never triggered.
    #[error("there are {} unmet expectations: {}", .pending.len(), .pending.join("; "))]
    Unmet {
        /// Description of every pending expectation, in registration order
        pending: Vec<String>,
    },
}

/// Result type for mock control operations.
pub type Result<T> = std::result::Result<T, MockError>;
