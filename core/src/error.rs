//! Client error type.

use std::error::Error as StdError;
use std::sync::Arc;

/// Error returned through [`Reply::result`](crate::Reply::result).
///
/// `Custom` errors are shared behind an `Arc`: cloning an `Error` never creates a
/// new error value, and equality on `Custom` is pointer identity. A caller that
/// compares the error it received with the one it expects therefore learns whether
/// it got *that* error, not merely one with the same message.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// The backend answered with a nil reply (missing key, empty pop, ...)
    #[error("redis: nil")]
    Nil,

    /// Error reply sent by the backend (`ERR ...`, `WRONGTYPE ...`)
    #[error("{0}")]
    Server(String),

    /// Any other error, shared as-is
    #[error("{0}")]
    Custom(Arc<dyn StdError + Send + Sync>),
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wrap an arbitrary error.
    pub fn custom<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(err))
    }

    /// Build a backend error reply.
    pub fn server(message: impl Into<String>) -> Self {
        Self::Server(message.into())
    }

    /// Whether this is the nil reply.
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Borrow the wrapped error as `E`, if this is a `Custom` error of that type.
    #[must_use]
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: StdError + 'static,
    {
        match self {
            Self::Custom(inner) => inner.downcast_ref::<E>(),
            Self::Nil | Self::Server(_) => None,
        }
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Nil, Self::Nil) => true,
            (Self::Server(a), Self::Server(b)) => a == b,
            (Self::Custom(a), Self::Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<Arc<dyn StdError + Send + Sync>> for Error {
    fn from(err: Arc<dyn StdError + Send + Sync>) -> Self {
        Self::Custom(err)
    }
}
