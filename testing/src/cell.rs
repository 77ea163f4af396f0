//! Result cells: the slot each expectation's reply is scripted into.

use crate::error::MockError;
use respmock_core::{Error, ReplyShape};
use std::any::Any;
use std::sync::{Arc, Mutex, MutexGuard};

/// Holds a value, an error, or nothing.
///
/// The last `set_val`/`set_err` wins. A cell that was never configured answers with
/// [`MockError::Unconfigured`].
#[derive(Debug)]
pub struct ResultCell<T> {
    label: String,
    value: Option<T>,
    err: Option<Error>,
}

impl<T: ReplyShape> ResultCell<T> {
    /// Create an empty cell. `label` names the expectation in the unconfigured error.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: None,
            err: None,
        }
    }

    /// Store a value, clearing any error.
    pub fn set_val(&mut self, val: T) {
        self.value = Some(val);
        self.err = None;
    }

    /// Store an error as-is, clearing any value.
    pub fn set_err(&mut self, err: Error) {
        self.err = Some(err);
        self.value = None;
    }

    /// Whether a value or an error has been stored.
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.value.is_some() || self.err.is_some()
    }

    /// Read the scripted outcome.
    ///
    /// # Errors
    ///
    /// Returns the stored error (the same `Error`, not a copy with a new identity),
    /// or [`MockError::Unconfigured`] when nothing was stored.
    pub fn result(&self) -> Result<T, Error> {
        match (&self.err, &self.value) {
            (Some(err), _) => Err(err.clone()),
            (None, Some(val)) => Ok(val.clone()),
            (None, None) => Err(Error::custom(MockError::Unconfigured {
                command: self.label.clone(),
            })),
        }
    }
}

/// A [`ResultCell`] shared between a builder and the registry.
#[derive(Debug)]
pub struct SharedCell<T>(Arc<Mutex<ResultCell<T>>>);

impl<T> Clone for SharedCell<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T: ReplyShape> SharedCell<T> {
    pub(crate) fn new(label: impl Into<String>) -> Self {
        Self(Arc::new(Mutex::new(ResultCell::new(label))))
    }

    #[allow(clippy::expect_used)]
    fn lock(&self) -> MutexGuard<'_, ResultCell<T>> {
        self.0
            .lock()
            .expect("Result cell lock poisoned - indicates a panic in another thread")
    }

    /// Store a value, clearing any error.
    ///
    /// # Panics
    ///
    /// Panics if the cell lock is poisoned (indicates a panic in another thread)
    pub fn set_val(&self, val: T) {
        self.lock().set_val(val);
    }

    /// Store an error as-is, clearing any value.
    ///
    /// # Panics
    ///
    /// Panics if the cell lock is poisoned (indicates a panic in another thread)
    pub fn set_err(&self, err: Error) {
        self.lock().set_err(err);
    }

    /// Whether a value or an error has been stored.
    ///
    /// # Panics
    ///
    /// Panics if the cell lock is poisoned (indicates a panic in another thread)
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.lock().is_configured()
    }

    /// Read the scripted outcome.
    ///
    /// # Errors
    ///
    /// See [`ResultCell::result`].
    ///
    /// # Panics
    ///
    /// Panics if the cell lock is poisoned (indicates a panic in another thread)
    pub fn result(&self) -> Result<T, Error> {
        self.lock().result()
    }

    /// Type-erased handle stored by the registry.
    pub(crate) fn erase(&self) -> Arc<dyn Any + Send + Sync> {
        Arc::clone(&self.0) as Arc<dyn Any + Send + Sync>
    }

    /// Recover a typed cell; `None` when the cell holds another shape.
    pub(crate) fn restore(erased: &Arc<dyn Any + Send + Sync>) -> Option<Self> {
        Arc::clone(erased)
            .downcast::<Mutex<ResultCell<T>>>()
            .ok()
            .map(Self)
    }
}
