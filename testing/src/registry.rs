//! Expectation registry.
//!
//! Holds every expectation in registration order and decides which one a call
//! consumes. Strict expectations are taken head-first while ordering is on;
//! unordered ones (and every expectation once ordering is off) form a pool that is
//! searched in registration order for the first match.

use crate::cell::SharedCell;
use crate::error::{MockError, Result};
use crate::expectation::{Expectation, ExpectationInfo, MatchOptions, MatchOrder};
use respmock_core::{Command, ReplyShape};
use std::sync::{Arc, Mutex, MutexGuard};

/// Ordered collection of expectations.
#[derive(Debug)]
pub struct ExpectationRegistry {
    expectations: Vec<Expectation>,
    in_order: bool,
}

impl Default for ExpectationRegistry {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ExpectationRegistry {
    /// Create an empty registry.
    #[must_use]
    pub const fn new(in_order: bool) -> Self {
        Self {
            expectations: Vec::new(),
            in_order,
        }
    }

    /// Append an expectation and return the cell its reply is scripted into.
    pub(crate) fn register<T: ReplyShape>(
        &mut self,
        command: Command,
        options: &MatchOptions,
    ) -> SharedCell<T> {
        let cell = SharedCell::new(command.to_string());
        self.expectations
            .push(Expectation::new(command, options, &cell));
        cell
    }

    /// Find the expectation a call consumes and count the match.
    ///
    /// Pool candidates registered for another reply shape are passed over, so
    /// a later candidate of the right shape can still take the call.
    ///
    /// # Errors
    ///
    /// - [`MockError::Mismatch`] / [`MockError::InvalidPattern`] when strict ordering
    ///   is on and the head strict expectation rejects the call (the head stays pending)
    /// - [`MockError::InvalidPattern`] when a pool candidate of the same command
    ///   carries a pattern that does not compile and nothing else takes the call
    /// - [`MockError::ShapeMismatch`] when the only expectations taking the call
    ///   were registered for another reply shape (they stay pending)
    /// - [`MockError::UnexpectedCall`] when no pending expectation can take the call
    pub fn resolve<T: ReplyShape>(&mut self, actual: &Command) -> Result<SharedCell<T>> {
        let (pooled, deferred) = self.scan_pool::<T>(actual);
        if let Some(index) = pooled {
            return self.expectations[index].trigger();
        }

        if self.in_order {
            let head = self
                .expectations
                .iter_mut()
                .find(|e| !e.is_consumed() && e.order() == MatchOrder::Strict);
            if let Some(head) = head {
                return match (head.check(actual), deferred) {
                    (Ok(()), _) => head.trigger(),
                    (Err(_), Some(err)) | (Err(err), None) => Err(err),
                };
            }
        }

        Err(deferred.unwrap_or_else(|| MockError::UnexpectedCall {
            command: actual.to_string(),
        }))
    }

    /// First pool expectation that takes `actual` with reply shape `T`, plus the
    /// first failure worth reporting if none does.
    fn scan_pool<T: ReplyShape>(&self, actual: &Command) -> (Option<usize>, Option<MockError>) {
        let mut deferred = None;
        for (index, e) in self.expectations.iter().enumerate() {
            if e.is_consumed() || (self.in_order && e.order() != MatchOrder::Unordered) {
                continue;
            }
            match e.check(actual) {
                Ok(()) if e.holds::<T>() => return (Some(index), None),
                Ok(()) => {
                    deferred.get_or_insert_with(|| e.shape_mismatch::<T>());
                }
                Err(err @ MockError::InvalidPattern { .. }) => {
                    deferred.get_or_insert(err);
                }
                Err(_) => {}
            }
        }
        (None, deferred)
    }

    /// Drop every expectation, triggered or not.
    pub fn clear(&mut self) {
        self.expectations.clear();
    }

    /// Turn strict ordering on or off. Affects subsequent calls only.
    pub fn set_in_order(&mut self, in_order: bool) {
        self.in_order = in_order;
    }

    /// Whether strict ordering is on.
    #[must_use]
    pub const fn in_order(&self) -> bool {
        self.in_order
    }

    /// Expectations that can still be matched, in registration order.
    pub fn pending(&self) -> impl Iterator<Item = &Expectation> {
        self.expectations.iter().filter(|e| !e.is_consumed())
    }

    /// Succeed iff every expectation has been consumed.
    ///
    /// # Errors
    ///
    /// [`MockError::Unmet`] listing every pending expectation, strict or unordered.
    pub fn verify(&self) -> Result<()> {
        let pending: Vec<String> = self.pending().map(Expectation::describe).collect();
        if pending.is_empty() {
            Ok(())
        } else {
            Err(MockError::Unmet { pending })
        }
    }

    /// Snapshot of every expectation, in registration order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<ExpectationInfo> {
        self.expectations.iter().map(Expectation::info).collect()
    }

    /// Number of registered expectations, consumed ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.expectations.len()
    }

    /// Whether nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.expectations.is_empty()
    }
}

/// Registry shared by a client and its handle.
#[derive(Debug, Clone, Default)]
pub(crate) struct SharedRegistry(Arc<Mutex<ExpectationRegistry>>);

impl SharedRegistry {
    pub(crate) fn new(in_order: bool) -> Self {
        Self(Arc::new(Mutex::new(ExpectationRegistry::new(in_order))))
    }

    /// # Panics
    ///
    /// Panics if the registry lock is poisoned (indicates a panic in another thread)
    #[allow(clippy::expect_used)]
    pub(crate) fn lock(&self) -> MutexGuard<'_, ExpectationRegistry> {
        self.0
            .lock()
            .expect("Expectation registry lock poisoned - indicates a panic in another thread")
    }
}
