//! The mock control handle.
//!
//! Expectations are registered with the `expect_*` methods (one per client command,
//! defined in the [`expect`](crate::expect) modules), which build the expected
//! command exactly the way the client method does and return a typed builder for
//! the reply.

use crate::error;
use crate::expectation::{ExpectationInfo, MatchOptions, MatchOrder};
use crate::expected::{ExpectedCmd, ExpectedReply};
use crate::registry::SharedRegistry;
use respmock_core::commands::ScriptingCommands;
use respmock_core::{Arg, Cmdable, Command, Reply, ReplyShape};
use std::any::type_name;
use std::sync::Arc;

/// Records the command a client method builds instead of executing it.
///
/// Every reply it returns is empty; only [`Reply::into_command`] is of interest.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandRecorder;

impl Cmdable for CommandRecorder {
    fn process<T: ReplyShape>(&self, cmd: Command) -> Reply<T> {
        Reply::new(cmd)
    }
}

/// Registers and verifies the expectations of one mock client.
///
/// The modifier methods ([`regexp`](Self::regexp), [`unordered`](Self::unordered),
/// [`times`](Self::times), [`custom_match`](Self::custom_match)) return a handle
/// whose registrations carry the modifier; the original handle is unaffected.
///
/// ```
/// use respmock_core::prelude::*;
/// use respmock_testing::new_mock;
///
/// let (client, mock) = new_mock();
/// mock.regexp().expect_get("user:[0-9]+").set_val("ada");
///
/// assert_eq!(client.get("user:42").result().unwrap(), "ada");
/// assert!(mock.expectations_were_met().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct MockHandle {
    registry: SharedRegistry,
    options: MatchOptions,
    log_calls: bool,
}

impl MockHandle {
    pub(crate) fn new(registry: SharedRegistry, regexp: bool, log_calls: bool) -> Self {
        Self {
            registry,
            options: MatchOptions {
                regexp,
                ..MatchOptions::default()
            },
            log_calls,
        }
    }

    /// Register an expectation for the command built by `call`.
    ///
    /// `call` receives a [`CommandRecorder`]; invoke the client method you expect:
    ///
    /// ```
    /// use respmock_core::prelude::*;
    /// use respmock_testing::{ExpectedInt, new_mock};
    ///
    /// let (client, mock) = new_mock();
    /// let expected: ExpectedInt = mock.expect(|c| c.del(&["a", "b"]));
    /// expected.set_val(2);
    ///
    /// assert_eq!(client.del(&["a", "b"]).result().unwrap(), 2);
    /// ```
    pub fn expect<B, F>(&self, call: F) -> B
    where
        B: ExpectedReply,
        F: FnOnce(&CommandRecorder) -> Reply<B::Shape>,
    {
        self.expect_command(call(&CommandRecorder).into_command())
    }

    /// Register an expectation for an already-built command.
    pub fn expect_command<B: ExpectedReply>(&self, command: Command) -> B {
        if self.log_calls {
            tracing::debug!(
                command = %command,
                shape = type_name::<B::Shape>(),
                "Registered expectation"
            );
        }
        let cell = self
            .registry
            .lock()
            .register::<B::Shape>(command, &self.options);
        B::from_cell(cell)
    }

    /// Expect a raw command; `args[0]` is the command name.
    pub fn expect_do(&self, args: &[Arg]) -> ExpectedCmd {
        self.expect(|c| c.do_command(args))
    }

    /// Remove every expectation, triggered or not.
    ///
    /// Strict ordering and the handle's modifiers are kept.
    pub fn clear_expect(&self) {
        self.registry.lock().clear();
        if self.log_calls {
            tracing::info!("Cleared all expectations");
        }
    }

    /// Check that every expectation has been consumed.
    ///
    /// # Errors
    ///
    /// [`MockError::Unmet`](crate::MockError::Unmet) listing every pending expectation.
    pub fn expectations_were_met(&self) -> error::Result<()> {
        self.registry.lock().verify()
    }

    /// Turn strict ordering on or off for subsequent calls.
    pub fn match_expectations_in_order(&self, in_order: bool) {
        self.registry.lock().set_in_order(in_order);
    }

    /// Snapshot of every registered expectation, in registration order.
    #[must_use]
    pub fn expectations(&self) -> Vec<ExpectationInfo> {
        self.registry.lock().snapshot()
    }

    /// Handle whose registrations treat expected arguments as regular expressions.
    ///
    /// Patterns are unanchored and matched against the UTF-8 form of each argument;
    /// a pattern that does not compile fails the call with
    /// [`MockError::InvalidPattern`](crate::MockError::InvalidPattern).
    #[must_use]
    pub fn regexp(&self) -> Self {
        let mut handle = self.clone();
        handle.options.regexp = true;
        handle
    }

    /// Handle whose registrations may be matched at any point, ahead of the strict
    /// sequence.
    #[must_use]
    pub fn unordered(&self) -> Self {
        let mut handle = self.clone();
        handle.options.order = MatchOrder::Unordered;
        handle
    }

    /// Handle whose registrations can be matched `n` times (at least once).
    #[must_use]
    pub fn times(&self, n: usize) -> Self {
        let mut handle = self.clone();
        handle.options.times = n.max(1);
        handle
    }

    /// Handle whose registrations compare arguments with `matcher` instead of
    /// equality. The command name must still match.
    #[must_use]
    pub fn custom_match<F>(&self, matcher: F) -> Self
    where
        F: Fn(&Command, &Command) -> Result<(), String> + Send + Sync + 'static,
    {
        let mut handle = self.clone();
        handle.options.custom = Some(Arc::new(matcher));
        handle
    }
}
