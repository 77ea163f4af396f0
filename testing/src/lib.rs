//! # respmock testing
//!
//! A deterministic test double for the respmock client interface.
//!
//! [`new_mock`] returns a [`MockClient`], which implements
//! [`Cmdable`](respmock_core::Cmdable) and can be handed to code under test, and a
//! [`MockHandle`] that scripts what each call returns. The client does no I/O: every
//! call is matched against the registered expectations and answered with the
//! scripted value or error.
//!
//! This crate provides:
//! - [`MockClient`]: the client, `Clone + Send + Sync`
//! - [`MockHandle`]: `expect_*` registration for every command, ordering and
//!   matching modifiers, verification
//! - Typed reply builders ([`ExpectedString`], [`ExpectedScan`], ...)
//! - [`MockError`]: errors raised by the mock itself
//! - [`MockConfig`]: mock-wide settings
//! - [`helpers`]: tracing setup for tests
//!
//! ## Example
//!
//! ```
//! use respmock_core::prelude::*;
//! use respmock_testing::new_mock;
//!
//! fn greeting<C: Cmdable>(client: &C, user: &str) -> Result<String> {
//!     match client.get(&format!("greeting:{user}")).result() {
//!         Ok(text) => Ok(text),
//!         Err(Error::Nil) => Ok(String::from("hello")),
//!         Err(e) => Err(e),
//!     }
//! }
//!
//! let (client, mock) = new_mock();
//! mock.expect_get("greeting:ada").set_val("welcome back");
//! mock.expect_get("greeting:bob").redis_nil();
//!
//! assert_eq!(greeting(&client, "ada").unwrap(), "welcome back");
//! assert_eq!(greeting(&client, "bob").unwrap(), "hello");
//! assert!(mock.expectations_were_met().is_ok());
//! ```
//!
//! ## Matching
//!
//! By default expectations are consumed once each, strictly in registration order,
//! and compared argument by argument. See [`MockHandle::regexp`],
//! [`MockHandle::unordered`], [`MockHandle::times`], [`MockHandle::custom_match`]
//! and [`MockHandle::match_expectations_in_order`].

pub mod cell;
pub mod client;
pub mod config;
pub mod error;
mod expect;
pub mod expectation;
pub mod expected;
pub mod handle;
pub mod helpers;
pub mod registry;

pub use client::MockClient;
pub use config::{MockConfig, MockConfigBuilder};
pub use error::MockError;
pub use expectation::{CustomMatch, ExpectationInfo, MatchOrder};
pub use expected::*;
pub use handle::{CommandRecorder, MockHandle};

use registry::SharedRegistry;

/// Create a mock client and its handle with the default [`MockConfig`].
#[must_use]
pub fn new_mock() -> (MockClient, MockHandle) {
    new_mock_with_config(MockConfig::default())
}

/// Create a mock client and its handle.
#[must_use]
pub fn new_mock_with_config(config: MockConfig) -> (MockClient, MockHandle) {
    let registry = SharedRegistry::new(config.match_in_order);
    let client = MockClient::new(registry.clone(), config.log_calls);
    let handle = MockHandle::new(registry, config.regexp_by_default, config.log_calls);
    (client, handle)
}
