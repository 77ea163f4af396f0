//! Mock configuration.

/// Settings of a mock created with [`new_mock_with_config`](crate::new_mock_with_config).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockConfig {
    /// Consume strict expectations in registration order
    pub match_in_order: bool,
    /// Treat every expected argument as a regular expression
    pub regexp_by_default: bool,
    /// Emit a tracing event for every dispatched call
    pub log_calls: bool,
}

impl MockConfig {
    /// Create a new configuration builder.
    #[must_use]
    pub const fn builder() -> MockConfigBuilder {
        MockConfigBuilder::new()
    }
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            match_in_order: true,
            regexp_by_default: false,
            log_calls: true,
        }
    }
}

/// Builder for [`MockConfig`].
#[derive(Debug, Clone, Default)]
pub struct MockConfigBuilder {
    match_in_order: Option<bool>,
    regexp_by_default: Option<bool>,
    log_calls: Option<bool>,
}

impl MockConfigBuilder {
    /// Create a new builder with default values.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            match_in_order: None,
            regexp_by_default: None,
            log_calls: None,
        }
    }

    /// Set whether strict expectations are consumed in order.
    #[must_use]
    pub const fn match_in_order(mut self, in_order: bool) -> Self {
        self.match_in_order = Some(in_order);
        self
    }

    /// Set whether expected arguments are patterns by default.
    #[must_use]
    pub const fn regexp_by_default(mut self, regexp: bool) -> Self {
        self.regexp_by_default = Some(regexp);
        self
    }

    /// Set whether calls are logged.
    #[must_use]
    pub const fn log_calls(mut self, log: bool) -> Self {
        self.log_calls = Some(log);
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> MockConfig {
        let default = MockConfig::default();
        MockConfig {
            match_in_order: self.match_in_order.unwrap_or(default.match_in_order),
            regexp_by_default: self
                .regexp_by_default
                .unwrap_or(default.regexp_by_default),
            log_calls: self.log_calls.unwrap_or(default.log_calls),
        }
    }
}
