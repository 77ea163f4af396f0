//! A single registered expectation and how calls are matched against it.

use crate::cell::SharedCell;
use crate::error::MockError;
use regex::Regex;
use respmock_core::{Arg, Command, ReplyShape};
use std::any::{Any, type_name};
use std::fmt;
use std::sync::Arc;

/// Caller-supplied comparison of an expected command with an actual one.
///
/// Receives `(expected, actual)`; returns `Err(reason)` to reject the call.
pub type CustomMatch = Arc<dyn Fn(&Command, &Command) -> Result<(), String> + Send + Sync>;

/// Where an expectation sits with respect to the strict sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchOrder {
    /// Consumed in registration order while strict ordering is on
    #[default]
    Strict,
    /// May be consumed at any point, regardless of strict ordering
    Unordered,
}

/// Options applied to the next registrations of a handle.
#[derive(Clone)]
pub(crate) struct MatchOptions {
    pub(crate) regexp: bool,
    pub(crate) order: MatchOrder,
    pub(crate) times: usize,
    pub(crate) custom: Option<CustomMatch>,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            regexp: false,
            order: MatchOrder::Strict,
            times: 1,
            custom: None,
        }
    }
}

impl fmt::Debug for MatchOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchOptions")
            .field("regexp", &self.regexp)
            .field("order", &self.order)
            .field("times", &self.times)
            .field("custom", &self.custom.is_some())
            .finish()
    }
}

/// How one expected argument is compared.
#[derive(Debug)]
enum ArgMatcher {
    Exact(Arg),
    Pattern(Regex),
    Invalid { pattern: String, reason: String },
}

impl ArgMatcher {
    fn compile(arg: &Arg) -> Self {
        let pattern = arg.to_str_lossy();
        match Regex::new(&pattern) {
            Ok(re) => Self::Pattern(re),
            Err(e) => Self::Invalid {
                pattern: pattern.into_owned(),
                reason: e.to_string(),
            },
        }
    }
}

/// A registered expectation.
pub struct Expectation {
    command: Command,
    matchers: Vec<ArgMatcher>,
    custom: Option<CustomMatch>,
    cell: Arc<dyn Any + Send + Sync>,
    shape: &'static str,
    order: MatchOrder,
    times: usize,
    triggered: usize,
}

impl Expectation {
    pub(crate) fn new<T: ReplyShape>(
        command: Command,
        options: &MatchOptions,
        cell: &SharedCell<T>,
    ) -> Self {
        let matchers = command
            .arguments()
            .iter()
            .map(|arg| {
                if options.regexp {
                    ArgMatcher::compile(arg)
                } else {
                    ArgMatcher::Exact(arg.clone())
                }
            })
            .collect();
        Self {
            command,
            matchers,
            custom: options.custom.clone(),
            cell: cell.erase(),
            shape: type_name::<T>(),
            order: options.order,
            times: options.times.max(1),
            triggered: 0,
        }
    }

    /// The expected command.
    #[must_use]
    pub const fn command(&self) -> &Command {
        &self.command
    }

    /// Ordering tag.
    #[must_use]
    pub const fn order(&self) -> MatchOrder {
        self.order
    }

    /// Whether the expectation has been matched as many times as it allows.
    #[must_use]
    pub const fn is_consumed(&self) -> bool {
        self.triggered >= self.times
    }

    /// Compare a call against this expectation.
    ///
    /// # Errors
    ///
    /// [`MockError::Mismatch`] naming the first difference, or
    /// [`MockError::InvalidPattern`] when a pattern argument does not compile.
    pub fn check(&self, actual: &Command) -> Result<(), MockError> {
        let mismatch = |reason: String| MockError::Mismatch {
            expected: self.command.to_string(),
            actual: actual.to_string(),
            reason,
        };

        if self.command.name() != actual.name() {
            return Err(mismatch(format!(
                "command name '{}' differs from expected '{}'",
                actual.name(),
                self.command.name()
            )));
        }

        if let Some(custom) = &self.custom {
            return custom(&self.command, actual).map_err(mismatch);
        }

        let args = actual.arguments();
        if args.len() != self.matchers.len() {
            return Err(mismatch(format!(
                "expected {} arguments, got {}",
                self.matchers.len(),
                args.len()
            )));
        }

        for (i, (matcher, arg)) in self.matchers.iter().zip(args).enumerate() {
            match matcher {
                ArgMatcher::Exact(expected) if expected == arg => {}
                ArgMatcher::Exact(expected) => {
                    return Err(mismatch(format!(
                        "argument {i} is '{arg}', expected '{expected}'"
                    )));
                }
                ArgMatcher::Pattern(re) if re.is_match(&arg.to_str_lossy()) => {}
                ArgMatcher::Pattern(re) => {
                    return Err(mismatch(format!(
                        "argument {i} '{arg}' does not match pattern '{}'",
                        re.as_str()
                    )));
                }
                ArgMatcher::Invalid { pattern, reason } => {
                    return Err(MockError::InvalidPattern {
                        command: self.command.to_string(),
                        pattern: pattern.clone(),
                        reason: reason.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Count one match and hand out the typed cell.
    ///
    /// The expectation is left untouched when it was registered for another shape.
    pub(crate) fn trigger<T: ReplyShape>(&mut self) -> Result<SharedCell<T>, MockError> {
        let cell = SharedCell::<T>::restore(&self.cell).ok_or_else(|| self.shape_mismatch::<T>())?;
        self.triggered += 1;
        Ok(cell)
    }

    /// Whether the expectation was registered for reply shape `T`.
    pub(crate) fn holds<T: ReplyShape>(&self) -> bool {
        SharedCell::<T>::restore(&self.cell).is_some()
    }

    pub(crate) fn shape_mismatch<T: ReplyShape>(&self) -> MockError {
        MockError::ShapeMismatch {
            command: self.command.to_string(),
            expected: self.shape,
            actual: type_name::<T>(),
        }
    }

    /// Human-readable description used in unmet reports.
    pub(crate) fn describe(&self) -> String {
        if self.times == 1 {
            self.command.to_string()
        } else {
            format!(
                "{} (matched {} of {} times)",
                self.command, self.triggered, self.times
            )
        }
    }

    pub(crate) fn info(&self) -> ExpectationInfo {
        ExpectationInfo {
            command: self.command.to_string(),
            shape: self.shape,
            order: self.order,
            times: self.times,
            triggered: self.triggered,
        }
    }
}

impl fmt::Debug for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Expectation")
            .field("command", &self.command.to_string())
            .field("shape", &self.shape)
            .field("order", &self.order)
            .field("times", &self.times)
            .field("triggered", &self.triggered)
            .finish_non_exhaustive()
    }
}

/// Read-only snapshot of an expectation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectationInfo {
    /// The expected command, as text
    pub command: String,
    /// Type name of the reply shape
    pub shape: &'static str,
    /// Ordering tag
    pub order: MatchOrder,
    /// How many matches the expectation allows
    pub times: usize,
    /// How many matches it has taken
    pub triggered: usize,
}

impl ExpectationInfo {
    /// Whether the expectation has no matches left.
    #[must_use]
    pub const fn is_consumed(&self) -> bool {
        self.triggered >= self.times
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Test code: failures should panic
mod tests {
    use super::*;

    fn expectation(command: Command, options: &MatchOptions) -> Expectation {
        let cell: SharedCell<String> = SharedCell::new(command.to_string());
        Expectation::new(command, options, &cell)
    }

    #[test]
    fn test_exact_match() {
        let exp = expectation(Command::new("get").arg("key"), &MatchOptions::default());
        assert!(exp.check(&Command::new("get").arg("key")).is_ok());

        let err = exp.check(&Command::new("get").arg("other")).unwrap_err();
        assert!(matches!(err, MockError::Mismatch { ref reason, .. } if reason.contains("argument 0")));
    }

    #[test]
    fn test_name_and_arity_must_match() {
        let exp = expectation(Command::new("get").arg("key"), &MatchOptions::default());
        assert!(exp.check(&Command::new("set").arg("key")).is_err());
        assert!(exp.check(&Command::new("get").arg("key").arg("x")).is_err());
    }

    #[test]
    fn test_regexp_is_unanchored() {
        let options = MatchOptions {
            regexp: true,
            ..MatchOptions::default()
        };
        let exp = expectation(Command::new("get").arg("user:[0-9]+"), &options);
        assert!(exp.check(&Command::new("get").arg("user:42")).is_ok());
        assert!(exp.check(&Command::new("get").arg("cache:user:42:name")).is_ok());
        assert!(exp.check(&Command::new("get").arg("user:x")).is_err());
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let options = MatchOptions {
            regexp: true,
            ..MatchOptions::default()
        };
        let exp = expectation(Command::new("get").arg("user:("), &options);
        let err = exp.check(&Command::new("get").arg("user:1")).unwrap_err();
        assert!(matches!(err, MockError::InvalidPattern { ref pattern, .. } if pattern == "user:("));
    }

    #[test]
    fn test_custom_match_replaces_argument_comparison() {
        let options = MatchOptions {
            custom: Some(Arc::new(|_expected: &Command, actual: &Command| {
                if actual.arguments().len() == 2 {
                    Ok(())
                } else {
                    Err("want two arguments".to_string())
                }
            })),
            ..MatchOptions::default()
        };
        let exp = expectation(Command::new("set").arg("k").arg("v"), &options);
        assert!(exp.check(&Command::new("set").arg("a").arg("b")).is_ok());
        let err = exp.check(&Command::new("set").arg("a")).unwrap_err();
        assert!(matches!(err, MockError::Mismatch { ref reason, .. } if reason == "want two arguments"));
    }

    #[test]
    fn test_trigger_counts_and_checks_shape() {
        let mut exp = expectation(Command::new("get").arg("k"), &MatchOptions::default());
        assert!(matches!(
            exp.trigger::<i64>(),
            Err(MockError::ShapeMismatch { .. })
        ));
        assert!(!exp.is_consumed());
        assert!(!exp.holds::<i64>());
        assert!(exp.holds::<String>());
        assert!(exp.trigger::<String>().is_ok());
        assert!(exp.is_consumed());
    }
}
