//! The command-invocation interface.
//!
//! [`Cmdable`] is the single seam between command-issuing code and whatever executes
//! commands: a network client writes the [`Command`] to the wire, a test double
//! resolves it against scripted expectations. Each command family is an extension
//! trait with provided methods that build the normalized command and hand it to
//! [`Cmdable::process`]; every family is implemented for every `Cmdable`.
//!
//! Code under test should be generic over `C: Cmdable` so it can run against either.

mod cluster;
mod geo;
mod hashes;
mod keys;
mod lists;
mod pubsub;
mod scripting;
mod server;
mod sets;
mod sorted_sets;
mod streams;
mod strings;

pub use cluster::ClusterCommands;
pub use geo::{GeoCommands, GeoRadiusQuery, GeoSearchLocationQuery};
pub use hashes::HashCommands;
pub use keys::KeyCommands;
pub use lists::ListCommands;
pub use pubsub::PubSubCommands;
pub use scripting::{FunctionListQuery, ScriptingCommands};
pub use server::ServerCommands;
pub use sets::SetCommands;
pub use sorted_sets::SortedSetCommands;
pub use streams::{
    StreamCommands, XAddArgs, XAutoClaimArgs, XPendingExtArgs, XReadArgs, XReadGroupArgs,
};
pub use strings::{LcsQuery, StringCommands};

use crate::command::Command;
use crate::reply::{Reply, ReplyShape};
use std::time::Duration;

/// Executes normalized commands.
///
/// Implementors decide how a command is answered; the reply shape `T` is fixed by
/// the command method that built the command.
pub trait Cmdable {
    /// Execute `cmd` and return its reply.
    ///
    /// Failures are reported inside the returned [`Reply`], never by panicking.
    fn process<T: ReplyShape>(&self, cmd: Command) -> Reply<T>;
}

impl<C: Cmdable + ?Sized> Cmdable for &C {
    fn process<T: ReplyShape>(&self, cmd: Command) -> Reply<T> {
        (**self).process(cmd)
    }
}

/// Whole milliseconds, saturating.
fn millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

/// Timeout argument of blocking commands, in (possibly fractional) seconds.
fn timeout_secs(d: Duration) -> f64 {
    d.as_secs_f64()
}

/// Append `EX seconds`, or `PX milliseconds` when the expiration is not a whole
/// number of seconds.
fn with_expiration(cmd: Command, expiration: Option<Duration>) -> Command {
    match expiration {
        Some(d) if d.subsec_millis() != 0 || d.as_secs() == 0 => cmd.arg("px").arg(millis(d)),
        Some(d) => cmd.arg("ex").arg(d.as_secs()),
        None => cmd,
    }
}

/// Append the optional `MATCH` and `COUNT` clauses of the scan family.
fn with_scan_clauses(cmd: Command, pattern: &str, count: i64) -> Command {
    let cmd = if pattern.is_empty() {
        cmd
    } else {
        cmd.arg("match").arg(pattern)
    };
    if count > 0 { cmd.arg("count").arg(count) } else { cmd }
}
