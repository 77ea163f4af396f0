//! Reply objects.
//!
//! Every command returns a [`Reply<T>`] carrying the command that produced it and
//! either a value of shape `T` or an [`Error`]. The aliases at the bottom of this
//! module name the reply of each command family (`StringCmd`, `ZSliceCmd`, ...).

use crate::command::{Arg, Command};
use crate::error::{Error, Result};
use crate::types::{
    ClusterLink, ClusterShard, ClusterSlot, GeoLocation, GeoPos, KeyFlags, KeyValue, LcsMatch,
    Library, SlowLog, XInfoConsumer, XInfoGroup, XInfoStream, XInfoStreamFull, XMessage,
    XPending, XPendingExt, XStream, Z, ZWithKey,
};
use crate::value::Value;
use chrono::{DateTime, Duration, Utc};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::{BuildHasher, Hash};

/// A type that can be carried as a command reply.
///
/// `zero()` is the shape's natural empty form, returned alongside every error:
/// an empty (unallocated) `Vec` or map, `None` for optional records, `""`, `0`,
/// `false`, a zero duration and the Unix epoch for time values.
///
/// The epoch stands in for the "zero moment" of clients whose time type starts at
/// year 1; it is what `DateTime::<Utc>::default()` yields, so an unset time is
/// told apart with `timestamp() == 0`.
pub trait ReplyShape: Clone + fmt::Debug + Send + Sync + 'static {
    /// The empty form of this shape.
    fn zero() -> Self;
}

macro_rules! reply_shape_default {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ReplyShape for $ty {
                fn zero() -> Self {
                    <$ty>::default()
                }
            }
        )*
    };
}

reply_shape_default!(String, i64, u64, bool, f64, Value, DateTime<Utc>);

impl ReplyShape for Duration {
    fn zero() -> Self {
        Duration::milliseconds(0)
    }
}

impl<T> ReplyShape for Vec<T>
where
    T: Clone + fmt::Debug + Send + Sync + 'static,
{
    fn zero() -> Self {
        Self::new()
    }
}

impl<T> ReplyShape for Option<T>
where
    T: Clone + fmt::Debug + Send + Sync + 'static,
{
    fn zero() -> Self {
        None
    }
}

impl<K, V, S> ReplyShape for HashMap<K, V, S>
where
    K: Clone + fmt::Debug + Eq + Hash + Send + Sync + 'static,
    V: Clone + fmt::Debug + Send + Sync + 'static,
    S: BuildHasher + Default + Clone + Send + Sync + 'static,
{
    fn zero() -> Self {
        Self::default()
    }
}

impl<T, S> ReplyShape for HashSet<T, S>
where
    T: Clone + fmt::Debug + Eq + Hash + Send + Sync + 'static,
    S: BuildHasher + Default + Clone + Send + Sync + 'static,
{
    fn zero() -> Self {
        Self::default()
    }
}

impl<A, B> ReplyShape for (A, B)
where
    A: ReplyShape,
    B: ReplyShape,
{
    fn zero() -> Self {
        (A::zero(), B::zero())
    }
}

/// The reply of one command.
///
/// Holds either a value or an error. Whenever an error is held, [`val`](Self::val)
/// is the shape's [`zero`](ReplyShape::zero) form.
#[derive(Debug, Clone)]
pub struct Reply<T> {
    command: Command,
    val: T,
    err: Option<Error>,
}

impl<T: ReplyShape> Reply<T> {
    /// Create an empty reply for `command`.
    #[must_use]
    pub fn new(command: Command) -> Self {
        Self {
            command,
            val: T::zero(),
            err: None,
        }
    }

    /// Store a value and clear any error.
    pub fn set_val(&mut self, val: T) {
        self.val = val;
        self.err = None;
    }

    /// Store an error and reset the value to its zero form.
    pub fn set_err(&mut self, err: Error) {
        self.val = T::zero();
        self.err = Some(err);
    }

    /// The value (zero form when an error is held).
    #[must_use]
    pub const fn val(&self) -> &T {
        &self.val
    }

    /// The error, if any.
    #[must_use]
    pub const fn err(&self) -> Option<&Error> {
        self.err.as_ref()
    }

    /// Consume the reply, yielding the value or the error.
    ///
    /// # Errors
    ///
    /// Returns the error stored in the reply: a backend error, [`Error::Nil`], or
    /// whatever the client (or test double) put there.
    pub fn result(self) -> Result<T> {
        match self.err {
            Some(err) => Err(err),
            None => Ok(self.val),
        }
    }

    /// The command this reply belongs to.
    #[must_use]
    pub const fn command(&self) -> &Command {
        &self.command
    }

    /// The lower-case command name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.command.name()
    }

    /// The command arguments.
    #[must_use]
    pub fn args(&self) -> &[Arg] {
        self.command.arguments()
    }

    /// Discard the outcome and keep the command.
    #[must_use]
    pub fn into_command(self) -> Command {
        self.command
    }
}

impl<T: ReplyShape + fmt::Display> fmt::Display for Reply<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.err {
            Some(err) => write!(f, "{}: {err}", self.command),
            None => write!(f, "{}: {}", self.command, self.val),
        }
    }
}

/// Dynamically typed reply (`EVAL`, `FCALL`, raw commands).
pub type Cmd = Reply<Value>;
/// Bulk string reply.
pub type StringCmd = Reply<String>;
/// Status reply (`OK`, `PONG`, type names).
pub type StatusCmd = Reply<String>;
/// Integer reply.
pub type IntCmd = Reply<i64>;
/// Integer reply interpreted as a boolean.
pub type BoolCmd = Reply<bool>;
/// Double reply.
pub type FloatCmd = Reply<f64>;
/// Time-to-live reply; negative values carry the backend's `-1`/`-2` sentinels.
pub type DurationCmd = Reply<Duration>;
/// Server time.
pub type TimeCmd = Reply<DateTime<Utc>>;
/// Array of dynamic values.
pub type SliceCmd = Reply<Vec<Value>>;
/// Array of strings.
pub type StringSliceCmd = Reply<Vec<String>>;
/// Array of integers.
pub type IntSliceCmd = Reply<Vec<i64>>;
/// Array of doubles.
pub type FloatSliceCmd = Reply<Vec<f64>>;
/// Array of booleans.
pub type BoolSliceCmd = Reply<Vec<bool>>;
/// Array of key/value pairs.
pub type KeyValueSliceCmd = Reply<Vec<KeyValue>>;
/// String to string mapping.
pub type MapStringStringCmd = Reply<HashMap<String, String>>;
/// String to integer mapping.
pub type MapStringIntCmd = Reply<HashMap<String, i64>>;
/// Set of strings.
pub type StringStructMapCmd = Reply<HashSet<String>>;
/// One page of a cursor scan plus the next cursor.
pub type ScanCmd = Reply<(Vec<String>, u64)>;
/// A key plus the values popped from it (`LMPOP`).
pub type KeyValuesCmd = Reply<(String, Vec<String>)>;
/// A key plus the members popped from it (`ZMPOP`).
pub type ZSliceWithKeyCmd = Reply<(String, Vec<Z>)>;
/// Stream entries.
pub type XMessageSliceCmd = Reply<Vec<XMessage>>;
/// Entries grouped per stream.
pub type XStreamSliceCmd = Reply<Vec<XStream>>;
/// `XPENDING` summary.
pub type XPendingCmd = Reply<Option<XPending>>;
/// `XPENDING` extended rows.
pub type XPendingExtCmd = Reply<Vec<XPendingExt>>;
/// Claimed entries plus the next start id.
pub type XAutoClaimCmd = Reply<(Vec<XMessage>, String)>;
/// Claimed ids plus the next start id.
pub type XAutoClaimJustIdCmd = Reply<(Vec<String>, String)>;
/// Consumer groups.
pub type XInfoGroupsCmd = Reply<Vec<XInfoGroup>>;
/// Stream summary.
pub type XInfoStreamCmd = Reply<Option<XInfoStream>>;
/// Consumers of a group.
pub type XInfoConsumersCmd = Reply<Vec<XInfoConsumer>>;
/// Full stream description.
pub type XInfoStreamFullCmd = Reply<Option<XInfoStreamFull>>;
/// A member popped with its key.
pub type ZWithKeyCmd = Reply<Option<ZWithKey>>;
/// Members with scores.
pub type ZSliceCmd = Reply<Vec<Z>>;
/// Slot layout.
pub type ClusterSlotsCmd = Reply<Vec<ClusterSlot>>;
/// Peer links.
pub type ClusterLinksCmd = Reply<Vec<ClusterLink>>;
/// Shard layout.
pub type ClusterShardsCmd = Reply<Vec<ClusterShard>>;
/// Locations (`GEORADIUS`).
pub type GeoLocationCmd = Reply<Vec<GeoLocation>>;
/// Locations (`GEOSEARCH`).
pub type GeoSearchLocationCmd = Reply<Vec<GeoLocation>>;
/// Positions; `None` for members that do not exist.
pub type GeoPosCmd = Reply<Vec<Option<GeoPos>>>;
/// Slow log entries.
pub type SlowLogCmd = Reply<Vec<SlowLog>>;
/// Function libraries.
pub type FunctionListCmd = Reply<Vec<Library>>;
/// Longest common subsequence.
pub type LcsCmd = Reply<Option<LcsMatch>>;
/// Keys with their access flags.
pub type KeyFlagsCmd = Reply<Vec<KeyFlags>>;
