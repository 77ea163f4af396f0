//! Typed reply builders.
//!
//! Each `expect_*` registration returns the builder of the command's reply shape.
//! A builder scripts the reply with exactly one of:
//!
//! - `set_val(..)`: the value the call returns
//! - `set_err(err)`: the error the call returns, unchanged (same identity)
//! - `redis_nil()`: the backend's `nil` reply, i.e. `set_err(Error::Nil)`
//!
//! The last call wins. A builder left unconfigured makes the matched call fail with
//! [`MockError::Unconfigured`](crate::MockError::Unconfigured).

use crate::cell::SharedCell;
use chrono::{DateTime, Duration, Utc};
use respmock_core::types::{
    ClusterLink, ClusterShard, ClusterSlot, GeoLocation, GeoPos, KeyFlags, KeyValue, LcsMatch,
    Library, SlowLog, XInfoConsumer, XInfoGroup, XInfoStream, XInfoStreamFull, XMessage,
    XPending, XPendingExt, XStream, Z, ZWithKey,
};
use respmock_core::{Error, ReplyShape, Value};
use std::collections::{HashMap, HashSet};

/// A reply builder bound to one expectation.
pub trait ExpectedReply: Sized {
    /// Reply shape of the expected command.
    type Shape: ReplyShape;

    /// Wrap the expectation's result cell.
    fn from_cell(cell: SharedCell<Self::Shape>) -> Self;

    /// The expectation's result cell.
    fn cell(&self) -> &SharedCell<Self::Shape>;
}

macro_rules! scripted_errors {
    () => {
        /// Reply with `err`.
        pub fn set_err(&self, err: Error) {
            self.cell.set_err(err);
        }

        /// Reply with the backend's `nil`.
        pub fn redis_nil(&self) {
            self.cell.set_err(Error::Nil);
        }
    };
}

macro_rules! expected_reply {
    (@impl $name:ident => $shape:ty) => {
        impl ExpectedReply for $name {
            type Shape = $shape;

            fn from_cell(cell: SharedCell<$shape>) -> Self {
                Self { cell }
            }

            fn cell(&self) -> &SharedCell<$shape> {
                &self.cell
            }
        }
    };

    // Reply is an optional record; `set_val` takes the record.
    ($(#[$meta:meta])* $name:ident => optional $inner:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            cell: SharedCell<Option<$inner>>,
        }

        impl $name {
            /// Reply with `val`.
            pub fn set_val(&self, val: $inner) {
                self.cell.set_val(Some(val));
            }

            scripted_errors!();
        }

        expected_reply!(@impl $name => Option<$inner>);
    };

    // Reply carries two values.
    ($(#[$meta:meta])* $name:ident => ($first:ident: $a:ty, $second:ident: $b:ty)) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            cell: SharedCell<($a, $b)>,
        }

        impl $name {
            /// Reply with both values.
            pub fn set_val(&self, $first: impl Into<$a>, $second: impl Into<$b>) {
                self.cell.set_val(($first.into(), $second.into()));
            }

            scripted_errors!();
        }

        expected_reply!(@impl $name => ($a, $b));
    };

    // Reply is the value itself.
    ($(#[$meta:meta])* $name:ident => $shape:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            cell: SharedCell<$shape>,
        }

        impl $name {
            /// Reply with `val`.
            pub fn set_val(&self, val: impl Into<$shape>) {
                self.cell.set_val(val.into());
            }

            scripted_errors!();
        }

        expected_reply!(@impl $name => $shape);
    };
}

expected_reply!(
    /// Dynamically typed reply (`EVAL`, `FCALL`, raw commands).
    ExpectedCmd => Value
);
expected_reply!(
    /// Bulk string reply.
    ExpectedString => String
);
expected_reply!(
    /// Status reply.
    ExpectedStatus => String
);
expected_reply!(
    /// Integer reply.
    ExpectedInt => i64
);
expected_reply!(
    /// Boolean reply.
    ExpectedBool => bool
);
expected_reply!(
    /// Double reply.
    ExpectedFloat => f64
);
expected_reply!(
    /// Duration reply (`TTL`, `PTTL`, `OBJECT IDLETIME`).
    ExpectedDuration => Duration
);
expected_reply!(
    /// Time reply.
    ExpectedTime => DateTime<Utc>
);
expected_reply!(
    /// Array of dynamic values.
    ExpectedSlice => Vec<Value>
);
expected_reply!(
    /// Array of strings.
    ExpectedStringSlice => Vec<String>
);
expected_reply!(
    /// Array of integers.
    ExpectedIntSlice => Vec<i64>
);
expected_reply!(
    /// Array of doubles.
    ExpectedFloatSlice => Vec<f64>
);
expected_reply!(
    /// Array of booleans.
    ExpectedBoolSlice => Vec<bool>
);
expected_reply!(
    /// Key/value pairs.
    ExpectedKeyValueSlice => Vec<KeyValue>
);
expected_reply!(
    /// String to string mapping.
    ExpectedMapStringString => HashMap<String, String>
);
expected_reply!(
    /// String to integer mapping.
    ExpectedMapStringInt => HashMap<String, i64>
);
expected_reply!(
    /// Set of strings.
    ExpectedStringStructMap => HashSet<String>
);
expected_reply!(
    /// One scan page and the next cursor.
    ExpectedScan => (page: Vec<String>, cursor: u64)
);
expected_reply!(
    /// A key and the values popped from it.
    ExpectedKeyValues => (key: String, values: Vec<String>)
);
expected_reply!(
    /// A key and the members popped from it.
    ExpectedZSliceWithKey => (key: String, members: Vec<Z>)
);
expected_reply!(
    /// Stream entries.
    ExpectedXMessageSlice => Vec<XMessage>
);
expected_reply!(
    /// Entries grouped per stream.
    ExpectedXStreamSlice => Vec<XStream>
);
expected_reply!(
    /// `XPENDING` summary.
    ExpectedXPending => optional XPending
);
expected_reply!(
    /// `XPENDING` extended rows.
    ExpectedXPendingExt => Vec<XPendingExt>
);
expected_reply!(
    /// Claimed entries and the next start id.
    ExpectedXAutoClaim => (messages: Vec<XMessage>, start: String)
);
expected_reply!(
    /// Claimed ids and the next start id.
    ExpectedXAutoClaimJustId => (ids: Vec<String>, start: String)
);
expected_reply!(
    /// Consumer groups of a stream.
    ExpectedXInfoGroups => Vec<XInfoGroup>
);
expected_reply!(
    /// Stream summary.
    ExpectedXInfoStream => optional XInfoStream
);
expected_reply!(
    /// Consumers of a group.
    ExpectedXInfoConsumers => Vec<XInfoConsumer>
);
expected_reply!(
    /// Full stream description.
    ExpectedXInfoStreamFull => optional XInfoStreamFull
);
expected_reply!(
    /// A member popped with its key.
    ExpectedZWithKey => optional ZWithKey
);
expected_reply!(
    /// Members with scores.
    ExpectedZSlice => Vec<Z>
);
expected_reply!(
    /// Cluster slot layout.
    ExpectedClusterSlots => Vec<ClusterSlot>
);
expected_reply!(
    /// Cluster peer links.
    ExpectedClusterLinks => Vec<ClusterLink>
);
expected_reply!(
    /// Cluster shard layout.
    ExpectedClusterShards => Vec<ClusterShard>
);
expected_reply!(
    /// `GEORADIUS` locations.
    ExpectedGeoLocation => Vec<GeoLocation>
);
expected_reply!(
    /// `GEOSEARCH` locations.
    ExpectedGeoSearchLocation => Vec<GeoLocation>
);
expected_reply!(
    /// Member positions; `None` for missing members.
    ExpectedGeoPos => Vec<Option<GeoPos>>
);
expected_reply!(
    /// Slow log entries.
    ExpectedSlowLog => Vec<SlowLog>
);
expected_reply!(
    /// Function libraries.
    ExpectedFunctionList => Vec<Library>
);
expected_reply!(
    /// Longest common subsequence.
    ExpectedLcs => optional LcsMatch
);
expected_reply!(
    /// Keys with their access flags.
    ExpectedKeyFlags => Vec<KeyFlags>
);
