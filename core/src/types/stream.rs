use crate::value::Value;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// A stream entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct XMessage {
    /// Entry id, e.g. `1526919030474-0`
    pub id: String,
    /// Field/value pairs
    pub values: HashMap<String, Value>,
}

impl XMessage {
    /// Build an entry from an id and string field/value pairs.
    pub fn new<I, K, V>(id: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self {
            id: id.into(),
            values: values
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Entries read from one stream (`XREAD`, `XREADGROUP`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct XStream {
    /// Stream key
    pub stream: String,
    /// Entries
    pub messages: Vec<XMessage>,
}

/// Summary form of `XPENDING`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct XPending {
    /// Number of pending entries
    pub count: i64,
    /// Smallest pending id
    pub lower: String,
    /// Greatest pending id
    pub higher: String,
    /// Pending count per consumer
    pub consumers: HashMap<String, i64>,
}

/// Extended form of `XPENDING` (one row per pending entry).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct XPendingExt {
    /// Entry id
    pub id: String,
    /// Owning consumer
    pub consumer: String,
    /// Time since last delivery
    pub idle: Duration,
    /// Delivery count
    pub retry_count: i64,
}

/// A consumer group (`XINFO GROUPS`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct XInfoGroup {
    /// Group name
    pub name: String,
    /// Number of consumers
    pub consumers: i64,
    /// Length of the pending entries list
    pub pending: i64,
    /// Last delivered id
    pub last_delivered_id: String,
    /// Logical read counter
    pub entries_read: i64,
    /// Entries not yet delivered
    pub lag: i64,
}

/// `XINFO STREAM`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct XInfoStream {
    /// Number of entries
    pub length: i64,
    /// Keys in the radix tree
    pub radix_tree_keys: i64,
    /// Nodes in the radix tree
    pub radix_tree_nodes: i64,
    /// Number of consumer groups
    pub groups: i64,
    /// Id of the last added entry
    pub last_generated_id: String,
    /// Greatest deleted id
    pub max_deleted_entry_id: String,
    /// Entries added over the stream's lifetime
    pub entries_added: i64,
    /// First entry
    pub first_entry: XMessage,
    /// Last entry
    pub last_entry: XMessage,
    /// Id of the first entry still present
    pub recorded_first_entry_id: String,
}

/// A consumer of a group (`XINFO CONSUMERS`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct XInfoConsumer {
    /// Consumer name
    pub name: String,
    /// Pending entries
    pub pending: i64,
    /// Time since last interaction
    pub idle: Duration,
    /// Time since last successful interaction
    pub inactive: Duration,
}

/// `XINFO STREAM ... FULL`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct XInfoStreamFull {
    /// Number of entries
    pub length: i64,
    /// Keys in the radix tree
    pub radix_tree_keys: i64,
    /// Nodes in the radix tree
    pub radix_tree_nodes: i64,
    /// Id of the last added entry
    pub last_generated_id: String,
    /// Greatest deleted id
    pub max_deleted_entry_id: String,
    /// Entries added over the stream's lifetime
    pub entries_added: i64,
    /// Entries (bounded by `COUNT`)
    pub entries: Vec<XMessage>,
    /// Consumer groups with their pending lists
    pub groups: Vec<XInfoStreamGroup>,
    /// Id of the first entry still present
    pub recorded_first_entry_id: String,
}

/// A group of `XINFO STREAM ... FULL`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct XInfoStreamGroup {
    /// Group name
    pub name: String,
    /// Last delivered id
    pub last_delivered_id: String,
    /// Logical read counter
    pub entries_read: i64,
    /// Entries not yet delivered
    pub lag: i64,
    /// Length of the pending entries list
    pub pel_count: i64,
    /// Pending entries
    pub pending: Vec<XInfoStreamGroupPending>,
    /// Consumers
    pub consumers: Vec<XInfoStreamConsumer>,
}

/// A pending entry of a group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct XInfoStreamGroupPending {
    /// Entry id
    pub id: String,
    /// Owning consumer
    pub consumer: String,
    /// Last delivery
    pub delivery_time: DateTime<Utc>,
    /// Delivery count
    pub delivery_count: i64,
}

/// A consumer of `XINFO STREAM ... FULL`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct XInfoStreamConsumer {
    /// Consumer name
    pub name: String,
    /// Last attempted interaction
    pub seen_time: DateTime<Utc>,
    /// Last successful interaction
    pub active_time: DateTime<Utc>,
    /// Length of the consumer's pending list
    pub pel_count: i64,
    /// Pending entries
    pub pending: Vec<XInfoStreamConsumerPending>,
}

/// A pending entry of a consumer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct XInfoStreamConsumerPending {
    /// Entry id
    pub id: String,
    /// Last delivery
    pub delivery_time: DateTime<Utc>,
    /// Delivery count
    pub delivery_count: i64,
}
