use serde::{Deserialize, Serialize};

/// A slot range and the nodes serving it (`CLUSTER SLOTS`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterSlot {
    /// First slot
    pub start: i64,
    /// Last slot
    pub end: i64,
    /// Master first, then replicas
    pub nodes: Vec<ClusterNode>,
}

/// A node entry of `CLUSTER SLOTS`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterNode {
    /// Node id
    pub id: String,
    /// `host:port`
    pub addr: String,
}

/// A peer link of `CLUSTER LINKS`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterLink {
    /// `to` or `from`
    pub direction: String,
    /// Peer node id
    pub node: String,
    /// Creation time in milliseconds since the epoch
    pub create_time: i64,
    /// Registered events (`r`, `w`, `rw`)
    pub events: String,
    /// Allocated send buffer in bytes
    pub send_buffer_allocated: i64,
    /// Used send buffer in bytes
    pub send_buffer_used: i64,
}

/// A shard of `CLUSTER SHARDS`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterShard {
    /// Slot ranges owned by the shard
    pub slots: Vec<SlotRange>,
    /// Nodes of the shard
    pub nodes: Vec<ShardNode>,
}

/// Inclusive slot range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRange {
    /// First slot
    pub start: i64,
    /// Last slot
    pub end: i64,
}

/// A node entry of `CLUSTER SHARDS`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShardNode {
    /// Node id
    pub id: String,
    /// Preferred endpoint
    pub endpoint: String,
    /// IP address
    pub ip: String,
    /// Announced hostname
    pub hostname: String,
    /// Plain-text port
    pub port: i64,
    /// TLS port
    pub tls_port: i64,
    /// `master` or `replica`
    pub role: String,
    /// Replication offset
    pub replication_offset: i64,
    /// `online`, `failed` or `loading`
    pub health: String,
}
