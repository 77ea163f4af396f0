use super::Cmdable;
use crate::command::Command;
use crate::reply::{ClusterLinksCmd, ClusterShardsCmd, ClusterSlotsCmd, IntCmd, StringCmd};

/// Cluster topology commands.
pub trait ClusterCommands: Cmdable {
    /// `CLUSTER SLOTS`
    fn cluster_slots(&self) -> ClusterSlotsCmd {
        self.process(Command::new("cluster").arg("slots"))
    }

    /// `CLUSTER SHARDS`
    fn cluster_shards(&self) -> ClusterShardsCmd {
        self.process(Command::new("cluster").arg("shards"))
    }

    /// `CLUSTER LINKS`
    fn cluster_links(&self) -> ClusterLinksCmd {
        self.process(Command::new("cluster").arg("links"))
    }

    /// `CLUSTER KEYSLOT key`
    fn cluster_keyslot(&self, key: &str) -> IntCmd {
        self.process(Command::new("cluster").arg("keyslot").arg(key))
    }

    /// `CLUSTER COUNTKEYSINSLOT slot`
    fn cluster_count_keys_in_slot(&self, slot: i64) -> IntCmd {
        self.process(Command::new("cluster").arg("countkeysinslot").arg(slot))
    }

    /// `CLUSTER INFO`
    fn cluster_info(&self) -> StringCmd {
        self.process(Command::new("cluster").arg("info"))
    }
}

impl<C: Cmdable> ClusterCommands for C {}
