use crate::expected::{
    ExpectedClusterLinks, ExpectedClusterShards, ExpectedClusterSlots, ExpectedInt, ExpectedString,
};
use crate::handle::MockHandle;
use respmock_core::commands::ClusterCommands;

impl MockHandle {
    /// Expect `CLUSTER SLOTS`.
    pub fn expect_cluster_slots(&self) -> ExpectedClusterSlots {
        self.expect(ClusterCommands::cluster_slots)
    }

    /// Expect `CLUSTER SHARDS`.
    pub fn expect_cluster_shards(&self) -> ExpectedClusterShards {
        self.expect(ClusterCommands::cluster_shards)
    }

    /// Expect `CLUSTER LINKS`.
    pub fn expect_cluster_links(&self) -> ExpectedClusterLinks {
        self.expect(ClusterCommands::cluster_links)
    }

    /// Expect `CLUSTER KEYSLOT`.
    pub fn expect_cluster_keyslot(&self, key: &str) -> ExpectedInt {
        self.expect(|c| c.cluster_keyslot(key))
    }

    /// Expect `CLUSTER COUNTKEYSINSLOT`.
    pub fn expect_cluster_count_keys_in_slot(&self, slot: i64) -> ExpectedInt {
        self.expect(|c| c.cluster_count_keys_in_slot(slot))
    }

    /// Expect `CLUSTER INFO`.
    pub fn expect_cluster_info(&self) -> ExpectedString {
        self.expect(ClusterCommands::cluster_info)
    }
}
