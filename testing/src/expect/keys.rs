use crate::expected::{
    ExpectedBool, ExpectedDuration, ExpectedInt, ExpectedScan, ExpectedStatus,
    ExpectedStringSlice,
};
use crate::handle::MockHandle;
use respmock_core::commands::KeyCommands;
use std::time::Duration;

impl MockHandle {
    /// Expect `DEL`.
    pub fn expect_del(&self, keys: &[&str]) -> ExpectedInt {
        self.expect(|c| c.del(keys))
    }

    /// Expect `EXISTS`.
    pub fn expect_exists(&self, keys: &[&str]) -> ExpectedInt {
        self.expect(|c| c.exists(keys))
    }

    /// Expect `EXPIRE`.
    pub fn expect_expire(&self, key: &str, expiration: Duration) -> ExpectedBool {
        self.expect(|c| c.expire(key, expiration))
    }

    /// Expect `TTL`.
    pub fn expect_ttl(&self, key: &str) -> ExpectedDuration {
        self.expect(|c| c.ttl(key))
    }

    /// Expect `PTTL`.
    pub fn expect_pttl(&self, key: &str) -> ExpectedDuration {
        self.expect(|c| c.pttl(key))
    }

    /// Expect `KEYS`.
    pub fn expect_keys(&self, pattern: &str) -> ExpectedStringSlice {
        self.expect(|c| c.keys(pattern))
    }

    /// Expect `SCAN`.
    pub fn expect_scan(&self, cursor: u64, pattern: &str, count: i64) -> ExpectedScan {
        self.expect(|c| c.scan(cursor, pattern, count))
    }

    /// Expect `TYPE`.
    pub fn expect_key_type(&self, key: &str) -> ExpectedStatus {
        self.expect(|c| c.key_type(key))
    }

    /// Expect `RENAME`.
    pub fn expect_rename(&self, key: &str, new_key: &str) -> ExpectedStatus {
        self.expect(|c| c.rename(key, new_key))
    }

    /// Expect `OBJECT IDLETIME`.
    pub fn expect_object_idle_time(&self, key: &str) -> ExpectedDuration {
        self.expect(|c| c.object_idle_time(key))
    }
}
