use crate::expected::{ExpectedInt, ExpectedKeyValues, ExpectedString, ExpectedStringSlice};
use crate::handle::MockHandle;
use respmock_core::commands::ListCommands;
use std::time::Duration;

impl MockHandle {
    /// Expect `LPUSH`.
    pub fn expect_lpush(&self, key: &str, values: &[&str]) -> ExpectedInt {
        self.expect(|c| c.lpush(key, values))
    }

    /// Expect `RPUSH`.
    pub fn expect_rpush(&self, key: &str, values: &[&str]) -> ExpectedInt {
        self.expect(|c| c.rpush(key, values))
    }

    /// Expect `LPOP`.
    pub fn expect_lpop(&self, key: &str) -> ExpectedString {
        self.expect(|c| c.lpop(key))
    }

    /// Expect `RPOP`.
    pub fn expect_rpop(&self, key: &str) -> ExpectedString {
        self.expect(|c| c.rpop(key))
    }

    /// Expect `LRANGE`.
    pub fn expect_lrange(&self, key: &str, start: i64, stop: i64) -> ExpectedStringSlice {
        self.expect(|c| c.lrange(key, start, stop))
    }

    /// Expect `LLEN`.
    pub fn expect_llen(&self, key: &str) -> ExpectedInt {
        self.expect(|c| c.llen(key))
    }

    /// Expect `LINDEX`.
    pub fn expect_lindex(&self, key: &str, index: i64) -> ExpectedString {
        self.expect(|c| c.lindex(key, index))
    }

    /// Expect `BLPOP`.
    pub fn expect_blpop(&self, timeout: Duration, keys: &[&str]) -> ExpectedStringSlice {
        self.expect(|c| c.blpop(timeout, keys))
    }

    /// Expect `LMPOP`.
    pub fn expect_lmpop(&self, direction: &str, count: i64, keys: &[&str]) -> ExpectedKeyValues {
        self.expect(|c| c.lmpop(direction, count, keys))
    }
}
