use crate::expected::{
    ExpectedBool, ExpectedBoolSlice, ExpectedInt, ExpectedScan, ExpectedStringSlice,
    ExpectedStringStructMap,
};
use crate::handle::MockHandle;
use respmock_core::commands::SetCommands;

impl MockHandle {
    /// Expect `SADD`.
    pub fn expect_sadd(&self, key: &str, members: &[&str]) -> ExpectedInt {
        self.expect(|c| c.sadd(key, members))
    }

    /// Expect `SREM`.
    pub fn expect_srem(&self, key: &str, members: &[&str]) -> ExpectedInt {
        self.expect(|c| c.srem(key, members))
    }

    /// Expect `SMEMBERS`, read as a list.
    pub fn expect_smembers(&self, key: &str) -> ExpectedStringSlice {
        self.expect(|c| c.smembers(key))
    }

    /// Expect `SMEMBERS`, read as a set.
    pub fn expect_smembers_map(&self, key: &str) -> ExpectedStringStructMap {
        self.expect(|c| c.smembers_map(key))
    }

    /// Expect `SISMEMBER`.
    pub fn expect_sismember(&self, key: &str, member: &str) -> ExpectedBool {
        self.expect(|c| c.sismember(key, member))
    }

    /// Expect `SMISMEMBER`.
    pub fn expect_smismember(&self, key: &str, members: &[&str]) -> ExpectedBoolSlice {
        self.expect(|c| c.smismember(key, members))
    }

    /// Expect `SCARD`.
    pub fn expect_scard(&self, key: &str) -> ExpectedInt {
        self.expect(|c| c.scard(key))
    }

    /// Expect `SSCAN`.
    pub fn expect_sscan(&self, key: &str, cursor: u64, pattern: &str, count: i64) -> ExpectedScan {
        self.expect(|c| c.sscan(key, cursor, pattern, count))
    }
}
