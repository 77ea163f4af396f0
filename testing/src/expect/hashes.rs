use crate::expected::{
    ExpectedBool, ExpectedFloat, ExpectedInt, ExpectedKeyValueSlice, ExpectedMapStringString,
    ExpectedScan, ExpectedSlice, ExpectedString, ExpectedStringSlice,
};
use crate::handle::MockHandle;
use respmock_core::commands::HashCommands;

impl MockHandle {
    /// Expect `HGET`.
    pub fn expect_hget(&self, key: &str, field: &str) -> ExpectedString {
        self.expect(|c| c.hget(key, field))
    }

    /// Expect `HSET`.
    pub fn expect_hset(&self, key: &str, fields: &[(&str, &str)]) -> ExpectedInt {
        self.expect(|c| c.hset(key, fields))
    }

    /// Expect `HGETALL`.
    pub fn expect_hget_all(&self, key: &str) -> ExpectedMapStringString {
        self.expect(|c| c.hget_all(key))
    }

    /// Expect `HDEL`.
    pub fn expect_hdel(&self, key: &str, fields: &[&str]) -> ExpectedInt {
        self.expect(|c| c.hdel(key, fields))
    }

    /// Expect `HEXISTS`.
    pub fn expect_hexists(&self, key: &str, field: &str) -> ExpectedBool {
        self.expect(|c| c.hexists(key, field))
    }

    /// Expect `HKEYS`.
    pub fn expect_hkeys(&self, key: &str) -> ExpectedStringSlice {
        self.expect(|c| c.hkeys(key))
    }

    /// Expect `HMGET`.
    pub fn expect_hmget(&self, key: &str, fields: &[&str]) -> ExpectedSlice {
        self.expect(|c| c.hmget(key, fields))
    }

    /// Expect `HINCRBY`.
    pub fn expect_hincr_by(&self, key: &str, field: &str, increment: i64) -> ExpectedInt {
        self.expect(|c| c.hincr_by(key, field, increment))
    }

    /// Expect `HINCRBYFLOAT`.
    pub fn expect_hincr_by_float(&self, key: &str, field: &str, increment: f64) -> ExpectedFloat {
        self.expect(|c| c.hincr_by_float(key, field, increment))
    }

    /// Expect `HSCAN`.
    pub fn expect_hscan(&self, key: &str, cursor: u64, pattern: &str, count: i64) -> ExpectedScan {
        self.expect(|c| c.hscan(key, cursor, pattern, count))
    }

    /// Expect `HRANDFIELD ... WITHVALUES`.
    pub fn expect_hrand_field_with_values(&self, key: &str, count: i64) -> ExpectedKeyValueSlice {
        self.expect(|c| c.hrand_field_with_values(key, count))
    }
}
