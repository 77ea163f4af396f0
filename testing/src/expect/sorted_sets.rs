use crate::expected::{
    ExpectedFloat, ExpectedFloatSlice, ExpectedInt, ExpectedScan, ExpectedStringSlice,
    ExpectedZSlice, ExpectedZSliceWithKey, ExpectedZWithKey,
};
use crate::handle::MockHandle;
use respmock_core::commands::SortedSetCommands;
use respmock_core::types::Z;
use std::time::Duration;

impl MockHandle {
    /// Expect `ZADD`.
    pub fn expect_zadd(&self, key: &str, members: &[Z]) -> ExpectedInt {
        self.expect(|c| c.zadd(key, members))
    }

    /// Expect `ZRANGE`.
    pub fn expect_zrange(&self, key: &str, start: i64, stop: i64) -> ExpectedStringSlice {
        self.expect(|c| c.zrange(key, start, stop))
    }

    /// Expect `ZRANGE ... WITHSCORES`.
    pub fn expect_zrange_with_scores(&self, key: &str, start: i64, stop: i64) -> ExpectedZSlice {
        self.expect(|c| c.zrange_with_scores(key, start, stop))
    }

    /// Expect `ZSCORE`.
    pub fn expect_zscore(&self, key: &str, member: &str) -> ExpectedFloat {
        self.expect(|c| c.zscore(key, member))
    }

    /// Expect `ZMSCORE`.
    pub fn expect_zmscore(&self, key: &str, members: &[&str]) -> ExpectedFloatSlice {
        self.expect(|c| c.zmscore(key, members))
    }

    /// Expect `ZINCRBY`.
    pub fn expect_zincr_by(&self, key: &str, increment: f64, member: &str) -> ExpectedFloat {
        self.expect(|c| c.zincr_by(key, increment, member))
    }

    /// Expect `ZCARD`.
    pub fn expect_zcard(&self, key: &str) -> ExpectedInt {
        self.expect(|c| c.zcard(key))
    }

    /// Expect `BZPOPMAX`.
    pub fn expect_bzpop_max(&self, timeout: Duration, keys: &[&str]) -> ExpectedZWithKey {
        self.expect(|c| c.bzpop_max(timeout, keys))
    }

    /// Expect `BZPOPMIN`.
    pub fn expect_bzpop_min(&self, timeout: Duration, keys: &[&str]) -> ExpectedZWithKey {
        self.expect(|c| c.bzpop_min(timeout, keys))
    }

    /// Expect `ZMPOP`.
    pub fn expect_zmpop(&self, order: &str, count: i64, keys: &[&str]) -> ExpectedZSliceWithKey {
        self.expect(|c| c.zmpop(order, count, keys))
    }

    /// Expect `ZSCAN`.
    pub fn expect_zscan(&self, key: &str, cursor: u64, pattern: &str, count: i64) -> ExpectedScan {
        self.expect(|c| c.zscan(key, cursor, pattern, count))
    }
}
