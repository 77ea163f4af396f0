use crate::expected::{
    ExpectedBool, ExpectedFloat, ExpectedInt, ExpectedIntSlice, ExpectedLcs, ExpectedSlice,
    ExpectedStatus, ExpectedString,
};
use crate::handle::MockHandle;
use respmock_core::Arg;
use respmock_core::commands::{LcsQuery, StringCommands};
use std::time::Duration;

impl MockHandle {
    /// Expect `GET`.
    pub fn expect_get(&self, key: &str) -> ExpectedString {
        self.expect(|c| c.get(key))
    }

    /// Expect `SET`, with `EX`/`PX` when an expiration is given.
    pub fn expect_set(
        &self,
        key: &str,
        value: impl Into<Arg>,
        expiration: Option<Duration>,
    ) -> ExpectedStatus {
        self.expect(|c| c.set(key, value, expiration))
    }

    /// Expect `SETNX` (or `SET ... NX` with an expiration).
    pub fn expect_set_nx(
        &self,
        key: &str,
        value: impl Into<Arg>,
        expiration: Option<Duration>,
    ) -> ExpectedBool {
        self.expect(|c| c.set_nx(key, value, expiration))
    }

    /// Expect `GETDEL`.
    pub fn expect_get_del(&self, key: &str) -> ExpectedString {
        self.expect(|c| c.get_del(key))
    }

    /// Expect `INCR`.
    pub fn expect_incr(&self, key: &str) -> ExpectedInt {
        self.expect(|c| c.incr(key))
    }

    /// Expect `INCRBY`.
    pub fn expect_incr_by(&self, key: &str, increment: i64) -> ExpectedInt {
        self.expect(|c| c.incr_by(key, increment))
    }

    /// Expect `DECR`.
    pub fn expect_decr(&self, key: &str) -> ExpectedInt {
        self.expect(|c| c.decr(key))
    }

    /// Expect `INCRBYFLOAT`.
    pub fn expect_incr_by_float(&self, key: &str, increment: f64) -> ExpectedFloat {
        self.expect(|c| c.incr_by_float(key, increment))
    }

    /// Expect `APPEND`.
    pub fn expect_append(&self, key: &str, value: &str) -> ExpectedInt {
        self.expect(|c| c.append(key, value))
    }

    /// Expect `STRLEN`.
    pub fn expect_strlen(&self, key: &str) -> ExpectedInt {
        self.expect(|c| c.strlen(key))
    }

    /// Expect `MGET`.
    pub fn expect_mget(&self, keys: &[&str]) -> ExpectedSlice {
        self.expect(|c| c.mget(keys))
    }

    /// Expect `MSET`.
    pub fn expect_mset(&self, pairs: &[(&str, &str)]) -> ExpectedStatus {
        self.expect(|c| c.mset(pairs))
    }

    /// Expect `LCS`.
    pub fn expect_lcs(&self, query: &LcsQuery) -> ExpectedLcs {
        self.expect(|c| c.lcs(query))
    }

    /// Expect `SETBIT`.
    pub fn expect_set_bit(&self, key: &str, offset: i64, value: i32) -> ExpectedInt {
        self.expect(|c| c.set_bit(key, offset, value))
    }

    /// Expect `GETBIT`.
    pub fn expect_get_bit(&self, key: &str, offset: i64) -> ExpectedInt {
        self.expect(|c| c.get_bit(key, offset))
    }

    /// Expect `BITCOUNT`.
    pub fn expect_bit_count(&self, key: &str, range: Option<(i64, i64)>) -> ExpectedInt {
        self.expect(|c| c.bit_count(key, range))
    }

    /// Expect `BITFIELD`.
    pub fn expect_bit_field(&self, key: &str, subcommands: &[&str]) -> ExpectedIntSlice {
        self.expect(|c| c.bit_field(key, subcommands))
    }

    /// Expect `PFADD`.
    pub fn expect_pf_add(&self, key: &str, elements: &[&str]) -> ExpectedInt {
        self.expect(|c| c.pf_add(key, elements))
    }

    /// Expect `PFCOUNT`.
    pub fn expect_pf_count(&self, keys: &[&str]) -> ExpectedInt {
        self.expect(|c| c.pf_count(keys))
    }
}
