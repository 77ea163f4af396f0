use super::{Cmdable, with_expiration};
use crate::command::{Arg, Command};
use crate::reply::{BoolCmd, FloatCmd, IntCmd, IntSliceCmd, LcsCmd, SliceCmd, StatusCmd, StringCmd};
use std::time::Duration;

/// Arguments of `LCS`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LcsQuery {
    /// First key
    pub key1: String,
    /// Second key
    pub key2: String,
    /// Return only the length (`LEN`)
    pub len: bool,
    /// Return match positions (`IDX`)
    pub idx: bool,
    /// Ignore matches shorter than this (`MINMATCHLEN`); `0` omits the clause
    pub min_match_len: i64,
    /// Include the length of each match (`WITHMATCHLEN`)
    pub with_match_len: bool,
}

/// String, bitmap and HyperLogLog commands.
pub trait StringCommands: Cmdable {
    /// `GET key`
    fn get(&self, key: &str) -> StringCmd {
        self.process(Command::new("get").arg(key))
    }

    /// `SET key value [EX seconds | PX milliseconds]`
    fn set(&self, key: &str, value: impl Into<Arg>, expiration: Option<Duration>) -> StatusCmd {
        self.process(with_expiration(
            Command::new("set").arg(key).arg(value),
            expiration,
        ))
    }

    /// `SETNX key value`, or `SET key value EX|PX .. NX` when an expiration is given
    fn set_nx(&self, key: &str, value: impl Into<Arg>, expiration: Option<Duration>) -> BoolCmd {
        let cmd = match expiration {
            None => Command::new("setnx").arg(key).arg(value),
            Some(_) => with_expiration(Command::new("set").arg(key).arg(value), expiration).arg("nx"),
        };
        self.process(cmd)
    }

    /// `GETDEL key`
    fn get_del(&self, key: &str) -> StringCmd {
        self.process(Command::new("getdel").arg(key))
    }

    /// `INCR key`
    fn incr(&self, key: &str) -> IntCmd {
        self.process(Command::new("incr").arg(key))
    }

    /// `INCRBY key increment`
    fn incr_by(&self, key: &str, increment: i64) -> IntCmd {
        self.process(Command::new("incrby").arg(key).arg(increment))
    }

    /// `DECR key`
    fn decr(&self, key: &str) -> IntCmd {
        self.process(Command::new("decr").arg(key))
    }

    /// `INCRBYFLOAT key increment`
    fn incr_by_float(&self, key: &str, increment: f64) -> FloatCmd {
        self.process(Command::new("incrbyfloat").arg(key).arg(increment))
    }

    /// `APPEND key value`
    fn append(&self, key: &str, value: &str) -> IntCmd {
        self.process(Command::new("append").arg(key).arg(value))
    }

    /// `STRLEN key`
    fn strlen(&self, key: &str) -> IntCmd {
        self.process(Command::new("strlen").arg(key))
    }

    /// `MGET key [key ...]`
    fn mget(&self, keys: &[&str]) -> SliceCmd {
        self.process(Command::new("mget").args(keys.iter().copied()))
    }

    /// `MSET key value [key value ...]`
    fn mset(&self, pairs: &[(&str, &str)]) -> StatusCmd {
        let cmd = pairs
            .iter()
            .fold(Command::new("mset"), |cmd, (k, v)| cmd.arg(*k).arg(*v));
        self.process(cmd)
    }

    /// `LCS key1 key2 [LEN] [IDX] [MINMATCHLEN len] [WITHMATCHLEN]`
    fn lcs(&self, query: &LcsQuery) -> LcsCmd {
        let cmd = Command::new("lcs")
            .arg(&query.key1)
            .arg(&query.key2)
            .arg_if(query.len, "len")
            .arg_if(query.idx, "idx");
        let cmd = if query.min_match_len > 0 {
            cmd.arg("minmatchlen").arg(query.min_match_len)
        } else {
            cmd
        };
        self.process(cmd.arg_if(query.with_match_len, "withmatchlen"))
    }

    /// `SETBIT key offset value`
    fn set_bit(&self, key: &str, offset: i64, value: i32) -> IntCmd {
        self.process(Command::new("setbit").arg(key).arg(offset).arg(value))
    }

    /// `GETBIT key offset`
    fn get_bit(&self, key: &str, offset: i64) -> IntCmd {
        self.process(Command::new("getbit").arg(key).arg(offset))
    }

    /// `BITCOUNT key [start end]`
    fn bit_count(&self, key: &str, range: Option<(i64, i64)>) -> IntCmd {
        let cmd = Command::new("bitcount").arg(key);
        let cmd = match range {
            Some((start, end)) => cmd.arg(start).arg(end),
            None => cmd,
        };
        self.process(cmd)
    }

    /// `BITFIELD key subcommand ...`
    fn bit_field(&self, key: &str, subcommands: &[&str]) -> IntSliceCmd {
        self.process(
            Command::new("bitfield")
                .arg(key)
                .args(subcommands.iter().copied()),
        )
    }

    /// `PFADD key element [element ...]`
    fn pf_add(&self, key: &str, elements: &[&str]) -> IntCmd {
        self.process(Command::new("pfadd").arg(key).args(elements.iter().copied()))
    }

    /// `PFCOUNT key [key ...]`
    fn pf_count(&self, keys: &[&str]) -> IntCmd {
        self.process(Command::new("pfcount").args(keys.iter().copied()))
    }
}

impl<C: Cmdable> StringCommands for C {}
