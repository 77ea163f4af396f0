use super::{Cmdable, timeout_secs, with_scan_clauses};
use crate::command::Command;
use crate::reply::{
    FloatCmd, FloatSliceCmd, IntCmd, ScanCmd, StringSliceCmd, ZSliceCmd, ZSliceWithKeyCmd,
    ZWithKeyCmd,
};
use crate::types::Z;
use std::time::Duration;

/// Sorted-set commands.
pub trait SortedSetCommands: Cmdable {
    /// `ZADD key score member [score member ...]`
    fn zadd(&self, key: &str, members: &[Z]) -> IntCmd {
        let cmd = members.iter().fold(Command::new("zadd").arg(key), |cmd, z| {
            cmd.arg(z.score).arg(&z.member)
        });
        self.process(cmd)
    }

    /// `ZRANGE key start stop`
    fn zrange(&self, key: &str, start: i64, stop: i64) -> StringSliceCmd {
        self.process(Command::new("zrange").arg(key).arg(start).arg(stop))
    }

    /// `ZRANGE key start stop WITHSCORES`
    fn zrange_with_scores(&self, key: &str, start: i64, stop: i64) -> ZSliceCmd {
        self.process(
            Command::new("zrange")
                .arg(key)
                .arg(start)
                .arg(stop)
                .arg("withscores"),
        )
    }

    /// `ZSCORE key member`
    fn zscore(&self, key: &str, member: &str) -> FloatCmd {
        self.process(Command::new("zscore").arg(key).arg(member))
    }

    /// `ZMSCORE key member [member ...]`
    fn zmscore(&self, key: &str, members: &[&str]) -> FloatSliceCmd {
        self.process(Command::new("zmscore").arg(key).args(members.iter().copied()))
    }

    /// `ZINCRBY key increment member`
    fn zincr_by(&self, key: &str, increment: f64, member: &str) -> FloatCmd {
        self.process(Command::new("zincrby").arg(key).arg(increment).arg(member))
    }

    /// `ZCARD key`
    fn zcard(&self, key: &str) -> IntCmd {
        self.process(Command::new("zcard").arg(key))
    }

    /// `BZPOPMAX key [key ...] timeout`
    fn bzpop_max(&self, timeout: Duration, keys: &[&str]) -> ZWithKeyCmd {
        self.process(
            Command::new("bzpopmax")
                .args(keys.iter().copied())
                .arg(timeout_secs(timeout)),
        )
    }

    /// `BZPOPMIN key [key ...] timeout`
    fn bzpop_min(&self, timeout: Duration, keys: &[&str]) -> ZWithKeyCmd {
        self.process(
            Command::new("bzpopmin")
                .args(keys.iter().copied())
                .arg(timeout_secs(timeout)),
        )
    }

    /// `ZMPOP numkeys key [key ...] MIN|MAX COUNT count`
    fn zmpop(&self, order: &str, count: i64, keys: &[&str]) -> ZSliceWithKeyCmd {
        self.process(
            Command::new("zmpop")
                .arg(keys.len())
                .args(keys.iter().copied())
                .arg(order)
                .arg("count")
                .arg(count),
        )
    }

    /// `ZSCAN key cursor [MATCH pattern] [COUNT count]`
    fn zscan(&self, key: &str, cursor: u64, pattern: &str, count: i64) -> ScanCmd {
        self.process(with_scan_clauses(
            Command::new("zscan").arg(key).arg(cursor),
            pattern,
            count,
        ))
    }
}

impl<C: Cmdable> SortedSetCommands for C {}
