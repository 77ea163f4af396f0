use super::{Cmdable, timeout_secs};
use crate::command::Command;
use crate::reply::{IntCmd, KeyValuesCmd, StringCmd, StringSliceCmd};
use std::time::Duration;

/// List commands.
pub trait ListCommands: Cmdable {
    /// `LPUSH key element [element ...]`
    fn lpush(&self, key: &str, values: &[&str]) -> IntCmd {
        self.process(Command::new("lpush").arg(key).args(values.iter().copied()))
    }

    /// `RPUSH key element [element ...]`
    fn rpush(&self, key: &str, values: &[&str]) -> IntCmd {
        self.process(Command::new("rpush").arg(key).args(values.iter().copied()))
    }

    /// `LPOP key`
    fn lpop(&self, key: &str) -> StringCmd {
        self.process(Command::new("lpop").arg(key))
    }

    /// `RPOP key`
    fn rpop(&self, key: &str) -> StringCmd {
        self.process(Command::new("rpop").arg(key))
    }

    /// `LRANGE key start stop`
    fn lrange(&self, key: &str, start: i64, stop: i64) -> StringSliceCmd {
        self.process(Command::new("lrange").arg(key).arg(start).arg(stop))
    }

    /// `LLEN key`
    fn llen(&self, key: &str) -> IntCmd {
        self.process(Command::new("llen").arg(key))
    }

    /// `LINDEX key index`
    fn lindex(&self, key: &str, index: i64) -> StringCmd {
        self.process(Command::new("lindex").arg(key).arg(index))
    }

    /// `BLPOP key [key ...] timeout`
    fn blpop(&self, timeout: Duration, keys: &[&str]) -> StringSliceCmd {
        self.process(
            Command::new("blpop")
                .args(keys.iter().copied())
                .arg(timeout_secs(timeout)),
        )
    }

    /// `LMPOP numkeys key [key ...] LEFT|RIGHT COUNT count`
    fn lmpop(&self, direction: &str, count: i64, keys: &[&str]) -> KeyValuesCmd {
        self.process(
            Command::new("lmpop")
                .arg(keys.len())
                .args(keys.iter().copied())
                .arg(direction)
                .arg("count")
                .arg(count),
        )
    }
}

impl<C: Cmdable> ListCommands for C {}
