use super::{Cmdable, with_scan_clauses};
use crate::command::Command;
use crate::reply::{BoolCmd, DurationCmd, IntCmd, ScanCmd, StatusCmd, StringSliceCmd};
use std::time::Duration;

/// Generic key commands.
pub trait KeyCommands: Cmdable {
    /// `DEL key [key ...]`
    fn del(&self, keys: &[&str]) -> IntCmd {
        self.process(Command::new("del").args(keys.iter().copied()))
    }

    /// `EXISTS key [key ...]`
    fn exists(&self, keys: &[&str]) -> IntCmd {
        self.process(Command::new("exists").args(keys.iter().copied()))
    }

    /// `EXPIRE key seconds`
    fn expire(&self, key: &str, expiration: Duration) -> BoolCmd {
        self.process(Command::new("expire").arg(key).arg(expiration.as_secs()))
    }

    /// `TTL key`
    fn ttl(&self, key: &str) -> DurationCmd {
        self.process(Command::new("ttl").arg(key))
    }

    /// `PTTL key`
    fn pttl(&self, key: &str) -> DurationCmd {
        self.process(Command::new("pttl").arg(key))
    }

    /// `KEYS pattern`
    fn keys(&self, pattern: &str) -> StringSliceCmd {
        self.process(Command::new("keys").arg(pattern))
    }

    /// `SCAN cursor [MATCH pattern] [COUNT count]`
    ///
    /// An empty `pattern` or a non-positive `count` omits the clause.
    fn scan(&self, cursor: u64, pattern: &str, count: i64) -> ScanCmd {
        self.process(with_scan_clauses(
            Command::new("scan").arg(cursor),
            pattern,
            count,
        ))
    }

    /// `TYPE key`
    fn key_type(&self, key: &str) -> StatusCmd {
        self.process(Command::new("type").arg(key))
    }

    /// `RENAME key newkey`
    fn rename(&self, key: &str, new_key: &str) -> StatusCmd {
        self.process(Command::new("rename").arg(key).arg(new_key))
    }

    /// `OBJECT IDLETIME key`
    fn object_idle_time(&self, key: &str) -> DurationCmd {
        self.process(Command::new("object").arg("idletime").arg(key))
    }
}

impl<C: Cmdable> KeyCommands for C {}
