use super::{Cmdable, with_scan_clauses};
use crate::command::Command;
use crate::reply::{BoolCmd, BoolSliceCmd, IntCmd, ScanCmd, StringSliceCmd, StringStructMapCmd};

/// Set commands.
pub trait SetCommands: Cmdable {
    /// `SADD key member [member ...]`
    fn sadd(&self, key: &str, members: &[&str]) -> IntCmd {
        self.process(Command::new("sadd").arg(key).args(members.iter().copied()))
    }

    /// `SREM key member [member ...]`
    fn srem(&self, key: &str, members: &[&str]) -> IntCmd {
        self.process(Command::new("srem").arg(key).args(members.iter().copied()))
    }

    /// `SMEMBERS key`
    fn smembers(&self, key: &str) -> StringSliceCmd {
        self.process(Command::new("smembers").arg(key))
    }

    /// `SMEMBERS key`, collected into a set
    fn smembers_map(&self, key: &str) -> StringStructMapCmd {
        self.process(Command::new("smembers").arg(key))
    }

    /// `SISMEMBER key member`
    fn sismember(&self, key: &str, member: &str) -> BoolCmd {
        self.process(Command::new("sismember").arg(key).arg(member))
    }

    /// `SMISMEMBER key member [member ...]`
    fn smismember(&self, key: &str, members: &[&str]) -> BoolSliceCmd {
        self.process(
            Command::new("smismember")
                .arg(key)
                .args(members.iter().copied()),
        )
    }

    /// `SCARD key`
    fn scard(&self, key: &str) -> IntCmd {
        self.process(Command::new("scard").arg(key))
    }

    /// `SSCAN key cursor [MATCH pattern] [COUNT count]`
    fn sscan(&self, key: &str, cursor: u64, pattern: &str, count: i64) -> ScanCmd {
        self.process(with_scan_clauses(
            Command::new("sscan").arg(key).arg(cursor),
            pattern,
            count,
        ))
    }
}

impl<C: Cmdable> SetCommands for C {}
