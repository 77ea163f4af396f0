use super::Cmdable;
use crate::command::Command;
use crate::reply::{
    IntCmd, KeyFlagsCmd, MapStringStringCmd, SlowLogCmd, StatusCmd, StringCmd, TimeCmd,
};

/// Connection and server administration commands.
pub trait ServerCommands: Cmdable {
    /// `PING`
    fn ping(&self) -> StatusCmd {
        self.process(Command::new("ping"))
    }

    /// `ECHO message`
    fn echo(&self, message: &str) -> StringCmd {
        self.process(Command::new("echo").arg(message))
    }

    /// `TIME`
    fn time(&self) -> TimeCmd {
        self.process(Command::new("time"))
    }

    /// `DBSIZE`
    fn db_size(&self) -> IntCmd {
        self.process(Command::new("dbsize"))
    }

    /// `FLUSHDB`
    fn flush_db(&self) -> StatusCmd {
        self.process(Command::new("flushdb"))
    }

    /// `INFO [section ...]`
    fn info(&self, sections: &[&str]) -> StringCmd {
        self.process(Command::new("info").args(sections.iter().copied()))
    }

    /// `CONFIG GET parameter`
    fn config_get(&self, parameter: &str) -> MapStringStringCmd {
        self.process(Command::new("config").arg("get").arg(parameter))
    }

    /// `CONFIG SET parameter value`
    fn config_set(&self, parameter: &str, value: &str) -> StatusCmd {
        self.process(Command::new("config").arg("set").arg(parameter).arg(value))
    }

    /// `SLOWLOG GET count`
    fn slow_log_get(&self, count: i64) -> SlowLogCmd {
        self.process(Command::new("slowlog").arg("get").arg(count))
    }

    /// `MEMORY USAGE key`
    fn memory_usage(&self, key: &str) -> IntCmd {
        self.process(Command::new("memory").arg("usage").arg(key))
    }

    /// `CLIENT LIST`
    fn client_list(&self) -> StringCmd {
        self.process(Command::new("client").arg("list"))
    }

    /// `COMMAND GETKEYSANDFLAGS command [arg ...]`
    fn command_get_keys_and_flags(&self, command: &[&str]) -> KeyFlagsCmd {
        self.process(
            Command::new("command")
                .arg("getkeysandflags")
                .args(command.iter().copied()),
        )
    }
}

impl<C: Cmdable> ServerCommands for C {}
