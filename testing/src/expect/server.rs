use crate::expected::{
    ExpectedInt, ExpectedKeyFlags, ExpectedMapStringString, ExpectedSlowLog, ExpectedStatus,
    ExpectedString, ExpectedTime,
};
use crate::handle::MockHandle;
use respmock_core::commands::ServerCommands;

impl MockHandle {
    /// Expect `PING`.
    pub fn expect_ping(&self) -> ExpectedStatus {
        self.expect(ServerCommands::ping)
    }

    /// Expect `ECHO`.
    pub fn expect_echo(&self, message: &str) -> ExpectedString {
        self.expect(|c| c.echo(message))
    }

    /// Expect `TIME`.
    pub fn expect_time(&self) -> ExpectedTime {
        self.expect(ServerCommands::time)
    }

    /// Expect `DBSIZE`.
    pub fn expect_db_size(&self) -> ExpectedInt {
        self.expect(ServerCommands::db_size)
    }

    /// Expect `FLUSHDB`.
    pub fn expect_flush_db(&self) -> ExpectedStatus {
        self.expect(ServerCommands::flush_db)
    }

    /// Expect `INFO`.
    pub fn expect_info(&self, sections: &[&str]) -> ExpectedString {
        self.expect(|c| c.info(sections))
    }

    /// Expect `CONFIG GET`.
    pub fn expect_config_get(&self, parameter: &str) -> ExpectedMapStringString {
        self.expect(|c| c.config_get(parameter))
    }

    /// Expect `CONFIG SET`.
    pub fn expect_config_set(&self, parameter: &str, value: &str) -> ExpectedStatus {
        self.expect(|c| c.config_set(parameter, value))
    }

    /// Expect `SLOWLOG GET`.
    pub fn expect_slow_log_get(&self, count: i64) -> ExpectedSlowLog {
        self.expect(|c| c.slow_log_get(count))
    }

    /// Expect `MEMORY USAGE`.
    pub fn expect_memory_usage(&self, key: &str) -> ExpectedInt {
        self.expect(|c| c.memory_usage(key))
    }

    /// Expect `CLIENT LIST`.
    pub fn expect_client_list(&self) -> ExpectedString {
        self.expect(ServerCommands::client_list)
    }

    /// Expect `COMMAND GETKEYSANDFLAGS`.
    pub fn expect_command_get_keys_and_flags(&self, command: &[&str]) -> ExpectedKeyFlags {
        self.expect(|c| c.command_get_keys_and_flags(command))
    }
}
