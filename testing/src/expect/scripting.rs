use crate::expected::{ExpectedBoolSlice, ExpectedCmd, ExpectedFunctionList, ExpectedString};
use crate::handle::MockHandle;
use respmock_core::commands::{FunctionListQuery, ScriptingCommands};

impl MockHandle {
    /// Expect `EVAL`.
    pub fn expect_eval(&self, script: &str, keys: &[&str], args: &[&str]) -> ExpectedCmd {
        self.expect(|c| c.eval(script, keys, args))
    }

    /// Expect `EVALSHA`.
    pub fn expect_eval_sha(&self, sha1: &str, keys: &[&str], args: &[&str]) -> ExpectedCmd {
        self.expect(|c| c.eval_sha(sha1, keys, args))
    }

    /// Expect `SCRIPT EXISTS`.
    pub fn expect_script_exists(&self, hashes: &[&str]) -> ExpectedBoolSlice {
        self.expect(|c| c.script_exists(hashes))
    }

    /// Expect `SCRIPT LOAD`.
    pub fn expect_script_load(&self, script: &str) -> ExpectedString {
        self.expect(|c| c.script_load(script))
    }

    /// Expect `FCALL`.
    pub fn expect_fcall(&self, function: &str, keys: &[&str], args: &[&str]) -> ExpectedCmd {
        self.expect(|c| c.fcall(function, keys, args))
    }

    /// Expect `FUNCTION LOAD`.
    pub fn expect_function_load(&self, code: &str) -> ExpectedString {
        self.expect(|c| c.function_load(code))
    }

    /// Expect `FUNCTION LIST`.
    pub fn expect_function_list(&self, query: &FunctionListQuery) -> ExpectedFunctionList {
        self.expect(|c| c.function_list(query))
    }
}
