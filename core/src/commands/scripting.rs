use super::Cmdable;
use crate::command::{Arg, Command};
use crate::reply::{BoolSliceCmd, Cmd, FunctionListCmd, StringCmd};

/// Arguments of `FUNCTION LIST`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionListQuery {
    /// Only libraries whose name matches (`LIBRARYNAME`); empty omits the clause
    pub library_name_pattern: String,
    /// Include the library source (`WITHCODE`)
    pub with_code: bool,
}

fn script_call(name: &str, script: &str, keys: &[&str], args: &[&str]) -> Command {
    Command::new(name)
        .arg(script)
        .arg(keys.len())
        .args(keys.iter().copied())
        .args(args.iter().copied())
}

/// Lua scripting, functions and raw commands.
pub trait ScriptingCommands: Cmdable {
    /// `EVAL script numkeys key [key ...] arg [arg ...]`
    fn eval(&self, script: &str, keys: &[&str], args: &[&str]) -> Cmd {
        self.process(script_call("eval", script, keys, args))
    }

    /// `EVALSHA sha1 numkeys key [key ...] arg [arg ...]`
    fn eval_sha(&self, sha1: &str, keys: &[&str], args: &[&str]) -> Cmd {
        self.process(script_call("evalsha", sha1, keys, args))
    }

    /// `SCRIPT EXISTS sha1 [sha1 ...]`
    fn script_exists(&self, hashes: &[&str]) -> BoolSliceCmd {
        self.process(
            Command::new("script")
                .arg("exists")
                .args(hashes.iter().copied()),
        )
    }

    /// `SCRIPT LOAD script`
    fn script_load(&self, script: &str) -> StringCmd {
        self.process(Command::new("script").arg("load").arg(script))
    }

    /// `FCALL function numkeys key [key ...] arg [arg ...]`
    fn fcall(&self, function: &str, keys: &[&str], args: &[&str]) -> Cmd {
        self.process(script_call("fcall", function, keys, args))
    }

    /// `FUNCTION LOAD code`
    fn function_load(&self, code: &str) -> StringCmd {
        self.process(Command::new("function").arg("load").arg(code))
    }

    /// `FUNCTION LIST [LIBRARYNAME pattern] [WITHCODE]`
    fn function_list(&self, query: &FunctionListQuery) -> FunctionListCmd {
        let cmd = Command::new("function").arg("list");
        let cmd = if query.library_name_pattern.is_empty() {
            cmd
        } else {
            cmd.arg("libraryname").arg(&query.library_name_pattern)
        };
        self.process(cmd.arg_if(query.with_code, "withcode"))
    }

    /// Any command, given as a raw argument vector whose first element is the name.
    fn do_command(&self, args: &[Arg]) -> Cmd {
        self.process(Command::from_raw(args))
    }
}

impl<C: Cmdable> ScriptingCommands for C {}
