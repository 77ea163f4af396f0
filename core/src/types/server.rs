use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// An entry of `SLOWLOG GET`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlowLog {
    /// Unique, increasing id
    pub id: i64,
    /// When the command was processed
    pub time: DateTime<Utc>,
    /// Execution time
    pub duration: Duration,
    /// Command and arguments
    pub args: Vec<String>,
    /// Client `ip:port`
    pub client_addr: String,
    /// Client name set with `CLIENT SETNAME`
    pub client_name: String,
}

/// A function library (`FUNCTION LIST`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Library {
    /// Library name
    pub name: String,
    /// Engine, e.g. `LUA`
    pub engine: String,
    /// Functions exported by the library
    pub functions: Vec<Function>,
    /// Source code (`WITHCODE`)
    pub code: String,
}

/// A function of a [`Library`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Function {
    /// Function name
    pub name: String,
    /// Description
    pub description: String,
    /// Flags such as `no-writes`
    pub flags: Vec<String>,
}

/// Key name plus access flags (`COMMAND GETKEYSANDFLAGS`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyFlags {
    /// Key
    pub key: String,
    /// Flags such as `RW`, `access`, `update`
    pub flags: Vec<String>,
}
