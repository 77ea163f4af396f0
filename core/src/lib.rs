//! # respmock core
//!
//! The client-side contract shared by a real key-value client and its test double.
//!
//! This crate provides:
//! - [`Command`] and [`Arg`]: a normalized command (lower-case name plus ordered arguments)
//! - [`Reply`]: the object every command returns, read through [`Reply::result`]
//! - [`Error`]: the client error, including the backend `nil` reply
//! - [`types`]: every reply shape (scalars, sequences, stream records, geo results, ...)
//! - [`Cmdable`] and the per-family extension traits in [`commands`]
//!
//! A client only has to implement [`Cmdable::process`]; every command method
//! (`get`, `xadd`, `cluster_shards`, ...) is provided by the extension traits and
//! funnels into it.
//!
//! ## Example
//!
//! ```
//! use respmock_core::prelude::*;
//!
//! fn cached_name<C: Cmdable>(client: &C, id: u64) -> Result<String> {
//!     match client.get(&format!("user:{id}:name")).result() {
//!         Ok(name) => Ok(name),
//!         Err(Error::Nil) => Ok(String::from("anonymous")),
//!         Err(e) => Err(e),
//!     }
//! }
//! ```

pub mod command;
pub mod commands;
pub mod error;
pub mod reply;
pub mod types;
pub mod value;

pub use command::{Arg, Command};
pub use commands::Cmdable;
pub use error::{Error, Result};
pub use reply::{Reply, ReplyShape};
pub use value::Value;

/// Everything a caller needs to issue commands: the interface, every command
/// family, the reply object and the error type.
pub mod prelude {
    pub use crate::command::{Arg, Command};
    pub use crate::commands::{
        Cmdable, ClusterCommands, GeoCommands, HashCommands, KeyCommands, ListCommands,
        PubSubCommands, ScriptingCommands, ServerCommands, SetCommands, SortedSetCommands,
        StreamCommands, StringCommands,
    };
    pub use crate::error::{Error, Result};
    pub use crate::reply::{Reply, ReplyShape};
    pub use crate::value::Value;
}
