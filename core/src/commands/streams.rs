use super::{Cmdable, millis};
use crate::command::Command;
use crate::reply::{
    IntCmd, StatusCmd, StringCmd, XAutoClaimCmd, XAutoClaimJustIdCmd, XInfoConsumersCmd,
    XInfoGroupsCmd, XInfoStreamCmd, XInfoStreamFullCmd, XMessageSliceCmd, XPendingCmd,
    XPendingExtCmd, XStreamSliceCmd,
};
use std::time::Duration;

/// Arguments of `XADD`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XAddArgs {
    /// Stream key
    pub stream: String,
    /// Do not create the stream if it is missing (`NOMKSTREAM`)
    pub no_mk_stream: bool,
    /// Trim to this length (`MAXLEN`)
    pub max_len: Option<i64>,
    /// Allow approximate trimming (`~`)
    pub approx: bool,
    /// Entry id; empty means `*`
    pub id: String,
    /// Field/value pairs
    pub values: Vec<(String, String)>,
}

/// Arguments of `XREAD`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XReadArgs {
    /// Stream keys followed by one id per key
    pub streams: Vec<String>,
    /// Maximum entries per stream
    pub count: Option<i64>,
    /// Block for at most this long
    pub block: Option<Duration>,
}

/// Arguments of `XREADGROUP`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XReadGroupArgs {
    /// Consumer group
    pub group: String,
    /// Consumer name
    pub consumer: String,
    /// Stream keys followed by one id per key
    pub streams: Vec<String>,
    /// Maximum entries per stream
    pub count: Option<i64>,
    /// Block for at most this long
    pub block: Option<Duration>,
    /// Skip the pending entries list (`NOACK`)
    pub no_ack: bool,
}

/// Arguments of the extended form of `XPENDING`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XPendingExtArgs {
    /// Stream key
    pub stream: String,
    /// Consumer group
    pub group: String,
    /// Only entries idle for at least this long (`IDLE`)
    pub idle: Option<Duration>,
    /// Smallest id
    pub start: String,
    /// Greatest id
    pub end: String,
    /// Maximum rows
    pub count: i64,
    /// Restrict to one consumer
    pub consumer: Option<String>,
}

/// Arguments of `XAUTOCLAIM`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XAutoClaimArgs {
    /// Stream key
    pub stream: String,
    /// Consumer group
    pub group: String,
    /// Claiming consumer
    pub consumer: String,
    /// Minimum idle time of claimed entries
    pub min_idle: Duration,
    /// Id to start scanning from
    pub start: String,
    /// Maximum entries to claim
    pub count: Option<i64>,
}

fn xautoclaim_command(args: &XAutoClaimArgs) -> Command {
    let cmd = Command::new("xautoclaim")
        .arg(&args.stream)
        .arg(&args.group)
        .arg(&args.consumer)
        .arg(millis(args.min_idle))
        .arg(&args.start);
    match args.count {
        Some(count) => cmd.arg("count").arg(count),
        None => cmd,
    }
}

fn read_clauses(cmd: Command, count: Option<i64>, block: Option<Duration>) -> Command {
    let cmd = match count {
        Some(count) => cmd.arg("count").arg(count),
        None => cmd,
    };
    match block {
        Some(block) => cmd.arg("block").arg(millis(block)),
        None => cmd,
    }
}

/// Stream commands.
pub trait StreamCommands: Cmdable {
    /// `XADD key [NOMKSTREAM] [MAXLEN [~] n] id field value [field value ...]`
    fn xadd(&self, args: &XAddArgs) -> StringCmd {
        let cmd = Command::new("xadd")
            .arg(&args.stream)
            .arg_if(args.no_mk_stream, "nomkstream");
        let cmd = match args.max_len {
            Some(max_len) => cmd.arg("maxlen").arg_if(args.approx, "~").arg(max_len),
            None => cmd,
        };
        let id = if args.id.is_empty() { "*" } else { args.id.as_str() };
        let cmd = args
            .values
            .iter()
            .fold(cmd.arg(id), |cmd, (field, value)| cmd.arg(field).arg(value));
        self.process(cmd)
    }

    /// `XLEN key`
    fn xlen(&self, stream: &str) -> IntCmd {
        self.process(Command::new("xlen").arg(stream))
    }

    /// `XRANGE key start end`
    fn xrange(&self, stream: &str, start: &str, end: &str) -> XMessageSliceCmd {
        self.process(Command::new("xrange").arg(stream).arg(start).arg(end))
    }

    /// `XREVRANGE key end start`
    fn xrev_range(&self, stream: &str, end: &str, start: &str) -> XMessageSliceCmd {
        self.process(Command::new("xrevrange").arg(stream).arg(end).arg(start))
    }

    /// `XREAD [COUNT count] [BLOCK ms] STREAMS key [key ...] id [id ...]`
    fn xread(&self, args: &XReadArgs) -> XStreamSliceCmd {
        let cmd = read_clauses(Command::new("xread"), args.count, args.block);
        self.process(cmd.arg("streams").args(args.streams.iter()))
    }

    /// `XREADGROUP GROUP group consumer [COUNT count] [BLOCK ms] [NOACK] STREAMS ...`
    fn xread_group(&self, args: &XReadGroupArgs) -> XStreamSliceCmd {
        let cmd = Command::new("xreadgroup")
            .arg("group")
            .arg(&args.group)
            .arg(&args.consumer);
        let cmd = read_clauses(cmd, args.count, args.block).arg_if(args.no_ack, "noack");
        self.process(cmd.arg("streams").args(args.streams.iter()))
    }

    /// `XACK key group id [id ...]`
    fn xack(&self, stream: &str, group: &str, ids: &[&str]) -> IntCmd {
        self.process(
            Command::new("xack")
                .arg(stream)
                .arg(group)
                .args(ids.iter().copied()),
        )
    }

    /// `XGROUP CREATE key group id`
    fn xgroup_create(&self, stream: &str, group: &str, start: &str) -> StatusCmd {
        self.process(
            Command::new("xgroup")
                .arg("create")
                .arg(stream)
                .arg(group)
                .arg(start),
        )
    }

    /// `XPENDING key group`
    fn xpending(&self, stream: &str, group: &str) -> XPendingCmd {
        self.process(Command::new("xpending").arg(stream).arg(group))
    }

    /// `XPENDING key group [IDLE ms] start end count [consumer]`
    fn xpending_ext(&self, args: &XPendingExtArgs) -> XPendingExtCmd {
        let cmd = Command::new("xpending").arg(&args.stream).arg(&args.group);
        let cmd = match args.idle {
            Some(idle) => cmd.arg("idle").arg(millis(idle)),
            None => cmd,
        };
        let cmd = cmd.arg(&args.start).arg(&args.end).arg(args.count);
        let cmd = match &args.consumer {
            Some(consumer) => cmd.arg(consumer),
            None => cmd,
        };
        self.process(cmd)
    }

    /// `XAUTOCLAIM key group consumer min-idle-time start [COUNT count]`
    fn xautoclaim(&self, args: &XAutoClaimArgs) -> XAutoClaimCmd {
        self.process(xautoclaim_command(args))
    }

    /// `XAUTOCLAIM ... JUSTID`
    fn xautoclaim_just_id(&self, args: &XAutoClaimArgs) -> XAutoClaimJustIdCmd {
        self.process(xautoclaim_command(args).arg("justid"))
    }

    /// `XINFO GROUPS key`
    fn xinfo_groups(&self, stream: &str) -> XInfoGroupsCmd {
        self.process(Command::new("xinfo").arg("groups").arg(stream))
    }

    /// `XINFO STREAM key`
    fn xinfo_stream(&self, stream: &str) -> XInfoStreamCmd {
        self.process(Command::new("xinfo").arg("stream").arg(stream))
    }

    /// `XINFO CONSUMERS key group`
    fn xinfo_consumers(&self, stream: &str, group: &str) -> XInfoConsumersCmd {
        self.process(
            Command::new("xinfo")
                .arg("consumers")
                .arg(stream)
                .arg(group),
        )
    }

    /// `XINFO STREAM key FULL [COUNT count]`; a non-positive `count` omits the clause
    fn xinfo_stream_full(&self, stream: &str, count: i64) -> XInfoStreamFullCmd {
        let cmd = Command::new("xinfo").arg("stream").arg(stream).arg("full");
        let cmd = if count > 0 { cmd.arg("count").arg(count) } else { cmd };
        self.process(cmd)
    }
}

impl<C: Cmdable> StreamCommands for C {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xautoclaim_command() {
        let args = XAutoClaimArgs {
            stream: "orders".to_string(),
            group: "billing".to_string(),
            consumer: "worker-1".to_string(),
            min_idle: Duration::from_secs(30),
            start: "0-0".to_string(),
            count: Some(10),
        };
        assert_eq!(
            xautoclaim_command(&args).to_string(),
            "xautoclaim orders billing worker-1 30000 0-0 count 10"
        );
    }

    #[test]
    fn test_read_clauses() {
        let cmd = read_clauses(Command::new("xread"), Some(2), Some(Duration::from_millis(250)));
        assert_eq!(cmd.to_string(), "xread count 2 block 250");
    }
}
