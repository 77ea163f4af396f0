use super::{Cmdable, with_scan_clauses};
use crate::command::Command;
use crate::reply::{
    BoolCmd, FloatCmd, IntCmd, KeyValueSliceCmd, MapStringStringCmd, ScanCmd, SliceCmd,
    StringCmd, StringSliceCmd,
};

/// Hash commands.
pub trait HashCommands: Cmdable {
    /// `HGET key field`
    fn hget(&self, key: &str, field: &str) -> StringCmd {
        self.process(Command::new("hget").arg(key).arg(field))
    }

    /// `HSET key field value [field value ...]`
    fn hset(&self, key: &str, fields: &[(&str, &str)]) -> IntCmd {
        let cmd = fields
            .iter()
            .fold(Command::new("hset").arg(key), |cmd, (f, v)| cmd.arg(*f).arg(*v));
        self.process(cmd)
    }

    /// `HGETALL key`
    fn hget_all(&self, key: &str) -> MapStringStringCmd {
        self.process(Command::new("hgetall").arg(key))
    }

    /// `HDEL key field [field ...]`
    fn hdel(&self, key: &str, fields: &[&str]) -> IntCmd {
        self.process(Command::new("hdel").arg(key).args(fields.iter().copied()))
    }

    /// `HEXISTS key field`
    fn hexists(&self, key: &str, field: &str) -> BoolCmd {
        self.process(Command::new("hexists").arg(key).arg(field))
    }

    /// `HKEYS key`
    fn hkeys(&self, key: &str) -> StringSliceCmd {
        self.process(Command::new("hkeys").arg(key))
    }

    /// `HMGET key field [field ...]`
    fn hmget(&self, key: &str, fields: &[&str]) -> SliceCmd {
        self.process(Command::new("hmget").arg(key).args(fields.iter().copied()))
    }

    /// `HINCRBY key field increment`
    fn hincr_by(&self, key: &str, field: &str, increment: i64) -> IntCmd {
        self.process(Command::new("hincrby").arg(key).arg(field).arg(increment))
    }

    /// `HINCRBYFLOAT key field increment`
    fn hincr_by_float(&self, key: &str, field: &str, increment: f64) -> FloatCmd {
        self.process(
            Command::new("hincrbyfloat")
                .arg(key)
                .arg(field)
                .arg(increment),
        )
    }

    /// `HSCAN key cursor [MATCH pattern] [COUNT count]`
    fn hscan(&self, key: &str, cursor: u64, pattern: &str, count: i64) -> ScanCmd {
        self.process(with_scan_clauses(
            Command::new("hscan").arg(key).arg(cursor),
            pattern,
            count,
        ))
    }

    /// `HRANDFIELD key count WITHVALUES`
    fn hrand_field_with_values(&self, key: &str, count: i64) -> KeyValueSliceCmd {
        self.process(
            Command::new("hrandfield")
                .arg(key)
                .arg(count)
                .arg("withvalues"),
        )
    }
}

impl<C: Cmdable> HashCommands for C {}
