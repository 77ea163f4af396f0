use crate::expected::{
    ExpectedInt, ExpectedStatus, ExpectedString, ExpectedXAutoClaim, ExpectedXAutoClaimJustId,
    ExpectedXInfoConsumers, ExpectedXInfoGroups, ExpectedXInfoStream, ExpectedXInfoStreamFull,
    ExpectedXMessageSlice, ExpectedXPending, ExpectedXPendingExt, ExpectedXStreamSlice,
};
use crate::handle::MockHandle;
use respmock_core::commands::{
    StreamCommands, XAddArgs, XAutoClaimArgs, XPendingExtArgs, XReadArgs, XReadGroupArgs,
};

impl MockHandle {
    /// Expect `XADD`.
    pub fn expect_xadd(&self, args: &XAddArgs) -> ExpectedString {
        self.expect(|c| c.xadd(args))
    }

    /// Expect `XLEN`.
    pub fn expect_xlen(&self, stream: &str) -> ExpectedInt {
        self.expect(|c| c.xlen(stream))
    }

    /// Expect `XRANGE`.
    pub fn expect_xrange(&self, stream: &str, start: &str, end: &str) -> ExpectedXMessageSlice {
        self.expect(|c| c.xrange(stream, start, end))
    }

    /// Expect `XREVRANGE`.
    pub fn expect_xrev_range(&self, stream: &str, end: &str, start: &str) -> ExpectedXMessageSlice {
        self.expect(|c| c.xrev_range(stream, end, start))
    }

    /// Expect `XREAD`.
    pub fn expect_xread(&self, args: &XReadArgs) -> ExpectedXStreamSlice {
        self.expect(|c| c.xread(args))
    }

    /// Expect `XREADGROUP`.
    pub fn expect_xread_group(&self, args: &XReadGroupArgs) -> ExpectedXStreamSlice {
        self.expect(|c| c.xread_group(args))
    }

    /// Expect `XACK`.
    pub fn expect_xack(&self, stream: &str, group: &str, ids: &[&str]) -> ExpectedInt {
        self.expect(|c| c.xack(stream, group, ids))
    }

    /// Expect `XGROUP CREATE`.
    pub fn expect_xgroup_create(&self, stream: &str, group: &str, start: &str) -> ExpectedStatus {
        self.expect(|c| c.xgroup_create(stream, group, start))
    }

    /// Expect the `XPENDING` summary form.
    pub fn expect_xpending(&self, stream: &str, group: &str) -> ExpectedXPending {
        self.expect(|c| c.xpending(stream, group))
    }

    /// Expect the `XPENDING` extended form.
    pub fn expect_xpending_ext(&self, args: &XPendingExtArgs) -> ExpectedXPendingExt {
        self.expect(|c| c.xpending_ext(args))
    }

    /// Expect `XAUTOCLAIM`.
    pub fn expect_xautoclaim(&self, args: &XAutoClaimArgs) -> ExpectedXAutoClaim {
        self.expect(|c| c.xautoclaim(args))
    }

    /// Expect `XAUTOCLAIM ... JUSTID`.
    pub fn expect_xautoclaim_just_id(&self, args: &XAutoClaimArgs) -> ExpectedXAutoClaimJustId {
        self.expect(|c| c.xautoclaim_just_id(args))
    }

    /// Expect `XINFO GROUPS`.
    pub fn expect_xinfo_groups(&self, stream: &str) -> ExpectedXInfoGroups {
        self.expect(|c| c.xinfo_groups(stream))
    }

    /// Expect `XINFO STREAM`.
    pub fn expect_xinfo_stream(&self, stream: &str) -> ExpectedXInfoStream {
        self.expect(|c| c.xinfo_stream(stream))
    }

    /// Expect `XINFO CONSUMERS`.
    pub fn expect_xinfo_consumers(&self, stream: &str, group: &str) -> ExpectedXInfoConsumers {
        self.expect(|c| c.xinfo_consumers(stream, group))
    }

    /// Expect `XINFO STREAM ... FULL`.
    pub fn expect_xinfo_stream_full(&self, stream: &str, count: i64) -> ExpectedXInfoStreamFull {
        self.expect(|c| c.xinfo_stream_full(stream, count))
    }
}
