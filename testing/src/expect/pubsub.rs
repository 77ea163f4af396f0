use crate::expected::{ExpectedInt, ExpectedMapStringInt, ExpectedStringSlice};
use crate::handle::MockHandle;
use respmock_core::commands::PubSubCommands;

impl MockHandle {
    /// Expect `PUBLISH`.
    pub fn expect_publish(&self, channel: &str, message: &str) -> ExpectedInt {
        self.expect(|c| c.publish(channel, message))
    }

    /// Expect `PUBSUB CHANNELS`.
    pub fn expect_pubsub_channels(&self, pattern: &str) -> ExpectedStringSlice {
        self.expect(|c| c.pubsub_channels(pattern))
    }

    /// Expect `PUBSUB NUMSUB`.
    pub fn expect_pubsub_numsub(&self, channels: &[&str]) -> ExpectedMapStringInt {
        self.expect(|c| c.pubsub_numsub(channels))
    }

    /// Expect `PUBSUB NUMPAT`.
    pub fn expect_pubsub_numpat(&self) -> ExpectedInt {
        self.expect(PubSubCommands::pubsub_numpat)
    }
}
