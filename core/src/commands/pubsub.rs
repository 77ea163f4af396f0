use super::Cmdable;
use crate::command::Command;
use crate::reply::{IntCmd, MapStringIntCmd, StringSliceCmd};

/// Pub/Sub introspection and publishing.
pub trait PubSubCommands: Cmdable {
    /// `PUBLISH channel message`
    fn publish(&self, channel: &str, message: &str) -> IntCmd {
        self.process(Command::new("publish").arg(channel).arg(message))
    }

    /// `PUBSUB CHANNELS [pattern]`
    fn pubsub_channels(&self, pattern: &str) -> StringSliceCmd {
        let cmd = Command::new("pubsub").arg("channels");
        let cmd = if pattern.is_empty() { cmd } else { cmd.arg(pattern) };
        self.process(cmd)
    }

    /// `PUBSUB NUMSUB [channel ...]`
    fn pubsub_numsub(&self, channels: &[&str]) -> MapStringIntCmd {
        self.process(
            Command::new("pubsub")
                .arg("numsub")
                .args(channels.iter().copied()),
        )
    }

    /// `PUBSUB NUMPAT`
    fn pubsub_numpat(&self) -> IntCmd {
        self.process(Command::new("pubsub").arg("numpat"))
    }
}

impl<C: Cmdable> PubSubCommands for C {}
