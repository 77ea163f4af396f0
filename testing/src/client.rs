//! The mock client.

use crate::registry::SharedRegistry;
use respmock_core::{Cmdable, Command, Error, Reply, ReplyShape};

/// A [`Cmdable`] that answers every call from the expectations of its
/// [`MockHandle`](crate::MockHandle).
///
/// Cloning is cheap; clones share the same expectations and can be moved to other
/// threads or tasks.
#[derive(Debug, Clone)]
pub struct MockClient {
    registry: SharedRegistry,
    log_calls: bool,
}

impl MockClient {
    pub(crate) const fn new(registry: SharedRegistry, log_calls: bool) -> Self {
        Self {
            registry,
            log_calls,
        }
    }
}

impl Cmdable for MockClient {
    fn process<T: ReplyShape>(&self, cmd: Command) -> Reply<T> {
        let resolved = self.registry.lock().resolve::<T>(&cmd);
        let mut reply = Reply::new(cmd);

        match resolved {
            Ok(cell) => {
                if self.log_calls {
                    tracing::debug!(command = %reply.command(), "Call matched expectation");
                }
                match cell.result() {
                    Ok(val) => reply.set_val(val),
                    Err(err) => reply.set_err(err),
                }
            }
            Err(err) => {
                if self.log_calls {
                    tracing::warn!(command = %reply.command(), error = %err, "Call rejected by mock");
                }
                reply.set_err(Error::custom(err));
            }
        }
        reply
    }
}
