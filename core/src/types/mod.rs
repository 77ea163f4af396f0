//! Reply shapes.
//!
//! Plain data mirroring the backend's reply families. The client and the test double
//! carry these through unchanged; nothing in this crate interprets their contents.
//! Every shape is serializable so captured replies can be stored as fixtures.

mod cluster;
mod geo;
mod server;
mod sorted_set;
mod stream;
mod string;

pub use cluster::{ClusterLink, ClusterNode, ClusterShard, ClusterSlot, ShardNode, SlotRange};
pub use geo::{GeoLocation, GeoPos};
pub use server::{Function, KeyFlags, Library, SlowLog};
pub use sorted_set::{Z, ZWithKey};
pub use stream::{
    XInfoConsumer, XInfoGroup, XInfoStream, XInfoStreamConsumer, XInfoStreamConsumerPending,
    XInfoStreamFull, XInfoStreamGroup, XInfoStreamGroupPending, XMessage, XPending, XPendingExt,
    XStream,
};
pub use string::{KeyValue, LcsMatch, LcsMatchedPosition, LcsPosition};
