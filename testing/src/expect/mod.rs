//! `expect_*` registration methods of [`MockHandle`](crate::MockHandle), one per
//! client command, grouped by command family.
//!
//! Every method takes the same arguments as the client method it mirrors and
//! builds the expected command through it, so an expectation and the call it is
//! meant for always normalize to the same command.

mod cluster;
mod geo;
mod hashes;
mod keys;
mod lists;
mod pubsub;
mod scripting;
mod server;
mod sets;
mod sorted_sets;
mod streams;
mod strings;
