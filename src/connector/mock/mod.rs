//! Mock command channel for testing.
//!
//! This module provides `MockChannel` and pre-built device scenarios so the
//! RPC client and the exporter can be exercised without a reachable router.

mod channel;
pub mod scenarios;

pub use channel::MockChannel;
