//! RPC client: CLI command in, normalized records out.
//!
//! Each domain call follows the same pipeline:
//!
//! ```text
//! command ──► CommandChannel ──► XML bytes ──► envelope ──► records
//!             (Transport)                     (Decode)     (mapping)
//! ```
//!
//! A failure at either stage aborts the call; no partial records are
//! returned.

mod client;
pub mod commands;
pub mod envelope;
mod filter;
mod mapping;

pub use client::RpcClient;
pub use filter::AlarmFilter;

use crate::connector::ChannelError;

/// Errors returned by [`RpcClient`] domain calls.
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    /// The channel could not run the command.
    #[error("`{command}` failed: {source}")]
    Transport {
        command: String,
        #[source]
        source: ChannelError,
    },

    /// The reply did not match the command's envelope.
    #[error("could not decode reply to `{command}`: {source}")]
    Decode {
        command: String,
        #[source]
        source: quick_xml::DeError,
    },
}

impl RpcError {
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// True when the device itself could not be reached.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::Transport { source, .. } if source.is_unreachable())
    }

    /// Command that produced the error.
    pub fn command(&self) -> &str {
        match self {
            Self::Transport { command, .. } | Self::Decode { command, .. } => command,
        }
    }
}
