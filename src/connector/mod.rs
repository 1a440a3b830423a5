//! Remote command channel to a Junos device.
//!
//! The RPC client never talks to the network directly. It hands a CLI command
//! to a [`CommandChannel`] bound to one target and gets the raw reply bytes
//! back. Two implementations ship with the crate:
//!
//! - [`SshChannel`] runs each command through the system OpenSSH client
//! - [`MockChannel`] replays canned XML replies for tests
//!
//! A channel instance carries at most one command at a time. Callers that
//! scrape several targets in parallel use one channel per target.

pub mod mock;
mod ssh;

pub use mock::MockChannel;
pub use ssh::SshChannel;

/// Errors returned by a command channel.
#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    /// The ssh client process could not be started.
    #[error("failed to start ssh for {host}: {source}")]
    Spawn {
        host: String,
        #[source]
        source: std::io::Error,
    },

    /// The ssh session to the device could not be established.
    #[error("cannot reach {host}: {stderr}")]
    Connect { host: String, stderr: String },

    /// The remote command exited unsuccessfully.
    #[error("command on {host} failed ({status}): {stderr}")]
    CommandFailed {
        host: String,
        status: String,
        stderr: String,
    },

    /// Mock channel has no reply for the command, or a failure was injected.
    #[error("mock channel: {0}")]
    Mock(String),
}

impl ChannelError {
    /// True when the device could not be reached at all, as opposed to a
    /// single command failing. Further commands to the same target are
    /// expected to fail the same way.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::Spawn { .. } | Self::Connect { .. })
    }
}

/// Executes CLI commands on a single device.
///
/// Implementations must be safe to share between threads, but the RPC layer
/// only ever issues one command per channel at a time.
pub trait CommandChannel: Send + Sync {
    /// Device identity used as the `target` label.
    fn host(&self) -> &str;

    /// Runs `command` on the device and returns its raw output.
    fn run_command(&self, command: &str) -> Result<Vec<u8>, ChannelError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_error_display() {
        let err = ChannelError::CommandFailed {
            host: "r1".to_string(),
            status: "exit status: 255".to_string(),
            stderr: "Permission denied (publickey)".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "command on r1 failed (exit status: 255): Permission denied (publickey)"
        );
    }

    #[test]
    fn test_is_unreachable() {
        let connect = ChannelError::Connect {
            host: "r1".to_string(),
            stderr: "No route to host".to_string(),
        };
        assert!(connect.is_unreachable());
        assert!(!ChannelError::Mock("timeout".to_string()).is_unreachable());
        assert!(!ChannelError::CommandFailed {
            host: "r1".to_string(),
            status: "exit status: 1".to_string(),
            stderr: "syntax error".to_string(),
        }
        .is_unreachable());
    }
}
