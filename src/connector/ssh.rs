//! Command channel backed by the system OpenSSH client.

use std::process::{Command, ExitStatus};

use tracing::trace;

use crate::config::SshConfig;

use super::{ChannelError, CommandChannel};

/// Runs each command as `ssh <target> <command>`.
///
/// Authentication, host key checking and transport encryption are left to
/// OpenSSH and the user's `~/.ssh/config`. Batch mode is always on so a
/// missing key fails fast instead of prompting.
#[derive(Debug, Clone)]
pub struct SshChannel {
    /// Target as configured, used as the `target` label.
    target: String,
    /// Host part of the target.
    address: String,
    port: u16,
    config: SshConfig,
}

impl SshChannel {
    /// Creates a channel for `target`, which may be `host` or `host:port`.
    ///
    /// An explicit port in the target overrides `config.port`.
    pub fn new(target: impl Into<String>, config: &SshConfig) -> Self {
        let target = target.into();
        let (address, port) = split_target(&target, config.port);
        Self {
            address: address.to_string(),
            target,
            port,
            config: config.clone(),
        }
    }

    /// Builds the ssh invocation for `command` without running it.
    fn command(&self, command: &str) -> Command {
        let timeout = self.config.connect_timeout.as_secs().max(1);

        let mut cmd = Command::new("ssh");
        cmd.arg("-T")
            .args(["-o", "BatchMode=yes"])
            .arg("-o")
            .arg(format!("ConnectTimeout={}", timeout))
            .arg("-o")
            .arg(format!("ServerAliveInterval={}", timeout))
            .args(["-o", "ServerAliveCountMax=1"])
            .arg("-p")
            .arg(self.port.to_string());

        if !self.config.user.is_empty() {
            cmd.arg("-l").arg(&self.config.user);
        }
        if let Some(keyfile) = &self.config.keyfile {
            cmd.arg("-i").arg(keyfile);
        }

        cmd.arg(&self.address).arg(command);
        cmd
    }

    /// Classifies an unsuccessful exit. OpenSSH reports its own failures,
    /// connection errors included, with status 255.
    fn exit_error(&self, status: ExitStatus, stderr: &[u8]) -> ChannelError {
        let stderr = String::from_utf8_lossy(stderr).trim().to_string();
        if status.code() == Some(SSH_ERROR_STATUS) {
            return ChannelError::Connect {
                host: self.target.clone(),
                stderr,
            };
        }
        ChannelError::CommandFailed {
            host: self.target.clone(),
            status: status.to_string(),
            stderr,
        }
    }
}

const SSH_ERROR_STATUS: i32 = 255;

impl CommandChannel for SshChannel {
    fn host(&self) -> &str {
        &self.target
    }

    fn run_command(&self, command: &str) -> Result<Vec<u8>, ChannelError> {
        trace!("ssh {}:{} {:?}", self.address, self.port, command);

        let output = self
            .command(command)
            .output()
            .map_err(|source| ChannelError::Spawn {
                host: self.target.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(self.exit_error(output.status, &output.stderr));
        }

        Ok(output.stdout)
    }
}

/// Splits `host:port`. Anything that does not end in a numeric port,
/// including bare IPv6 addresses, is taken as a host name.
fn split_target(target: &str, default_port: u16) -> (&str, u16) {
    if let Some(inner) = target.strip_prefix('[')
        && let Some((host, rest)) = inner.split_once(']')
    {
        let port = rest
            .strip_prefix(':')
            .and_then(|p| p.parse().ok())
            .unwrap_or(default_port);
        return (host, port);
    }

    match target.rsplit_once(':') {
        Some((host, port)) if !host.contains(':') => match port.parse() {
            Ok(port) => (host, port),
            Err(_) => (target, default_port),
        },
        _ => (target, default_port),
    }
}
