//! In-memory command channel that replays canned replies.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::connector::{ChannelError, CommandChannel};

/// Canned reply for one command.
#[derive(Debug, Clone)]
enum Reply {
    Output(String),
    Failure(String),
    Unreachable(String),
}

/// Command channel backed by a map of command text to reply.
///
/// Commands are matched on their exact text, including any output directive
/// the caller appends. Every command received is recorded so tests can
/// assert on what was sent.
#[derive(Debug, Default)]
pub struct MockChannel {
    host: String,
    replies: HashMap<String, Reply>,
    calls: Mutex<Vec<String>>,
}

impl MockChannel {
    /// Creates an empty mock channel for `host`.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..Self::default()
        }
    }

    /// Registers the reply returned for `command`.
    pub fn add_response(&mut self, command: impl Into<String>, output: impl Into<String>) {
        self.replies
            .insert(command.into(), Reply::Output(output.into()));
    }

    /// Makes `command` fail with a transport error.
    pub fn fail_command(&mut self, command: impl Into<String>, message: impl Into<String>) {
        self.replies
            .insert(command.into(), Reply::Failure(message.into()));
    }

    /// Makes `command` fail as if the device could not be reached.
    pub fn fail_connect(&mut self, command: impl Into<String>, message: impl Into<String>) {
        self.replies
            .insert(command.into(), Reply::Unreachable(message.into()));
    }

    /// Returns the commands received so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

impl CommandChannel for MockChannel {
    fn host(&self) -> &str {
        &self.host
    }

    fn run_command(&self, command: &str) -> Result<Vec<u8>, ChannelError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(command.to_string());
        }

        match self.replies.get(command) {
            Some(Reply::Output(output)) => Ok(output.clone().into_bytes()),
            Some(Reply::Failure(message)) => Err(ChannelError::Mock(message.clone())),
            Some(Reply::Unreachable(message)) => Err(ChannelError::Connect {
                host: self.host.clone(),
                stderr: message.clone(),
            }),
            None => Err(ChannelError::Mock(format!(
                "no reply for {:?} on {}",
                command, self.host
            ))),
        }
    }
}
