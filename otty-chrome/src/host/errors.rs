use thiserror::Error;

use super::text::EditCommand;

/// Errors reported by window-control calls.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum HostError {
    /// The runtime has no window to address.
    #[error("no window is available")]
    NoWindow,
    /// The host rejected the request.
    #[error("host rejected {call}: {message}")]
    Rejected { call: &'static str, message: String },
}

/// Errors emitted while invoking host application commands.
#[derive(Debug, Error)]
pub(crate) enum CommandError {
    /// No launcher is configured to receive commands.
    #[error("no command launcher configured for {command}")]
    NotConfigured { command: String },
    /// The payload could not be encoded.
    #[error("command payload JSON failed")]
    Payload(#[from] serde_json::Error),
    /// The launcher process could not be spawned.
    #[error("command launcher spawn failed")]
    Spawn(#[from] std::io::Error),
}

/// Errors emitted by text-editing commands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum EditError {
    /// The document does not support the command.
    #[error("{} is not supported by the document", .0.name())]
    Unsupported(EditCommand),
    /// The command needs a selection and none exists.
    #[error("{} requires a selection", .0.name())]
    EmptySelection(EditCommand),
}
