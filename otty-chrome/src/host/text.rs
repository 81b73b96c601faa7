use super::EditError;

/// Document-level text-editing commands exposed by the Edit menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EditCommand {
    Undo,
    Redo,
    Cut,
    Copy,
    Paste,
    SelectAll,
}

impl EditCommand {
    /// Command name as understood by document hosts.
    pub(crate) fn name(self) -> &'static str {
        match self {
            EditCommand::Undo => "undo",
            EditCommand::Redo => "redo",
            EditCommand::Cut => "cut",
            EditCommand::Copy => "copy",
            EditCommand::Paste => "paste",
            EditCommand::SelectAll => "selectAll",
        }
    }
}

/// What the caller has to finish after a command ran against the
/// document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum EditOutcome {
    /// Nothing left to do.
    Applied,
    /// Put the text on the system clipboard.
    WriteClipboard(String),
    /// Fetch the system clipboard and paste it.
    ReadClipboard,
}

/// Text-editing command target. Callers treat every error as
/// best-effort and drop it.
pub(crate) trait TextCommands {
    fn execute(
        &mut self,
        command: EditCommand,
    ) -> Result<EditOutcome, EditError>;
}
