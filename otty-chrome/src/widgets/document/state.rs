use std::sync::Arc;

use iced::widget::text_editor::{Action, Content, Edit};

use crate::host::EditError;
use crate::host::text::{EditCommand, EditOutcome, TextCommands};

/// Text buffer targeted by the Edit menu.
#[derive(Default)]
pub(super) struct DocumentState {
    content: Content,
}

impl DocumentState {
    #[cfg(test)]
    pub(super) fn with_text(text: &str) -> Self {
        Self {
            content: Content::with_text(text),
        }
    }

    pub(super) fn content(&self) -> &Content {
        &self.content
    }

    pub(super) fn perform(&mut self, action: Action) {
        self.content.perform(action);
    }

    pub(super) fn paste(&mut self, text: String) {
        self.content.perform(Action::Edit(Edit::Paste(Arc::new(text))));
    }

    pub(super) fn selection(&self) -> Option<String> {
        self.content.selection().filter(|text| !text.is_empty())
    }
}

impl TextCommands for DocumentState {
    fn execute(
        &mut self,
        command: EditCommand,
    ) -> Result<EditOutcome, EditError> {
        match command {
            // The editor keeps no history.
            EditCommand::Undo | EditCommand::Redo => {
                Err(EditError::Unsupported(command))
            },
            EditCommand::SelectAll => {
                self.perform(Action::SelectAll);
                Ok(EditOutcome::Applied)
            },
            EditCommand::Copy => self
                .selection()
                .map(EditOutcome::WriteClipboard)
                .ok_or(EditError::EmptySelection(command)),
            EditCommand::Cut => {
                let text = self
                    .selection()
                    .ok_or(EditError::EmptySelection(command))?;
                self.perform(Action::Edit(Edit::Delete));
                Ok(EditOutcome::WriteClipboard(text))
            },
            EditCommand::Paste => Ok(EditOutcome::ReadClipboard),
        }
    }
}
