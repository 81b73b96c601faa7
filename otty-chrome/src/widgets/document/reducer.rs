use super::event::{DocumentEffect, DocumentIntent};
use super::state::DocumentState;
use crate::host::text::{EditOutcome, TextCommands};

/// Reduce a document intent into a state transition and optional effect.
/// Failed edit commands are dropped.
pub(super) fn reduce(
    state: &mut DocumentState,
    intent: DocumentIntent,
) -> Option<DocumentEffect> {
    match intent {
        DocumentIntent::Edit(action) => {
            state.perform(action);
            None
        },
        DocumentIntent::Execute(command) => match state.execute(command) {
            Ok(EditOutcome::Applied) => None,
            Ok(EditOutcome::WriteClipboard(text)) => {
                Some(DocumentEffect::WriteClipboard(text))
            },
            Ok(EditOutcome::ReadClipboard) => Some(DocumentEffect::ReadClipboard),
            Err(err) => {
                log::debug!("edit command {} ignored: {err}", command.name());
                None
            },
        },
        DocumentIntent::ClipboardRead(Some(text)) => {
            state.paste(text);
            None
        },
        DocumentIntent::ClipboardRead(None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::reduce;
    use crate::host::text::EditCommand;
    use crate::widgets::document::event::{DocumentEffect, DocumentIntent};
    use crate::widgets::document::state::DocumentState;

    fn execute(
        state: &mut DocumentState,
        command: EditCommand,
    ) -> Option<DocumentEffect> {
        reduce(state, DocumentIntent::Execute(command))
    }

    #[test]
    fn given_text_when_select_all_then_copy_writes_whole_text() {
        let mut state = DocumentState::with_text("hello");

        assert_eq!(execute(&mut state, EditCommand::SelectAll), None);
        let effect = execute(&mut state, EditCommand::Copy);

        assert_eq!(
            effect,
            Some(DocumentEffect::WriteClipboard(String::from("hello")))
        );
        assert_eq!(state.content().text().trim_end(), "hello");
    }

    #[test]
    fn given_selection_when_cut_then_text_is_removed_and_written() {
        let mut state = DocumentState::with_text("hello");
        execute(&mut state, EditCommand::SelectAll);

        let effect = execute(&mut state, EditCommand::Cut);

        assert_eq!(
            effect,
            Some(DocumentEffect::WriteClipboard(String::from("hello")))
        );
        assert_eq!(state.content().text().trim_end(), "");
    }

    #[test]
    fn given_no_selection_when_copy_or_cut_then_nothing_happens() {
        let mut state = DocumentState::with_text("hello");

        assert_eq!(execute(&mut state, EditCommand::Copy), None);
        assert_eq!(execute(&mut state, EditCommand::Cut), None);
        assert_eq!(state.content().text().trim_end(), "hello");
    }

    #[test]
    fn given_paste_command_when_reduced_then_clipboard_read_is_requested() {
        let mut state = DocumentState::default();

        assert_eq!(
            execute(&mut state, EditCommand::Paste),
            Some(DocumentEffect::ReadClipboard)
        );
    }

    #[test]
    fn given_clipboard_text_when_read_then_it_is_inserted() {
        let mut state = DocumentState::default();

        reduce(
            &mut state,
            DocumentIntent::ClipboardRead(Some(String::from("pasted"))),
        );

        assert_eq!(state.content().text().trim_end(), "pasted");
    }

    #[test]
    fn given_empty_clipboard_when_read_then_document_is_unchanged() {
        let mut state = DocumentState::with_text("kept");

        assert_eq!(reduce(&mut state, DocumentIntent::ClipboardRead(None)), None);
        assert_eq!(state.content().text().trim_end(), "kept");
    }

    #[test]
    fn given_undo_or_redo_when_reduced_then_failure_is_swallowed() {
        let mut state = DocumentState::with_text("text");

        assert_eq!(execute(&mut state, EditCommand::Undo), None);
        assert_eq!(execute(&mut state, EditCommand::Redo), None);
        assert_eq!(state.content().text().trim_end(), "text");
    }
}
