use iced::widget::text_editor;

use crate::host::text::EditCommand;

/// Intent events handled by the document widget.
#[derive(Debug, Clone)]
pub(crate) enum DocumentIntent {
    /// Raw editor interaction (typing, cursor, mouse selection).
    Edit(text_editor::Action),
    /// Edit menu command.
    Execute(EditCommand),
    /// Clipboard contents fetched for a pending paste.
    ClipboardRead(Option<String>),
}

/// Effect events produced by the document reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DocumentEffect {
    WriteClipboard(String),
    ReadClipboard,
}

/// Document event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum DocumentEvent {
    Intent(DocumentIntent),
    Effect(DocumentEffect),
}
