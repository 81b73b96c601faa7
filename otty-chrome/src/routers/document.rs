use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::document::{DocumentEffect, DocumentEvent, DocumentIntent};

/// Route a document event through the widget reducer and map effects.
pub(crate) fn route_event(
    app: &mut App,
    event: DocumentEvent,
) -> Task<AppEvent> {
    match event {
        DocumentEvent::Intent(intent) => {
            app.widgets.document.reduce(intent).map(AppEvent::Document)
        },
        DocumentEvent::Effect(effect) => route_effect(effect),
    }
}

fn route_effect(effect: DocumentEffect) -> Task<AppEvent> {
    match effect {
        DocumentEffect::WriteClipboard(text) => iced::clipboard::write(text),
        DocumentEffect::ReadClipboard => {
            iced::clipboard::read().map(|text| {
                AppEvent::Document(DocumentEvent::Intent(
                    DocumentIntent::ClipboardRead(
                        text.map(|text| text.to_string()),
                    ),
                ))
            })
        },
    }
}
