pub(crate) mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

use iced::Task;
use iced::widget::text_editor::Content;

pub(crate) use self::event::{DocumentEffect, DocumentEvent, DocumentIntent};
use self::model::DocumentViewModel;
use self::state::DocumentState;

/// Editable document below the title bar; target of the Edit menu.
pub(crate) struct DocumentWidget {
    state: DocumentState,
}

impl DocumentWidget {
    pub(crate) fn new() -> Self {
        Self {
            state: DocumentState::default(),
        }
    }

    /// Reduce a document intent into state updates and effects.
    pub(crate) fn reduce(
        &mut self,
        intent: DocumentIntent,
    ) -> Task<DocumentEvent> {
        match reducer::reduce(&mut self.state, intent) {
            Some(effect) => Task::done(DocumentEvent::Effect(effect)),
            None => Task::none(),
        }
    }

    pub(crate) fn vm(&self) -> DocumentViewModel {
        DocumentViewModel {
            has_selection: self.state.selection().is_some(),
        }
    }

    pub(crate) fn content(&self) -> &Content {
        self.state.content()
    }
}
