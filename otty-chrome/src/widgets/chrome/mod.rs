pub(crate) mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

use iced::Task;

pub(crate) use self::event::{ChromeEffect, ChromeEvent, ChromeIntent};
use self::model::{ChromeViewModel, ZoomFactor};
use self::state::ChromeState;

/// Chrome widget mirroring the host window and owning the viewport zoom.
pub(crate) struct ChromeWidget {
    state: ChromeState,
}

impl ChromeWidget {
    /// Create the chrome widget with default state.
    pub(crate) fn new() -> Self {
        Self {
            state: ChromeState::default(),
        }
    }

    /// Reduce a chrome intent event into state updates and effects.
    pub(crate) fn reduce(&mut self, intent: ChromeIntent) -> Task<ChromeEvent> {
        match reducer::reduce(&mut self.state, intent) {
            Some(effect) => Task::done(ChromeEvent::Effect(effect)),
            None => Task::none(),
        }
    }

    /// Produce the chrome view model for rendering.
    pub(crate) fn vm(&self) -> ChromeViewModel {
        ChromeViewModel {
            is_maximized: self.state.is_maximized(),
            is_fullscreen: self.state.is_fullscreen(),
            zoom: self.state.zoom(),
        }
    }

    pub(crate) fn zoom(&self) -> ZoomFactor {
        self.state.zoom()
    }
}
