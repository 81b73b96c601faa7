pub(crate) mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

use iced::Task;

pub(crate) use self::event::{MenuBarEffect, MenuBarEvent, MenuBarIntent};
use self::model::{MenuBarViewModel, MenuId};
use self::state::MenuBarState;

/// Menu bar widget: the title bar menus and their single open dropdown.
pub(crate) struct MenuBarWidget {
    state: MenuBarState,
}

impl MenuBarWidget {
    pub(crate) fn new() -> Self {
        Self {
            state: MenuBarState::default(),
        }
    }

    /// Reduce a menu bar intent into state updates and effects.
    pub(crate) fn reduce(
        &mut self,
        intent: MenuBarIntent,
    ) -> Task<MenuBarEvent> {
        match reducer::reduce(&mut self.state, intent) {
            Some(effect) => Task::done(MenuBarEvent::Effect(effect)),
            None => Task::none(),
        }
    }

    pub(crate) fn vm(&self) -> MenuBarViewModel {
        MenuBarViewModel {
            open: self.state.open_menu(),
        }
    }

    pub(crate) fn open_menu(&self) -> Option<MenuId> {
        self.state.open_menu()
    }

    /// Close any open dropdown without going through the reducer; used
    /// by the app-level menu guard.
    pub(crate) fn dismiss(&mut self) {
        self.state.close();
    }
}
