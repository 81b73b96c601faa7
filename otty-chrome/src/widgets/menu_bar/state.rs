use super::model::MenuId;

/// Which top-level menu is open. `None` means every menu is closed.
#[derive(Debug, Default)]
pub(super) struct MenuBarState {
    open: Option<MenuId>,
}

impl MenuBarState {
    pub(super) fn open_menu(&self) -> Option<MenuId> {
        self.open
    }

    pub(super) fn is_open(&self, menu: MenuId) -> bool {
        self.open == Some(menu)
    }

    pub(super) fn open(&mut self, menu: MenuId) {
        self.open = Some(menu);
    }

    pub(super) fn close(&mut self) {
        self.open = None;
    }
}
