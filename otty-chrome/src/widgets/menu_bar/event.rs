use super::model::{MenuAction, MenuId, MenuItem};

/// Intent events handled by the menu bar widget.
#[derive(Debug, Clone)]
pub(crate) enum MenuBarIntent {
    Open(MenuId),
    Close,
    Toggle(MenuId),
    /// Pointer entered a menu title.
    HoverEnter(MenuId),
    /// Pointer left the menu region (titles plus open dropdown).
    HoverLeave(MenuId),
    /// A dropdown item was clicked.
    Select(MenuItem),
}

/// Effect events produced by the menu bar reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum MenuBarEffect {
    /// Run the activated item's action.
    Activate(MenuAction),
}

/// Menu bar event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum MenuBarEvent {
    /// Intent event reduced by the menu bar widget.
    Intent(MenuBarIntent),
    /// External effect orchestrated by app-level routing.
    Effect(MenuBarEffect),
}
