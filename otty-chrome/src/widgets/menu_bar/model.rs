use crate::host::text::EditCommand;

/// Top-level menus of the title bar, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum MenuId {
    File,
    Edit,
    View,
    Window,
}

impl MenuId {
    pub(crate) const ALL: [MenuId; 4] =
        [MenuId::File, MenuId::Edit, MenuId::View, MenuId::Window];

    pub(crate) fn title(self) -> &'static str {
        match self {
            MenuId::File => "File",
            MenuId::Edit => "Edit",
            MenuId::View => "View",
            MenuId::Window => "Window",
        }
    }

    /// Position of the menu in the strip.
    pub(crate) fn index(self) -> usize {
        match self {
            MenuId::File => 0,
            MenuId::Edit => 1,
            MenuId::View => 2,
            MenuId::Window => 3,
        }
    }
}

/// What activating a menu item asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuAction {
    NewWindow,
    OpenDirectory,
    OpenSettings,
    CloseWindow,
    Edit(EditCommand),
    ZoomIn,
    ZoomOut,
    ResetZoom,
    ToggleFullscreen,
    Minimize,
    ToggleMaximize,
}

/// A selectable menu row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MenuItem {
    pub(crate) label: &'static str,
    pub(crate) shortcut: Option<&'static str>,
    pub(crate) action: Option<MenuAction>,
    pub(crate) disabled: bool,
}

impl MenuItem {
    fn action(label: &'static str, action: MenuAction) -> Self {
        Self {
            label,
            shortcut: None,
            action: Some(action),
            disabled: false,
        }
    }

    fn shortcut(mut self, shortcut: &'static str) -> Self {
        self.shortcut = Some(shortcut);
        self
    }

    fn disabled_when(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// A row of a dropdown. Separators only group items and carry nothing
/// that could be activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum MenuEntry {
    Item(MenuItem),
    Separator,
}

/// Application facts that change menu labels or disabled flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct MenuContext {
    pub(crate) is_fullscreen: bool,
    pub(crate) is_maximized: bool,
    pub(crate) has_selection: bool,
}

/// Ordered dropdown rows for `menu`.
pub(crate) fn menu_entries(menu: MenuId, ctx: &MenuContext) -> Vec<MenuEntry> {
    use MenuEntry::{Item, Separator};

    match menu {
        MenuId::File => vec![
            Item(MenuItem::action("New Window", MenuAction::NewWindow)
                .shortcut("Ctrl+N")),
            Item(MenuItem::action("Open…", MenuAction::OpenDirectory)
                .shortcut("Ctrl+O")),
            Separator,
            Item(MenuItem::action("Settings…", MenuAction::OpenSettings)
                .shortcut("Ctrl+,")),
            Separator,
            Item(MenuItem::action("Close Window", MenuAction::CloseWindow)
                .shortcut("Ctrl+W")),
        ],
        MenuId::Edit => vec![
            Item(edit("Undo", EditCommand::Undo).shortcut("Ctrl+Z")),
            Item(edit("Redo", EditCommand::Redo).shortcut("Ctrl+Shift+Z")),
            Separator,
            Item(
                edit("Cut", EditCommand::Cut)
                    .shortcut("Ctrl+X")
                    .disabled_when(!ctx.has_selection),
            ),
            Item(
                edit("Copy", EditCommand::Copy)
                    .shortcut("Ctrl+C")
                    .disabled_when(!ctx.has_selection),
            ),
            Item(edit("Paste", EditCommand::Paste).shortcut("Ctrl+V")),
            Separator,
            Item(
                edit("Select All", EditCommand::SelectAll).shortcut("Ctrl+A"),
            ),
        ],
        MenuId::View => vec![
            Item(MenuItem::action("Zoom In", MenuAction::ZoomIn)
                .shortcut("Ctrl+=")),
            Item(MenuItem::action("Zoom Out", MenuAction::ZoomOut)
                .shortcut("Ctrl+-")),
            Item(MenuItem::action("Actual Size", MenuAction::ResetZoom)
                .shortcut("Ctrl+0")),
            Separator,
            Item(
                MenuItem::action(
                    if ctx.is_fullscreen {
                        "Exit Full Screen"
                    } else {
                        "Enter Full Screen"
                    },
                    MenuAction::ToggleFullscreen,
                )
                .shortcut("F11"),
            ),
        ],
        MenuId::Window => vec![
            Item(MenuItem::action("Minimize", MenuAction::Minimize)),
            Item(MenuItem::action(
                if ctx.is_maximized { "Restore" } else { "Maximize" },
                MenuAction::ToggleMaximize,
            )),
            Separator,
            Item(MenuItem::action("Close", MenuAction::CloseWindow)),
        ],
    }
}

fn edit(label: &'static str, command: EditCommand) -> MenuItem {
    MenuItem::action(label, MenuAction::Edit(command))
}

/// View model for the menu bar widget.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MenuBarViewModel {
    pub(crate) open: Option<MenuId>,
}
