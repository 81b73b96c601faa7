use std::path::PathBuf;

use iced::Task;
use serde_json::{Value, json};

use crate::app::{App, AppEvent};
use crate::host::commands::{
    OPEN_EXPLORER_WINDOW, OPEN_SETTINGS, explorer_payload,
};
use crate::host::picker::PickerOptions;
use crate::widgets::chrome::{ChromeEvent, ChromeIntent};
use crate::widgets::document::{DocumentEvent, DocumentIntent};
use crate::widgets::menu_bar::model::MenuAction;
use crate::widgets::menu_bar::{MenuBarEffect, MenuBarEvent};

/// Route a menu bar event through the widget reducer and map effects.
pub(crate) fn route_event(
    app: &mut App,
    event: MenuBarEvent,
) -> Task<AppEvent> {
    match event {
        MenuBarEvent::Intent(intent) => {
            app.widgets.menu_bar.reduce(intent).map(AppEvent::MenuBar)
        },
        MenuBarEvent::Effect(MenuBarEffect::Activate(action)) => {
            activate(app, action)
        },
    }
}

/// Open an explorer window at the picked directory; cancel is a no-op.
pub(crate) fn route_directory_picked(
    app: &mut App,
    path: Option<PathBuf>,
) -> Task<AppEvent> {
    if let Some(path) = path {
        invoke(app, OPEN_EXPLORER_WINDOW, explorer_payload(&path));
    }
    Task::none()
}

fn activate(app: &mut App, action: MenuAction) -> Task<AppEvent> {
    match action {
        MenuAction::NewWindow => {
            let root = app.config.explorer_root();
            invoke(app, OPEN_EXPLORER_WINDOW, explorer_payload(&root));
            Task::none()
        },
        MenuAction::OpenDirectory => app
            .host
            .picker
            .open(PickerOptions::SINGLE_DIRECTORY)
            .map(AppEvent::DirectoryPicked),
        MenuAction::OpenSettings => {
            invoke(app, OPEN_SETTINGS, json!({}));
            Task::none()
        },
        MenuAction::CloseWindow => chrome(app, ChromeIntent::Close),
        MenuAction::Edit(command) => super::document::route_event(
            app,
            DocumentEvent::Intent(DocumentIntent::Execute(command)),
        ),
        MenuAction::ZoomIn => chrome(app, ChromeIntent::ZoomIn),
        MenuAction::ZoomOut => chrome(app, ChromeIntent::ZoomOut),
        MenuAction::ResetZoom => chrome(app, ChromeIntent::ResetZoom),
        MenuAction::ToggleFullscreen => {
            chrome(app, ChromeIntent::ToggleFullscreen)
        },
        MenuAction::Minimize => chrome(app, ChromeIntent::Minimize),
        MenuAction::ToggleMaximize => {
            chrome(app, ChromeIntent::ToggleMaximize)
        },
    }
}

fn chrome(app: &mut App, intent: ChromeIntent) -> Task<AppEvent> {
    super::chrome::route_event(app, ChromeEvent::Intent(intent))
}

fn invoke(app: &App, command: &str, payload: Value) {
    if let Err(err) = app.host.commands.invoke(command, payload) {
        log::warn!("host command {command} failed: {err}");
    }
}
