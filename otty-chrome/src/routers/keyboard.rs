use iced::Task;
use iced::keyboard::{self, Key, Modifiers, key::Named};

use crate::app::{App, AppEvent};
use crate::widgets::menu_bar::model::{MenuAction, MenuId};
use crate::widgets::menu_bar::{MenuBarEffect, MenuBarEvent, MenuBarIntent};

/// Route raw keyboard events; only key presses matter.
pub(crate) fn route_event(
    app: &mut App,
    event: keyboard::Event,
) -> Task<AppEvent> {
    match event {
        keyboard::Event::KeyPressed { key, modifiers, .. } => {
            route_key_press(app, key.as_ref(), modifiers)
        },
        _ => Task::none(),
    }
}

/// Escape closes an open menu, Alt plus a menu initial opens it, menu
/// shortcuts activate their item.
fn route_key_press(
    app: &mut App,
    key: Key<&str>,
    modifiers: Modifiers,
) -> Task<AppEvent> {
    if matches!(key, Key::Named(Named::Escape)) {
        if app.widgets.menu_bar.open_menu().is_none() {
            return Task::none();
        }
        return menu_bar(app, MenuBarEvent::Intent(MenuBarIntent::Close));
    }

    if let Some(menu) = accelerator_menu(key.clone(), modifiers) {
        return menu_bar(app, MenuBarEvent::Intent(MenuBarIntent::Open(menu)));
    }

    match shortcut_action(key, modifiers) {
        Some(action) => menu_bar(
            app,
            MenuBarEvent::Effect(MenuBarEffect::Activate(action)),
        ),
        None => Task::none(),
    }
}

fn menu_bar(app: &mut App, event: MenuBarEvent) -> Task<AppEvent> {
    super::menu_bar::route_event(app, event)
}

fn accelerator_menu(key: Key<&str>, modifiers: Modifiers) -> Option<MenuId> {
    if !modifiers.alt() || modifiers.command() {
        return None;
    }

    let Key::Character(character) = key else {
        return None;
    };

    MenuId::ALL.into_iter().find(|menu| {
        menu.title()
            .get(..1)
            .is_some_and(|initial| initial.eq_ignore_ascii_case(character))
    })
}

/// Menu action bound to a key chord. Edit chords are left to the
/// focused editor.
fn shortcut_action(key: Key<&str>, modifiers: Modifiers) -> Option<MenuAction> {
    if let Key::Named(Named::F11) = key {
        return Some(MenuAction::ToggleFullscreen);
    }

    if !modifiers.command() {
        return None;
    }

    let Key::Character(character) = key else {
        return None;
    };

    match character {
        "n" | "N" => Some(MenuAction::NewWindow),
        "o" | "O" => Some(MenuAction::OpenDirectory),
        "," => Some(MenuAction::OpenSettings),
        "w" | "W" => Some(MenuAction::CloseWindow),
        "=" | "+" => Some(MenuAction::ZoomIn),
        "-" => Some(MenuAction::ZoomOut),
        "0" => Some(MenuAction::ResetZoom),
        _ => None,
    }
}
