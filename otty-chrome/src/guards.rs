use crate::app::AppEvent;

/// Determines how the event loop should treat an incoming event while a
/// menu dropdown is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuGuard {
    /// Let the event pass through to normal dispatch.
    Allow,
    /// Close the open menu before dispatching.
    Dismiss,
}

/// Classify an incoming event while a menu is open. Anything the user
/// does outside the menus closes them; completions and host replies do
/// not.
pub(crate) fn menu_guard(event: &AppEvent) -> MenuGuard {
    use MenuGuard::{Allow, Dismiss};

    match event {
        AppEvent::IcedReady
        | AppEvent::MenuBar(_)
        | AppEvent::DirectoryPicked(_)
        | AppEvent::Keyboard(_) => Allow,
        AppEvent::Chrome(crate::widgets::chrome::ChromeEvent::Effect(_)) => {
            Allow
        },
        AppEvent::Chrome(crate::widgets::chrome::ChromeEvent::Intent(
            intent,
        )) => {
            use crate::widgets::chrome::ChromeIntent as I;
            match intent {
                I::Initialize | I::HostReplied { .. } => Allow,
                _ => Dismiss,
            }
        },
        AppEvent::Document(crate::widgets::document::DocumentEvent::Intent(
            crate::widgets::document::DocumentIntent::Edit(_),
        )) => Dismiss,
        AppEvent::Document(_) => Allow,
        AppEvent::Window(iced::window::Event::Unfocused) => Dismiss,
        AppEvent::Window(_) => Allow,
    }
}
