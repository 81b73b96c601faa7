use iced::Task;

use crate::app::{App, AppEvent};

pub(crate) mod chrome;
pub(crate) mod document;
pub(crate) mod keyboard;
pub(crate) mod menu_bar;

pub(crate) fn route(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        AppEvent::IcedReady => chrome::initialize(app),
        // Menu bar widget
        AppEvent::MenuBar(event) => menu_bar::route_event(app, event),
        AppEvent::DirectoryPicked(path) => {
            menu_bar::route_directory_picked(app, path)
        },
        // Chrome widget
        AppEvent::Chrome(event) => chrome::route_event(app, event),
        // Document widget
        AppEvent::Document(event) => document::route_event(app, event),
        // Direct operations
        AppEvent::Keyboard(event) => keyboard::route_event(app, event),
        AppEvent::Window(iced::window::Event::Resized(size))
        | AppEvent::Window(iced::window::Event::Opened { size, .. }) => {
            app.window_size = size;
            Task::none()
        },
        AppEvent::Window(_) => Task::none(),
    }
}
