#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
pub(crate) mod view;

use std::path::PathBuf;

use iced::{Element, Size, Subscription, Task, Theme};

use crate::config::{ChromeConfig, load_config};
use crate::host::HostServices;
use crate::icons::WindowIcon;
use crate::theme::AppTheme;
use crate::widgets::chrome::{ChromeEvent, ChromeWidget};
use crate::widgets::document::{DocumentEvent, DocumentWidget};
use crate::widgets::menu_bar::{MenuBarEvent, MenuBarWidget};

pub(crate) const MIN_WINDOW_WIDTH: f32 = 640.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 400.0;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    IcedReady,
    // Menu bar widget
    MenuBar(MenuBarEvent),
    // Chrome widget
    Chrome(ChromeEvent),
    // Document widget
    Document(DocumentEvent),
    // Host completions
    DirectoryPicked(Option<PathBuf>),
    // Direct operations
    Keyboard(iced::keyboard::Event),
    Window(iced::window::Event),
}

/// Container for all widget instances.
pub(crate) struct Widgets {
    pub(crate) menu_bar: MenuBarWidget,
    pub(crate) chrome: ChromeWidget,
    pub(crate) document: DocumentWidget,
}

/// Root application state.
pub(crate) struct App {
    pub(crate) config: ChromeConfig,
    pub(crate) theme: AppTheme,
    pub(crate) icon: WindowIcon,
    pub(crate) host: HostServices,
    pub(crate) widgets: Widgets,
    pub(crate) window_size: Size,
    /// Scale applied to the whole viewport; follows the chrome zoom.
    pub(crate) viewport_scale: f32,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        let config = load_config();
        let icon = WindowIcon::load(config.icon_path.as_deref());
        log::debug!("window icon source: {:?}", icon.source());
        let host = HostServices::native(config.command_launcher.clone());

        (Self::build(config, icon, host), Task::done(AppEvent::IcedReady))
    }

    /// Assemble the app around already resolved collaborators.
    pub(crate) fn build(
        config: ChromeConfig,
        icon: WindowIcon,
        host: HostServices,
    ) -> Self {
        let widgets = Widgets {
            menu_bar: MenuBarWidget::new(),
            chrome: ChromeWidget::new(),
            document: DocumentWidget::new(),
        };
        let viewport_scale = widgets.chrome.zoom().scale();

        App {
            config,
            theme: AppTheme::default(),
            icon,
            host,
            widgets,
            window_size: Size {
                width: MIN_WINDOW_WIDTH,
                height: MIN_WINDOW_HEIGHT,
            },
            viewport_scale,
        }
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        self.config.title.clone()
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        Theme::from(&self.theme)
    }

    /// Return the viewport scale factor.
    pub(crate) fn scale_factor(&self) -> f32 {
        self.viewport_scale
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }
}
