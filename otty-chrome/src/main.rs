mod app;
mod components;
mod config;
mod geometry;
mod guards;
mod host;
mod icons;
mod routers;
mod style;
mod theme;
mod widgets;

use env_logger::Env;
use iced::{Size, window};

use crate::app::{App, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::icons::app_icon_rgba;

fn main() -> iced::Result {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let icon = match app_icon_rgba() {
        Ok((pixels, width, height)) => {
            window::icon::from_rgba(pixels, width, height).ok()
        },
        Err(err) => {
            log::warn!("app icon decode failed: {err}");
            None
        },
    };

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .scale_factor(App::scale_factor)
        .antialiasing(true)
        .window(window::Settings {
            decorations: false,
            min_size: Some(Size {
                width: MIN_WINDOW_WIDTH,
                height: MIN_WINDOW_HEIGHT,
            }),
            icon,
            ..window::Settings::default()
        })
        .resizable(true)
        .subscription(App::subscription)
        .run()
}
