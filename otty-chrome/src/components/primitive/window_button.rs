use iced::widget::{button, container, svg, text, tooltip};
use iced::{Background, Color, Element, Length, alignment};

use crate::icons::{
    WINDOW_CLOSE, WINDOW_FULLSCREEN, WINDOW_MAXIMIZE, WINDOW_MINIMIZE,
    WINDOW_RESTORE,
};
use crate::theme::{IcedColorPalette, StyleOverrides, ThemeProps};

const TOOLTIP_TEXT_SIZE: f32 = 11.0;
const TOOLTIP_GAP: f32 = 4.0;
const TOOLTIP_PADDING: f32 = 4.0;
const HOVER_BACKGROUND_ALPHA: f32 = 0.18;

/// One of the window controls at the trailing edge of the title bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WindowControl {
    Minimize,
    Maximize,
    Restore,
    EnterFullscreen,
    ExitFullscreen,
    Close,
}

impl WindowControl {
    /// Maximize or restore, whichever the window state calls for.
    pub(crate) fn maximize(is_maximized: bool) -> Self {
        if is_maximized {
            Self::Restore
        } else {
            Self::Maximize
        }
    }

    pub(crate) fn fullscreen(is_fullscreen: bool) -> Self {
        if is_fullscreen {
            Self::ExitFullscreen
        } else {
            Self::EnterFullscreen
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::Minimize => "Minimize",
            Self::Maximize => "Maximize",
            Self::Restore => "Restore",
            Self::EnterFullscreen => "Enter Full Screen",
            Self::ExitFullscreen => "Exit Full Screen",
            Self::Close => "Close",
        }
    }

    fn icon(self) -> &'static [u8] {
        match self {
            Self::Minimize => WINDOW_MINIMIZE,
            Self::Maximize => WINDOW_MAXIMIZE,
            Self::Restore => WINDOW_RESTORE,
            Self::EnterFullscreen | Self::ExitFullscreen => WINDOW_FULLSCREEN,
            Self::Close => WINDOW_CLOSE,
        }
    }

    /// Controls that reflect a mode the window is currently in.
    fn is_engaged(self) -> bool {
        matches!(self, Self::ExitFullscreen)
    }
}

/// UI events emitted by a window button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WindowButtonEvent {
    Pressed(WindowControl),
}

/// Props for rendering a window button.
#[derive(Debug, Clone, Copy)]
pub(crate) struct WindowButtonProps<'a> {
    pub(crate) control: WindowControl,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) size: f32,
    pub(crate) icon_size: f32,
}

/// Colors for one control in its idle and hovered states.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ControlColors {
    icon: Color,
    hovered_icon: Color,
    hovered_background: Option<Color>,
}

/// Render a square window control with a tooltip naming its action.
pub(crate) fn view<'a>(
    props: WindowButtonProps<'a>,
) -> Element<'a, WindowButtonEvent> {
    let palette = props.theme.theme.iced_palette();
    let colors =
        resolve_colors(props.control, palette, props.theme.overrides);

    let icon = svg::Svg::new(svg::Handle::from_memory(props.control.icon()))
        .width(Length::Fixed(props.icon_size))
        .height(Length::Fixed(props.icon_size))
        .style(move |_, status| {
            let color = if matches!(status, svg::Status::Hovered) {
                colors.hovered_icon
            } else {
                colors.icon
            };

            svg::Style { color: Some(color) }
        });

    let icon_container = container(icon)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    let control = button(icon_container)
        .on_press(WindowButtonEvent::Pressed(props.control))
        .padding(0.0)
        .width(Length::Fixed(props.size))
        .height(Length::Fixed(props.size))
        .style(move |_, status| button::Style {
            background: match status {
                button::Status::Hovered | button::Status::Pressed => colors
                    .hovered_background
                    .map(Background::Color),
                _ => None,
            },
            ..button::Style::default()
        });

    let tooltip_background = palette.overlay;
    let tooltip_text = palette.foreground;
    let label = container(
        text(props.control.label()).size(TOOLTIP_TEXT_SIZE),
    )
    .padding(TOOLTIP_PADDING)
    .style(move |_| container::Style {
        background: Some(tooltip_background.into()),
        text_color: Some(tooltip_text),
        ..Default::default()
    });

    tooltip(control, label, tooltip::Position::Bottom)
        .gap(TOOLTIP_GAP)
        .into()
}

fn resolve_colors(
    control: WindowControl,
    palette: &IcedColorPalette,
    overrides: Option<StyleOverrides>,
) -> ControlColors {
    if let Some(color) = overrides.and_then(|o| o.foreground) {
        return ControlColors {
            icon: color,
            hovered_icon: color,
            hovered_background: None,
        };
    }

    match control {
        WindowControl::Close => ControlColors {
            icon: palette.dim_foreground,
            hovered_icon: palette.foreground,
            hovered_background: Some(palette.red),
        },
        control if control.is_engaged() => ControlColors {
            icon: palette.blue,
            hovered_icon: palette.foreground,
            hovered_background: Some(Color {
                a: HOVER_BACKGROUND_ALPHA,
                ..palette.blue
            }),
        },
        _ => ControlColors {
            icon: palette.dim_foreground,
            hovered_icon: palette.blue,
            hovered_background: Some(Color {
                a: HOVER_BACKGROUND_ALPHA,
                ..palette.dim_foreground
            }),
        },
    }
}
