use iced::widget::{MouseArea, Space, Stack, container, row, svg, text};
use iced::{Element, Length, alignment, mouse};

use super::super::event::{ChromeEvent, ChromeIntent};
use super::super::model::ChromeViewModel;
use crate::components::primitive::window_button::{
    WindowButtonEvent, WindowButtonProps, WindowControl,
    view as window_button_view,
};
use crate::icons::WindowIcon;
use crate::theme::{StyleOverrides, ThemeProps};

pub(crate) const ACTION_BAR_HEIGHT: f32 = 30.0;
/// Width of the logo zone; the menu strip starts right after it.
pub(crate) const ACTION_BAR_LEADING_WIDTH: f32 = 42.0;
const ACTION_BAR_TITLE_SIZE: f32 = 12.0;
const ACTION_BAR_ZOOM_SIZE: f32 = 11.0;
const ACTION_BAR_CONTROL_BUTTON_SIZE: f32 = 24.0;
const ACTION_BAR_CONTROL_ICON_SIZE: f32 = 16.0;
const ACTION_BAR_LOGO_ICON_SIZE: f32 = 18.0;
const ACTION_BAR_HORIZONTAL_PADDING: f32 = 12.0;
const ACTION_BAR_RIGHT_PADDING: f32 = 8.0;
const ACTION_BAR_CONTROLS_SPACING: f32 = 6.0;

/// Props for rendering the action bar.
#[derive(Debug, Clone)]
pub(crate) struct ActionBarProps<'a> {
    pub(crate) title: &'a str,
    pub(crate) icon: &'a WindowIcon,
    pub(crate) vm: ChromeViewModel,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the draggable window header with controls.
pub(crate) fn view<'a>(props: ActionBarProps<'a>) -> Element<'a, ChromeEvent> {
    let palette = props.theme.theme.iced_palette();
    let overrides = props.theme.overrides;
    let dim_foreground = palette.dim_foreground;
    let dim_black = palette.dim_black;

    let logo = svg::Svg::new(props.icon.handle().clone())
        .width(Length::Fixed(ACTION_BAR_LOGO_ICON_SIZE))
        .height(Length::Fixed(ACTION_BAR_LOGO_ICON_SIZE));

    let logo_container = container(logo)
        .width(Length::Fixed(ACTION_BAR_LEADING_WIDTH))
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    let center_zone = container(text(props.title).size(ACTION_BAR_TITLE_SIZE))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding([0.0, ACTION_BAR_HORIZONTAL_PADDING])
        .style(move |_| iced::widget::container::Style {
            text_color: Some(resolve_text_color(dim_foreground, overrides)),
            ..Default::default()
        });

    let controls_row = row![
        zoom_indicator(props.vm, dim_foreground, overrides),
        window_button(WindowControl::Minimize, props.theme),
        window_button(
            WindowControl::maximize(props.vm.is_maximized),
            props.theme
        ),
        window_button(
            WindowControl::fullscreen(props.vm.is_fullscreen),
            props.theme
        ),
        window_button(WindowControl::Close, props.theme),
    ]
    .spacing(ACTION_BAR_CONTROLS_SPACING)
    .align_y(alignment::Vertical::Center);

    let controls_container = container(controls_row)
        .width(Length::Shrink)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Center)
        .padding([0.0, ACTION_BAR_RIGHT_PADDING]);

    let drag_surface = MouseArea::new(
        container(Space::new().width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .on_press(ChromeEvent::Intent(ChromeIntent::StartDrag))
    .on_double_click(ChromeEvent::Intent(ChromeIntent::ToggleMaximize));

    let base_row = row![
        logo_container,
        Space::new().width(Length::Fill),
        controls_container
    ]
    .align_y(alignment::Vertical::Center)
    .width(Length::Fill)
    .height(Length::Fill);

    let content = Stack::new()
        .push(drag_surface)
        .push(center_zone)
        .push(base_row);

    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(ACTION_BAR_HEIGHT))
        .style(move |_| iced::widget::container::Style {
            background: Some(resolve_background(dim_black, overrides).into()),
            ..Default::default()
        })
        .into()
}

/// Current zoom as a percentage; hidden at 100%, click resets.
fn zoom_indicator<'a>(
    vm: ChromeViewModel,
    color: iced::Color,
    overrides: Option<StyleOverrides>,
) -> Element<'a, ChromeEvent> {
    let percent = vm.zoom.percent();
    if percent == 100 {
        return Space::new().into();
    }

    let label = container(text(format!("{percent}%")).size(ACTION_BAR_ZOOM_SIZE))
        .height(Length::Fill)
        .align_y(alignment::Vertical::Center)
        .style(move |_| iced::widget::container::Style {
            text_color: Some(resolve_text_color(color, overrides)),
            ..Default::default()
        });

    MouseArea::new(label)
        .on_press(ChromeEvent::Intent(ChromeIntent::ResetZoom))
        .interaction(mouse::Interaction::Pointer)
        .into()
}

fn window_button<'a>(
    control: WindowControl,
    theme: ThemeProps<'a>,
) -> Element<'a, ChromeEvent> {
    let props = WindowButtonProps {
        control,
        theme,
        size: ACTION_BAR_CONTROL_BUTTON_SIZE,
        icon_size: ACTION_BAR_CONTROL_ICON_SIZE,
    };
    window_button_view(props).map(|WindowButtonEvent::Pressed(control)| {
        ChromeEvent::Intent(control_intent(control))
    })
}

fn control_intent(control: WindowControl) -> ChromeIntent {
    match control {
        WindowControl::Minimize => ChromeIntent::Minimize,
        WindowControl::Maximize | WindowControl::Restore => {
            ChromeIntent::ToggleMaximize
        },
        WindowControl::EnterFullscreen | WindowControl::ExitFullscreen => {
            ChromeIntent::ToggleFullscreen
        },
        WindowControl::Close => ChromeIntent::Close,
    }
}

fn resolve_background(
    default_color: iced::Color,
    overrides: Option<StyleOverrides>,
) -> iced::Color {
    overrides
        .and_then(|o| o.background)
        .unwrap_or(default_color)
}

fn resolve_text_color(
    default_color: iced::Color,
    overrides: Option<StyleOverrides>,
) -> iced::Color {
    overrides
        .and_then(|o| o.foreground)
        .unwrap_or(default_color)
}
