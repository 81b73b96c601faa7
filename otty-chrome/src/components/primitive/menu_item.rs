use iced::widget::button::Status as ButtonStatus;
use iced::widget::{button, row, text};
use iced::{Element, Length, alignment};

use crate::theme::{IcedColorPalette, ThemeProps};

const MENU_ITEM_HEIGHT: f32 = 24.0;
const MENU_ITEM_FONT_SIZE: f32 = 13.0;
const MENU_ITEM_HORIZONTAL_PADDING: f32 = 10.0;
const MENU_ITEM_DISABLED_ALPHA: f32 = 0.45;

/// UI events emitted by a menu item.
#[derive(Debug, Clone)]
pub(crate) enum MenuItemEvent {
    Pressed,
}

/// Props for rendering a menu item.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MenuItemProps<'a> {
    pub(crate) label: &'a str,
    pub(crate) shortcut: Option<&'a str>,
    pub(crate) disabled: bool,
    pub(crate) theme: ThemeProps<'a>,
}

/// Height of a single menu row.
pub(crate) fn item_height() -> f32 {
    MENU_ITEM_HEIGHT
}

/// A single menu row. Disabled rows render dimmed and emit nothing.
pub(crate) fn view<'a>(props: MenuItemProps<'a>) -> Element<'a, MenuItemEvent> {
    let palette = props.theme.theme.iced_palette().clone();
    let disabled = props.disabled;

    let label = text(props.label)
        .size(MENU_ITEM_FONT_SIZE)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Left)
        .align_y(alignment::Vertical::Center);
    let shortcut = text(props.shortcut.unwrap_or_default())
        .size(MENU_ITEM_FONT_SIZE)
        .align_y(alignment::Vertical::Center);

    let content = row![label, shortcut].align_y(alignment::Vertical::Center);

    button(content)
        .padding([1.0, MENU_ITEM_HORIZONTAL_PADDING])
        .width(Length::Fill)
        .height(Length::Fixed(MENU_ITEM_HEIGHT))
        .style(move |_, status| menu_button_style(&palette, status, disabled))
        .on_press_maybe((!disabled).then_some(MenuItemEvent::Pressed))
        .into()
}

fn menu_button_style(
    palette: &IcedColorPalette,
    status: ButtonStatus,
    disabled: bool,
) -> button::Style {
    let highlighted = !disabled
        && matches!(status, ButtonStatus::Hovered | ButtonStatus::Pressed);

    let background = if highlighted {
        palette.dim_blue
    } else {
        palette.overlay
    };

    let text_color = if highlighted {
        palette.dim_black
    } else if disabled {
        palette.foreground.scale_alpha(MENU_ITEM_DISABLED_ALPHA)
    } else {
        palette.foreground
    };

    button::Style {
        background: Some(background.into()),
        text_color,
        border: iced::Border {
            width: 0.0,
            ..Default::default()
        },
        ..Default::default()
    }
}
