use iced::widget::{container, mouse_area, row, text};
use iced::{Element, Length, alignment, mouse};

use super::super::event::{MenuBarEvent, MenuBarIntent};
use super::super::model::{MenuBarViewModel, MenuId};
use crate::theme::{IcedColorPalette, ThemeProps};

pub(crate) const MENU_TRIGGER_WIDTH: f32 = 56.0;
const MENU_TRIGGER_FONT_SIZE: f32 = 13.0;
const MENU_TRIGGER_RADIUS: f32 = 4.0;

/// Props for rendering the row of menu titles.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MenuStripProps<'a> {
    pub(crate) vm: MenuBarViewModel,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the menu titles. Clicking toggles a menu; while one is open,
/// hovering another title switches to it.
pub(crate) fn view<'a>(props: MenuStripProps<'a>) -> Element<'a, MenuBarEvent> {
    let palette = props.theme.theme.iced_palette();

    let triggers = MenuId::ALL
        .into_iter()
        .map(|menu| trigger(menu, props.vm.open == Some(menu), palette));

    row(triggers)
        .height(Length::Fill)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn trigger<'a>(
    menu: MenuId,
    is_open: bool,
    palette: &IcedColorPalette,
) -> Element<'a, MenuBarEvent> {
    let background = is_open.then_some(palette.overlay);
    let text_color = if is_open {
        palette.foreground
    } else {
        palette.dim_foreground
    };

    let label = container(text(menu.title()).size(MENU_TRIGGER_FONT_SIZE))
        .width(Length::Fixed(MENU_TRIGGER_WIDTH))
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(move |_| iced::widget::container::Style {
            background: background.map(Into::into),
            text_color: Some(text_color),
            border: iced::Border {
                radius: MENU_TRIGGER_RADIUS.into(),
                ..Default::default()
            },
            ..Default::default()
        });

    mouse_area(label)
        .on_press(MenuBarEvent::Intent(MenuBarIntent::Toggle(menu)))
        .on_enter(MenuBarEvent::Intent(MenuBarIntent::HoverEnter(menu)))
        .interaction(mouse::Interaction::Pointer)
        .into()
}
