use iced::widget::{Space, Stack, column, container, mouse_area};
use iced::{Element, Length, Point, Size, mouse};

use super::super::event::{MenuBarEvent, MenuBarIntent};
use super::super::model::{MenuEntry, MenuId};
use super::menu_strip::MENU_TRIGGER_WIDTH;
use crate::components::primitive::menu_item;
use crate::geometry::{dropdown_anchor, menu_height_for_rows};
use crate::style::{menu_panel_style, menu_separator_style};
use crate::theme::ThemeProps;

const MENU_WIDTH: f32 = 240.0;
const MENU_MARGIN: f32 = 6.0;
const MENU_CONTAINER_PADDING: f32 = 6.0;
const SEPARATOR_THICKNESS: f32 = 1.0;
const SEPARATOR_GAP: f32 = 4.0;

/// Props for the dropdown of the open menu.
pub(crate) struct DropdownProps<'a> {
    pub(crate) menu: MenuId,
    pub(crate) entries: Vec<MenuEntry>,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) area_size: Size,
    /// Left edge of the first menu title.
    pub(crate) strip_offset: f32,
    /// Bottom edge of the title bar; clicks below it dismiss the menu.
    pub(crate) bar_height: f32,
}

/// Render the open dropdown plus a dismiss layer under the title bar.
///
/// The dismiss layer covers everything below the bar except the panel.
pub(crate) fn view<'a>(props: DropdownProps<'a>) -> Element<'a, MenuBarEvent> {
    let menu = props.menu;
    let theme = props.theme;
    let mut item_count = 0usize;
    let mut separator_count = 0usize;
    let mut rows: Vec<Element<'a, MenuBarEvent>> =
        Vec::with_capacity(props.entries.len());

    for entry in props.entries {
        match entry {
            MenuEntry::Item(item) => {
                item_count += 1;
                let row = menu_item::view(menu_item::MenuItemProps {
                    label: item.label,
                    shortcut: item.shortcut,
                    disabled: item.disabled,
                    theme,
                });
                rows.push(row.map(move |_| {
                    MenuBarEvent::Intent(MenuBarIntent::Select(item.clone()))
                }));
            },
            MenuEntry::Separator => {
                separator_count += 1;
                rows.push(separator(theme));
            },
        }
    }

    let menu_height = menu_height_for_rows(
        item_count,
        menu_item::item_height(),
        separator_count,
        SEPARATOR_THICKNESS + SEPARATOR_GAP * 2.0,
        MENU_CONTAINER_PADDING * 2.0,
    );
    let trigger = Point::new(
        props.strip_offset + MENU_TRIGGER_WIDTH * menu.index() as f32,
        props.bar_height,
    );
    let anchor = dropdown_anchor(
        trigger,
        props.area_size,
        MENU_WIDTH,
        menu_height,
        MENU_MARGIN,
    );

    let panel = container(column(rows).spacing(0))
        .width(Length::Fixed(MENU_WIDTH))
        .padding(MENU_CONTAINER_PADDING)
        .style(menu_panel_style(theme));
    let panel = mouse_area(panel).interaction(mouse::Interaction::Idle);

    let positioned_panel = container(panel).padding(iced::Padding {
        top: anchor.y,
        right: 0.0,
        bottom: 0.0,
        left: anchor.x,
    });

    let dismiss_layer = container(
        mouse_area(
            container(Space::new())
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .on_press(MenuBarEvent::Intent(MenuBarIntent::Close))
        // Titles and dropdown form one hover region; only the area
        // outside both counts as leaving it.
        .on_enter(MenuBarEvent::Intent(MenuBarIntent::HoverLeave(menu)))
        .interaction(mouse::Interaction::Idle),
    )
    .padding(iced::Padding {
        top: props.bar_height,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    });

    Stack::with_children(vec![dismiss_layer.into(), positioned_panel.into()])
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Separators are inert: no mouse area, no event.
fn separator<'a>(theme: ThemeProps<'a>) -> Element<'a, MenuBarEvent> {
    let line = container(
        Space::new()
            .width(Length::Fill)
            .height(Length::Fixed(SEPARATOR_THICKNESS)),
    )
    .width(Length::Fill)
    .style(menu_separator_style(theme));

    container(line)
        .padding([SEPARATOR_GAP, 0.0])
        .width(Length::Fill)
        .into()
}
