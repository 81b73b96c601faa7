use iced::widget::{Stack, column, container};
use iced::{Element, Length, Size, Theme};

use super::{App, AppEvent};
use crate::theme::ThemeProps;
use crate::widgets::chrome::view::action_bar::{
    self, ACTION_BAR_HEIGHT, ACTION_BAR_LEADING_WIDTH,
};
use crate::widgets::document::view::editor;
use crate::widgets::menu_bar::model::{MenuContext, menu_entries};
use crate::widgets::menu_bar::view::{dropdown, menu_strip};

/// Render the root application view.
pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let theme_props = ThemeProps::new(&app.theme);
    let chrome_vm = app.widgets.chrome.vm();
    let menu_vm = app.widgets.menu_bar.vm();

    let action_bar = action_bar::view(action_bar::ActionBarProps {
        title: &app.config.title,
        icon: &app.icon,
        vm: chrome_vm,
        theme: theme_props,
    })
    .map(AppEvent::Chrome);

    let menu_strip = container(
        menu_strip::view(menu_strip::MenuStripProps {
            vm: menu_vm,
            theme: theme_props,
        })
        .map(AppEvent::MenuBar),
    )
    .height(Length::Fixed(ACTION_BAR_HEIGHT))
    .padding(iced::Padding {
        left: ACTION_BAR_LEADING_WIDTH,
        ..iced::Padding::ZERO
    });

    let header = Stack::with_children(vec![action_bar, menu_strip.into()])
        .width(Length::Fill)
        .height(Length::Fixed(ACTION_BAR_HEIGHT));

    let document = editor::view(editor::EditorProps {
        content: app.widgets.document.content(),
        theme: theme_props,
    })
    .map(AppEvent::Document);

    let mut layers: Vec<Element<'_, AppEvent, Theme, iced::Renderer>> = vec![
        column![header, document]
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
    ];

    if let Some(menu) = menu_vm.open {
        let ctx = MenuContext {
            is_fullscreen: chrome_vm.is_fullscreen,
            is_maximized: chrome_vm.is_maximized,
            has_selection: app.widgets.document.vm().has_selection,
        };
        layers.push(
            dropdown::view(dropdown::DropdownProps {
                menu,
                entries: menu_entries(menu, &ctx),
                theme: theme_props,
                area_size: viewport_size(app.window_size, app.viewport_scale),
                strip_offset: ACTION_BAR_LEADING_WIDTH,
                bar_height: ACTION_BAR_HEIGHT,
            })
            .map(AppEvent::MenuBar),
        );
    }

    Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Logical size of the viewport once the zoom scale is applied.
fn viewport_size(window_size: Size, scale: f32) -> Size {
    if scale <= 0.0 {
        return window_size;
    }

    Size::new(window_size.width / scale, window_size.height / scale)
}
