use iced::widget::text_editor::Content;
use iced::widget::{container, text_editor};
use iced::{Border, Element, Length};

use super::super::event::{DocumentEvent, DocumentIntent};
use crate::theme::ThemeProps;

const EDITOR_PADDING: f32 = 12.0;
const EDITOR_FONT_SIZE: f32 = 14.0;

/// Props for rendering the document editor.
#[derive(Clone, Copy)]
pub(crate) struct EditorProps<'a> {
    pub(crate) content: &'a Content,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the editable document filling the window body.
pub(crate) fn view<'a>(props: EditorProps<'a>) -> Element<'a, DocumentEvent> {
    let palette = props.theme.theme.iced_palette().clone();

    let editor = text_editor(props.content)
        .on_action(|action| DocumentEvent::Intent(DocumentIntent::Edit(action)))
        .size(EDITOR_FONT_SIZE)
        .padding(EDITOR_PADDING)
        .height(Length::Fill)
        .style(move |theme, status| text_editor::Style {
            background: palette.background.into(),
            border: Border::default(),
            value: palette.foreground,
            selection: palette.dim_blue,
            ..text_editor::default(theme, status)
        });

    container(editor)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
