use iced::widget::container;

use crate::theme::ThemeProps;

/// Return a styled container closure for dropdown panels.
pub(crate) fn menu_panel_style(
    theme: ThemeProps<'_>,
) -> impl Fn(&iced::Theme) -> container::Style + 'static {
    let palette = theme.theme.iced_palette().clone();
    move |_theme: &iced::Theme| container::Style {
        background: Some(palette.overlay.into()),
        text_color: Some(palette.foreground),
        border: iced::Border {
            width: 0.25,
            color: palette.dim_foreground,
            radius: iced::border::Radius::new(4.0),
        },
        ..Default::default()
    }
}

/// Return a styled container closure for dropdown separators.
pub(crate) fn menu_separator_style(
    theme: ThemeProps<'_>,
) -> impl Fn(&iced::Theme) -> container::Style + 'static {
    let color = theme.theme.iced_palette().dim_foreground.scale_alpha(0.3);
    move |_theme: &iced::Theme| container::Style {
        background: Some(color.into()),
        ..Default::default()
    }
}
