use iced::Task;

use super::{App, AppEvent};
use crate::guards::{MenuGuard, menu_guard};
use crate::routers;

/// Close open menus on outside interaction, then route the event.
pub(super) fn update(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    if app.widgets.menu_bar.open_menu().is_some()
        && menu_guard(&event) == MenuGuard::Dismiss
    {
        app.widgets.menu_bar.dismiss();
    }

    routers::route(app, event)
}
