use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::chrome::{ChromeEffect, ChromeEvent, ChromeIntent};

/// Mirror the host window state once the runtime is up.
pub(crate) fn initialize(app: &mut App) -> Task<AppEvent> {
    route_event(app, ChromeEvent::Intent(ChromeIntent::Initialize))
}

/// Route a chrome event through the widget reducer and map effects.
pub(crate) fn route_event(app: &mut App, event: ChromeEvent) -> Task<AppEvent> {
    match event {
        ChromeEvent::Intent(intent) => {
            app.widgets.chrome.reduce(intent).map(AppEvent::Chrome)
        },
        ChromeEvent::Effect(effect) => route_effect(app, effect),
    }
}

fn route_effect(app: &mut App, effect: ChromeEffect) -> Task<AppEvent> {
    match effect {
        ChromeEffect::Host { call, flow } => {
            app.host.window.call(call).map(move |reply| {
                AppEvent::Chrome(ChromeEvent::Intent(
                    ChromeIntent::HostReplied { flow, reply },
                ))
            })
        },
        ChromeEffect::ZoomChanged(zoom) => {
            log::debug!("viewport zoom set to {}%", zoom.percent());
            app.viewport_scale = zoom.scale();
            Task::none()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::route_event;
    use crate::config::ChromeConfig;
    use crate::host::testing::TestApp;
    use crate::widgets::chrome::model::ZoomFactor;
    use crate::widgets::chrome::{ChromeEffect, ChromeEvent};

    fn zoom_changed(test: &mut TestApp, zoom: ZoomFactor) {
        let _ = route_event(
            &mut test.app,
            ChromeEvent::Effect(ChromeEffect::ZoomChanged(zoom)),
        );
    }

    #[test]
    fn given_successive_zoom_changes_when_routed_then_viewport_scale_follows_each()
     {
        let mut test = TestApp::new(ChromeConfig::default());
        assert_eq!(test.app.scale_factor(), 1.0);

        zoom_changed(&mut test, ZoomFactor::DEFAULT.zoom_in());
        assert_eq!(test.app.scale_factor(), 1.1);

        zoom_changed(&mut test, ZoomFactor::MIN);
        assert_eq!(test.app.scale_factor(), 0.5);

        zoom_changed(&mut test, ZoomFactor::MAX);
        assert_eq!(test.app.scale_factor(), 2.0);
    }
}
