use super::model::ZoomFactor;

/// Window presentation mirrored from the host plus the local zoom.
/// Maximized/fullscreen are optimistic guesses, corrected by later
/// host queries.
#[derive(Debug, Default)]
pub(super) struct ChromeState {
    is_maximized: bool,
    is_fullscreen: bool,
    zoom: ZoomFactor,
}

impl ChromeState {
    pub(super) fn is_maximized(&self) -> bool {
        self.is_maximized
    }

    pub(super) fn is_fullscreen(&self) -> bool {
        self.is_fullscreen
    }

    pub(super) fn zoom(&self) -> ZoomFactor {
        self.zoom
    }

    pub(super) fn set_maximized(&mut self, maximized: bool) {
        self.is_maximized = maximized;
    }

    pub(super) fn set_fullscreen(&mut self, fullscreen: bool) {
        self.is_fullscreen = fullscreen;
    }

    pub(super) fn set_zoom(&mut self, zoom: ZoomFactor) {
        self.zoom = zoom;
    }
}
