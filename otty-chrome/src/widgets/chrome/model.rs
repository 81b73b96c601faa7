const ZOOM_MIN_TENTHS: u8 = 5;
const ZOOM_MAX_TENTHS: u8 = 20;
const ZOOM_DEFAULT_TENTHS: u8 = 10;

/// Viewport zoom factor in `[0.5, 2.0]`, stored as whole tenths so
/// repeated steps never drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct ZoomFactor {
    tenths: u8,
}

impl ZoomFactor {
    pub(crate) const DEFAULT: Self = Self {
        tenths: ZOOM_DEFAULT_TENTHS,
    };
    pub(crate) const MIN: Self = Self {
        tenths: ZOOM_MIN_TENTHS,
    };
    pub(crate) const MAX: Self = Self {
        tenths: ZOOM_MAX_TENTHS,
    };

    /// Build a zoom factor from an arbitrary scale, clamped and rounded
    /// to one decimal.
    pub(crate) fn from_scale(scale: f32) -> Self {
        if !scale.is_finite() {
            return Self::DEFAULT;
        }

        let tenths = (scale * 10.0)
            .round()
            .clamp(f32::from(ZOOM_MIN_TENTHS), f32::from(ZOOM_MAX_TENTHS));
        Self {
            tenths: tenths as u8,
        }
    }

    pub(crate) fn zoom_in(self) -> Self {
        Self {
            tenths: (self.tenths + 1).min(ZOOM_MAX_TENTHS),
        }
    }

    pub(crate) fn zoom_out(self) -> Self {
        Self {
            tenths: self.tenths.saturating_sub(1).max(ZOOM_MIN_TENTHS),
        }
    }

    /// Scale factor applied to the whole viewport.
    pub(crate) fn scale(self) -> f32 {
        f32::from(self.tenths) / 10.0
    }

    /// Zoom as a whole percentage, e.g. `110`.
    pub(crate) fn percent(self) -> u16 {
        u16::from(self.tenths) * 10
    }
}

impl Default for ZoomFactor {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Step of the maximize toggle sequence a host reply belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MaximizeStep {
    /// Waiting for the fullscreen query.
    CheckFullscreen,
    /// Waiting for the host to leave fullscreen.
    ExitFullscreen,
    /// Waiting for the maximized query.
    CheckMaximized,
    /// Waiting for maximize/unmaximize; carries the resulting state.
    Apply { maximized: bool },
}

/// Step of the fullscreen toggle sequence a host reply belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FullscreenStep {
    Check,
    Apply,
}

/// Tag routed with every host call so its reply resumes the right
/// sequence. Concurrent sequences each carry their own tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ChromeFlow {
    /// Startup mirror of the host window; `maximized` is filled once the
    /// first query answers.
    Initialize { maximized: Option<bool> },
    Minimize,
    Close,
    Drag,
    Maximize(MaximizeStep),
    Fullscreen(FullscreenStep),
}

/// View model for the chrome widget.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ChromeViewModel {
    pub(crate) is_maximized: bool,
    pub(crate) is_fullscreen: bool,
    pub(crate) zoom: ZoomFactor,
}
