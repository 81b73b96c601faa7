use super::model::{ChromeFlow, ZoomFactor};
use crate::host::HostError;
use crate::host::window::{HostCall, HostReply};

/// Intent events handled by the chrome widget.
#[derive(Debug, Clone)]
pub(crate) enum ChromeIntent {
    /// Mirror the host window state once at startup.
    Initialize,
    Minimize,
    ToggleMaximize,
    ToggleFullscreen,
    Close,
    StartDrag,
    ZoomIn,
    ZoomOut,
    ResetZoom,
    /// A host call issued for `flow` completed.
    HostReplied {
        flow: ChromeFlow,
        reply: Result<HostReply, HostError>,
    },
}

/// Effect events produced by the chrome reducer.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ChromeEffect {
    /// Issue a host call; its reply comes back tagged with `flow`.
    Host { call: HostCall, flow: ChromeFlow },
    /// Apply a new viewport scale.
    ZoomChanged(ZoomFactor),
}

/// Chrome event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum ChromeEvent {
    /// Intent event reduced by the chrome widget.
    Intent(ChromeIntent),
    /// External effect orchestrated by app-level routing.
    Effect(ChromeEffect),
}
