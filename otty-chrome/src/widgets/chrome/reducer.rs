use super::event::{ChromeEffect, ChromeIntent};
use super::model::{ChromeFlow, FullscreenStep, MaximizeStep, ZoomFactor};
use super::state::ChromeState;
use crate::host::HostError;
use crate::host::window::{HostCall, HostReply};

/// Reduce a chrome intent into a state transition and at most one effect.
pub(super) fn reduce(
    state: &mut ChromeState,
    intent: ChromeIntent,
) -> Option<ChromeEffect> {
    match intent {
        ChromeIntent::Initialize => host(
            HostCall::IsMaximized,
            ChromeFlow::Initialize { maximized: None },
        ),
        ChromeIntent::Minimize => host(HostCall::Minimize, ChromeFlow::Minimize),
        ChromeIntent::ToggleMaximize => host(
            HostCall::IsFullscreen,
            ChromeFlow::Maximize(MaximizeStep::CheckFullscreen),
        ),
        ChromeIntent::ToggleFullscreen => host(
            HostCall::IsFullscreen,
            ChromeFlow::Fullscreen(FullscreenStep::Check),
        ),
        ChromeIntent::Close => host(HostCall::Close, ChromeFlow::Close),
        ChromeIntent::StartDrag => host(HostCall::Drag, ChromeFlow::Drag),
        ChromeIntent::ZoomIn => {
            let zoom = state.zoom().zoom_in();
            apply_zoom(state, zoom)
        },
        ChromeIntent::ZoomOut => {
            let zoom = state.zoom().zoom_out();
            apply_zoom(state, zoom)
        },
        ChromeIntent::ResetZoom => apply_zoom(state, ZoomFactor::DEFAULT),
        ChromeIntent::HostReplied { flow, reply } => match reply {
            Ok(reply) => resume(state, flow, reply),
            Err(err) => {
                report_failure(flow, &err);
                None
            },
        },
    }
}

fn host(call: HostCall, flow: ChromeFlow) -> Option<ChromeEffect> {
    Some(ChromeEffect::Host { call, flow })
}

fn apply_zoom(
    state: &mut ChromeState,
    zoom: ZoomFactor,
) -> Option<ChromeEffect> {
    state.set_zoom(zoom);
    Some(ChromeEffect::ZoomChanged(zoom))
}

fn resume(
    state: &mut ChromeState,
    flow: ChromeFlow,
    reply: HostReply,
) -> Option<ChromeEffect> {
    match (flow, reply) {
        (ChromeFlow::Initialize { maximized: None }, HostReply::Flag(value)) => {
            host(
                HostCall::IsFullscreen,
                ChromeFlow::Initialize {
                    maximized: Some(value),
                },
            )
        },
        (
            ChromeFlow::Initialize {
                maximized: Some(maximized),
            },
            HostReply::Flag(fullscreen),
        ) => {
            state.set_maximized(maximized);
            state.set_fullscreen(fullscreen);
            None
        },
        (
            ChromeFlow::Maximize(MaximizeStep::CheckFullscreen),
            HostReply::Flag(true),
        ) => host(
            HostCall::SetFullscreen(false),
            ChromeFlow::Maximize(MaximizeStep::ExitFullscreen),
        ),
        (
            ChromeFlow::Maximize(MaximizeStep::CheckFullscreen),
            HostReply::Flag(false),
        ) => host(
            HostCall::IsMaximized,
            ChromeFlow::Maximize(MaximizeStep::CheckMaximized),
        ),
        (
            ChromeFlow::Maximize(MaximizeStep::ExitFullscreen),
            HostReply::Done,
        ) => {
            state.set_fullscreen(false);
            host(
                HostCall::IsMaximized,
                ChromeFlow::Maximize(MaximizeStep::CheckMaximized),
            )
        },
        (
            ChromeFlow::Maximize(MaximizeStep::CheckMaximized),
            HostReply::Flag(maximized),
        ) => {
            let call = if maximized {
                HostCall::Unmaximize
            } else {
                HostCall::Maximize
            };
            host(
                call,
                ChromeFlow::Maximize(MaximizeStep::Apply {
                    maximized: !maximized,
                }),
            )
        },
        (
            ChromeFlow::Maximize(MaximizeStep::Apply { maximized }),
            HostReply::Done,
        ) => {
            state.set_maximized(maximized);
            None
        },
        (
            ChromeFlow::Fullscreen(FullscreenStep::Check),
            HostReply::Flag(fullscreen),
        ) => {
            state.set_fullscreen(!fullscreen);
            host(
                HostCall::SetFullscreen(!fullscreen),
                ChromeFlow::Fullscreen(FullscreenStep::Apply),
            )
        },
        (ChromeFlow::Fullscreen(FullscreenStep::Apply), HostReply::Done)
        | (
            ChromeFlow::Minimize | ChromeFlow::Close | ChromeFlow::Drag,
            HostReply::Done,
        ) => None,
        (flow, reply) => {
            log::warn!("unexpected host reply {reply:?} for {flow:?}");
            None
        },
    }
}

fn report_failure(flow: ChromeFlow, err: &HostError) {
    match flow {
        // Startup mirroring is only a presentation hint.
        ChromeFlow::Initialize { .. } => {
            log::debug!("window state query failed: {err}");
        },
        ChromeFlow::Minimize => log::warn!("window minimize failed: {err}"),
        ChromeFlow::Close => log::warn!("window close failed: {err}"),
        ChromeFlow::Drag => log::debug!("window drag failed: {err}"),
        ChromeFlow::Maximize(step) => {
            log::warn!("window maximize toggle aborted at {step:?}: {err}");
        },
        ChromeFlow::Fullscreen(step) => {
            log::warn!("window fullscreen toggle failed at {step:?}: {err}");
        },
    }
}
