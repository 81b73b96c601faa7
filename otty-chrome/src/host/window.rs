use iced::{Task, window};

use super::HostError;

/// Task resolving to the outcome of a window-control call.
pub(crate) type HostTask<T> = Task<Result<T, HostError>>;

/// A single window-control request understood by [`WindowHost`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HostCall {
    IsMaximized,
    IsFullscreen,
    SetFullscreen(bool),
    Maximize,
    Unmaximize,
    Minimize,
    Close,
    Drag,
}

impl HostCall {
    /// Stable name used in logs and errors.
    pub(crate) fn name(self) -> &'static str {
        match self {
            HostCall::IsMaximized => "is_maximized",
            HostCall::IsFullscreen => "is_fullscreen",
            HostCall::SetFullscreen(_) => "set_fullscreen",
            HostCall::Maximize => "maximize",
            HostCall::Unmaximize => "unmaximize",
            HostCall::Minimize => "minimize",
            HostCall::Close => "close",
            HostCall::Drag => "drag",
        }
    }
}

/// Successful outcome of a [`HostCall`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HostReply {
    /// Answer to a query.
    Flag(bool),
    /// A mutating request was issued.
    Done,
}

/// Host window-control API. Every call is asynchronous and may fail.
pub(crate) trait WindowHost: Send + Sync {
    fn is_maximized(&self) -> HostTask<bool>;
    fn is_fullscreen(&self) -> HostTask<bool>;
    fn set_fullscreen(&self, fullscreen: bool) -> HostTask<()>;
    fn maximize(&self) -> HostTask<()>;
    fn unmaximize(&self) -> HostTask<()>;
    fn minimize(&self) -> HostTask<()>;
    fn close(&self) -> HostTask<()>;
    fn drag(&self) -> HostTask<()>;

    /// Dispatch a request and normalize its reply.
    fn call(&self, call: HostCall) -> HostTask<HostReply> {
        let done = |task: HostTask<()>| {
            task.map(|result| result.map(|()| HostReply::Done))
        };

        match call {
            HostCall::IsMaximized => self
                .is_maximized()
                .map(|result| result.map(HostReply::Flag)),
            HostCall::IsFullscreen => self
                .is_fullscreen()
                .map(|result| result.map(HostReply::Flag)),
            HostCall::SetFullscreen(fullscreen) => {
                done(self.set_fullscreen(fullscreen))
            },
            HostCall::Maximize => done(self.maximize()),
            HostCall::Unmaximize => done(self.unmaximize()),
            HostCall::Minimize => done(self.minimize()),
            HostCall::Close => done(self.close()),
            HostCall::Drag => done(self.drag()),
        }
    }
}

/// Window host backed by iced's window runtime, addressing the most
/// recently opened window.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct IcedWindowHost;

impl WindowHost for IcedWindowHost {
    fn is_maximized(&self) -> HostTask<bool> {
        with_latest_window(window::is_maximized)
    }

    fn is_fullscreen(&self) -> HostTask<bool> {
        with_latest_window(|id| {
            window::mode(id).map(|mode| mode == window::Mode::Fullscreen)
        })
    }

    fn set_fullscreen(&self, fullscreen: bool) -> HostTask<()> {
        let mode = if fullscreen {
            window::Mode::Fullscreen
        } else {
            window::Mode::Windowed
        };
        with_latest_window(move |id| issued(window::set_mode(id, mode)))
    }

    fn maximize(&self) -> HostTask<()> {
        with_latest_window(|id| issued(window::maximize(id, true)))
    }

    fn unmaximize(&self) -> HostTask<()> {
        with_latest_window(|id| issued(window::maximize(id, false)))
    }

    fn minimize(&self) -> HostTask<()> {
        with_latest_window(|id| issued(window::minimize(id, true)))
    }

    fn close(&self) -> HostTask<()> {
        with_latest_window(|id| issued(window::close(id)))
    }

    fn drag(&self) -> HostTask<()> {
        with_latest_window(|id| issued(window::drag(id)))
    }
}

fn with_latest_window<T>(
    request: impl Fn(window::Id) -> Task<T> + Send + 'static,
) -> HostTask<T>
where
    T: Send + 'static,
{
    window::latest().then(move |id| match id {
        Some(id) => request(id).map(Ok),
        None => Task::done(Err(HostError::NoWindow)),
    })
}

/// Window actions never yield output; emit a unit once the action has
/// been handed to the runtime.
fn issued(action: Task<()>) -> Task<()> {
    action.chain(Task::done(()))
}
