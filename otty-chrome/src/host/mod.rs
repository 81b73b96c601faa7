//! Collaborators owned by the host runtime: the native window, the
//! application command bus, the directory picker and the text-editing
//! command set. Widgets describe what they need; these modules carry it
//! out.

pub(crate) mod commands;
mod errors;
pub(crate) mod picker;
#[cfg(test)]
pub(crate) mod testing;
pub(crate) mod text;
pub(crate) mod window;

use std::sync::Arc;

pub(crate) use errors::{CommandError, EditError, HostError};

use self::commands::CommandHost;
use self::picker::DirectoryPicker;
use self::window::WindowHost;

/// Host collaborators shared by the app-level routers.
#[derive(Clone)]
pub(crate) struct HostServices {
    pub(crate) window: Arc<dyn WindowHost>,
    pub(crate) commands: Arc<dyn CommandHost>,
    pub(crate) picker: Arc<dyn DirectoryPicker>,
}

impl HostServices {
    /// Build host services backed by iced, a launcher process and rfd.
    pub(crate) fn native(command_launcher: Option<String>) -> Self {
        Self {
            window: Arc::new(window::IcedWindowHost),
            commands: Arc::new(commands::ProcessCommandHost::new(
                command_launcher,
            )),
            picker: Arc::new(picker::RfdPicker),
        }
    }
}
