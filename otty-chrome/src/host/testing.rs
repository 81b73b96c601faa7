//! In-memory host collaborators for router tests.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use iced::Task;
use serde_json::Value;

use super::commands::CommandHost;
use super::picker::{DirectoryPicker, PickerOptions};
use super::window::{HostTask, WindowHost};
use super::{CommandError, HostServices};
use crate::app::App;
use crate::config::ChromeConfig;
use crate::icons::WindowIcon;

/// Command host that records every invocation.
#[derive(Debug, Default)]
pub(crate) struct RecordingCommandHost {
    calls: Mutex<Vec<(String, Value)>>,
}

impl RecordingCommandHost {
    pub(crate) fn calls(&self) -> Vec<(String, Value)> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

impl CommandHost for RecordingCommandHost {
    fn invoke(
        &self,
        command: &str,
        payload: Value,
    ) -> Result<(), CommandError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((command.to_string(), payload));
        }
        Ok(())
    }
}

/// Window host whose calls all succeed with a windowed, restored window.
#[derive(Debug, Default)]
pub(crate) struct StillWindowHost;

impl WindowHost for StillWindowHost {
    fn is_maximized(&self) -> HostTask<bool> {
        Task::done(Ok(false))
    }

    fn is_fullscreen(&self) -> HostTask<bool> {
        Task::done(Ok(false))
    }

    fn set_fullscreen(&self, _fullscreen: bool) -> HostTask<()> {
        Task::done(Ok(()))
    }

    fn maximize(&self) -> HostTask<()> {
        Task::done(Ok(()))
    }

    fn unmaximize(&self) -> HostTask<()> {
        Task::done(Ok(()))
    }

    fn minimize(&self) -> HostTask<()> {
        Task::done(Ok(()))
    }

    fn close(&self) -> HostTask<()> {
        Task::done(Ok(()))
    }

    fn drag(&self) -> HostTask<()> {
        Task::done(Ok(()))
    }
}

/// Picker that records the options it was opened with and cancels.
#[derive(Debug, Default)]
pub(crate) struct CancellingPicker {
    opened: Mutex<Vec<PickerOptions>>,
}

impl CancellingPicker {
    pub(crate) fn opened(&self) -> Vec<PickerOptions> {
        self.opened
            .lock()
            .map(|opened| opened.clone())
            .unwrap_or_default()
    }
}

impl DirectoryPicker for CancellingPicker {
    fn open(&self, options: PickerOptions) -> Task<Option<PathBuf>> {
        if let Ok(mut opened) = self.opened.lock() {
            opened.push(options);
        }
        Task::done(None)
    }
}

/// An app wired to in-memory hosts, plus handles to inspect them.
pub(crate) struct TestApp {
    pub(crate) app: App,
    pub(crate) commands: Arc<RecordingCommandHost>,
    pub(crate) picker: Arc<CancellingPicker>,
}

impl TestApp {
    pub(crate) fn new(config: ChromeConfig) -> Self {
        let commands = Arc::new(RecordingCommandHost::default());
        let picker = Arc::new(CancellingPicker::default());
        let host = HostServices {
            window: Arc::new(StillWindowHost),
            commands: commands.clone(),
            picker: picker.clone(),
        };

        Self {
            app: App::build(config, WindowIcon::fallback(), host),
            commands,
            picker,
        }
    }
}
