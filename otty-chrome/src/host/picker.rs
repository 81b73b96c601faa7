use std::path::PathBuf;

use iced::Task;

/// Options accepted by the native picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PickerOptions {
    pub(crate) directory: bool,
    pub(crate) multiple: bool,
}

impl PickerOptions {
    /// Pick exactly one directory.
    pub(crate) const SINGLE_DIRECTORY: Self = Self {
        directory: true,
        multiple: false,
    };
}

/// Native file/directory picker. Resolves to `None` when the user
/// cancels; with `multiple` set the first selection is returned.
pub(crate) trait DirectoryPicker: Send + Sync {
    fn open(&self, options: PickerOptions) -> Task<Option<PathBuf>>;
}

/// Picker backed by the platform dialogs exposed through `rfd`.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct RfdPicker;

impl DirectoryPicker for RfdPicker {
    fn open(&self, options: PickerOptions) -> Task<Option<PathBuf>> {
        Task::perform(pick(options), |path| path)
    }
}

async fn pick(options: PickerOptions) -> Option<PathBuf> {
    let dialog = rfd::AsyncFileDialog::new();
    let handle = match (options.directory, options.multiple) {
        (true, false) => dialog.pick_folder().await,
        (true, true) => first(dialog.pick_folders().await),
        (false, false) => dialog.pick_file().await,
        (false, true) => first(dialog.pick_files().await),
    };

    handle.map(|handle| handle.path().to_path_buf())
}

fn first(
    handles: Option<Vec<rfd::FileHandle>>,
) -> Option<rfd::FileHandle> {
    handles.and_then(|handles| handles.into_iter().next())
}
