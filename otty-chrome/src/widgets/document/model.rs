/// View model for the document widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DocumentViewModel {
    pub(crate) has_selection: bool,
}
