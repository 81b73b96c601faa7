pub(crate) mod chrome;
pub(crate) mod document;
pub(crate) mod menu_bar;
