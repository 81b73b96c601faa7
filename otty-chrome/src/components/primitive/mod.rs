pub(crate) mod menu_item;
pub(crate) mod window_button;
