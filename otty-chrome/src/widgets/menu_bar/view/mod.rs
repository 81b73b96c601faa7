pub(crate) mod dropdown;
pub(crate) mod menu_strip;
