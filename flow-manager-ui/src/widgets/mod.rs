pub mod empty_state;
pub mod node_options;
pub mod page_header;
pub mod sidebar;
pub mod snackbar;
pub mod tabs;
