//! TUI widgets.

pub mod editor;
pub mod header;
pub mod pages;
pub mod picker;
pub mod sidebar;
pub mod table;
