//! Reusable TUI widgets.

pub mod footer;
pub mod header;
pub mod stats_popover;
pub mod status_tag;
