//! Terminal widgets for RunTag.
//!
//! # Architecture
//!
//! The crate is organized into:
//! - `widgets` - Reusable ratatui widgets (status tag, stats popover, header, footer)
//! - `theme` - Colors, styles, and the busy spinner
//! - `utils` - Truncation and duration formatting
//!
//! # Usage
//!
//! Widgets take a [`runtag_core::PresentationDescriptor`] or plain data and
//! never decide presentation themselves; that lives in `runtag_core::present`.

pub mod theme;
pub mod utils;
pub mod widgets;

pub use theme::Theme;
pub use utils::{format_duration, format_timestamp, truncate};
pub use widgets::footer::Footer;
pub use widgets::header::{Header, HeaderStat, StatusIndicator};
pub use widgets::stats_popover::{popover_rect, PopoverContent, StatsPopover};
pub use widgets::status_tag::StatusTag;
