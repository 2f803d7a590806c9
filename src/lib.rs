//! Headless column selection for time-grid scheduler widgets.
//!
//! Adds multi-select and shift-click range selection of day columns to
//! an externally-owned scheduler widget by composing event handlers into
//! its configuration object. The widget keeps rendering and input
//! dispatch; this crate keeps the selection state and decides how day
//! headers and cells are styled.
//!
//! # Modules
//!
//! - **`models`**: Widget-facing types — `DateKey`, render/click argument
//!   objects, `SchedulerConfig` with its handler slots, the
//!   `SchedulerWidget` redraw trait
//! - **`selection`**: `SelectionState` store and the `ColumnSelection`
//!   controller (select / toggle / range / clear)
//! - **`chain`**: handler-slot composition preserving call order
//! - **`bridge`**: `SelectionBridge` — render styling and click dispatch,
//!   wired into a configuration exactly once
//! - **`redirect`**: single-flight unauthorized-redirect guard for the
//!   host's HTTP layer
//!
//! # Usage
//!
//! ```
//! use jiff::civil::{date, datetime};
//! use timegrid_select::bridge::SelectionBridge;
//! use timegrid_select::models::{Modifiers, SchedulerConfig, TimeHeaderClickArgs};
//! use timegrid_select::selection::ColumnSelection;
//!
//! let selection = ColumnSelection::new();
//! let mut config = SchedulerConfig::new();
//! SelectionBridge::new(selection.clone()).attach(&mut config);
//!
//! // The widget dispatches a shift-click on the day header of Jan 12.
//! selection.select_single(date(2024, 1, 10));
//! let mut click = TimeHeaderClickArgs::new(
//!     datetime(2024, 1, 12, 0, 0, 0, 0),
//!     2,
//!     Modifiers::SHIFT,
//! );
//! config.run_time_header_click(&mut click);
//!
//! assert_eq!(selection.selected_keys().len(), 3);
//! ```

pub mod bridge;
pub mod chain;
pub mod models;
pub mod redirect;
pub mod selection;
