//! Selection state and its controller.
//!
//! [`SelectionState`] holds the selected day keys and the range anchor;
//! [`ColumnSelection`] is the shared-handle API every other part of the
//! crate (and the host application) mutates it through.
//!
//! # Usage
//!
//! ```
//! use jiff::civil::date;
//! use timegrid_select::selection::ColumnSelection;
//!
//! let selection = ColumnSelection::new();
//! selection.select_single(date(2024, 1, 10));
//! selection.select_range(date(2024, 1, 12));
//!
//! let keys: Vec<String> = selection
//!     .selected_keys()
//!     .iter()
//!     .map(ToString::to_string)
//!     .collect();
//! assert_eq!(keys, ["2024-01-10", "2024-01-11", "2024-01-12"]);
//! ```

mod controller;
mod store;

pub use controller::{ColumnSelection, SelectionHandle};
pub use store::SelectionState;
