//! Widget-facing data models.
//!
//! The types the crate shares with the hosting scheduler widget: the
//! canonical day identity ([`DateKey`]), the render/click argument
//! objects the widget passes to its callbacks, and the configuration
//! seam ([`SchedulerConfig`]) whose handler slots this crate composes
//! into.

mod config;
mod date_key;
mod render;

pub use config::{Handler, HandlerSlot, HeaderClickHandling, SchedulerConfig, SchedulerWidget};
pub use date_key::{DateKey, DateKeyError};
pub use render::{CellRenderArgs, Modifiers, TimeHeaderClickArgs, TimeHeaderRenderArgs};
