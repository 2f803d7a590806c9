//! External configuration seam.
//!
//! [`SchedulerConfig`] mirrors the externally-owned configuration object
//! of the scheduler widget: a click-handling mode flag plus one optional
//! handler slot per callback. The widget owns the object and dispatches
//! into whatever the slots hold; this crate only ever composes handlers
//! into them (see [`crate::chain`]).

use std::fmt;

use super::render::{CellRenderArgs, TimeHeaderClickArgs, TimeHeaderRenderArgs};

/// A callback stored in a configuration slot.
///
/// Handlers are invoked synchronously and communicate by mutating the
/// argument object; return values are not composed.
pub type Handler<A> = Box<dyn FnMut(&mut A)>;

/// A named, optionally occupied callback slot.
pub type HandlerSlot<A> = Option<Handler<A>>;

/// How the widget reacts to time-header clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderClickHandling {
    /// Clicks on time headers are ignored.
    #[default]
    Disabled,
    /// The widget navigates its visible range on click.
    Navigate,
    /// Clicks are dispatched to the `on_time_header_click` slot.
    Callback,
}

/// Redraw seam of the hosting widget.
///
/// The controller keeps only a weak handle, so a redraw request before
/// the widget exists (or after it is dropped) is a silent no-op.
pub trait SchedulerWidget {
    /// Requests that the widget redraw itself.
    fn update(&self);
}

/// The externally-owned scheduler configuration.
///
/// Slots start empty; the widget calls `run_*` at the matching point of
/// its render/input cycle. Defaults to [`HeaderClickHandling::Disabled`].
#[derive(Default)]
pub struct SchedulerConfig {
    /// Click-handling mode for the time-header rows.
    pub header_click_handling: HeaderClickHandling,
    /// Invoked before each time header is rendered.
    pub on_before_time_header_render: HandlerSlot<TimeHeaderRenderArgs>,
    /// Invoked before each grid cell is rendered.
    pub on_before_cell_render: HandlerSlot<CellRenderArgs>,
    /// Invoked when a time header is clicked (in `Callback` mode).
    pub on_time_header_click: HandlerSlot<TimeHeaderClickArgs>,
}

impl SchedulerConfig {
    /// Creates a configuration with empty slots.
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatches the "before time header render" callback, if set.
    pub fn run_before_time_header_render(&mut self, args: &mut TimeHeaderRenderArgs) {
        if let Some(handler) = &mut self.on_before_time_header_render {
            handler(args);
        }
    }

    /// Dispatches the "before cell render" callback, if set.
    pub fn run_before_cell_render(&mut self, args: &mut CellRenderArgs) {
        if let Some(handler) = &mut self.on_before_cell_render {
            handler(args);
        }
    }

    /// Dispatches the "time header click" callback, if set.
    pub fn run_time_header_click(&mut self, args: &mut TimeHeaderClickArgs) {
        if let Some(handler) = &mut self.on_time_header_click {
            handler(args);
        }
    }
}

impl fmt::Debug for SchedulerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchedulerConfig")
            .field("header_click_handling", &self.header_click_handling)
            .field(
                "on_before_time_header_render",
                &self.on_before_time_header_render.is_some(),
            )
            .field(
                "on_before_cell_render",
                &self.on_before_cell_render.is_some(),
            )
            .field("on_time_header_click", &self.on_time_header_click.is_some())
            .finish()
    }
}
