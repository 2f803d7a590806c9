//! Render styling and click dispatch for the scheduler configuration.
//!
//! [`SelectionBridge`] wires three callbacks into a [`SchedulerConfig`]:
//! day headers and cells of selected columns get style markers appended,
//! and day-header clicks drive the controller. Shift extends a range
//! from the anchor; ctrl/meta toggles a single column; an unmodified
//! click selects, or clears when the clicked column is the only one
//! selected.
//!
//! Wiring goes through [`chain_handler`], so handlers the host already
//! placed in the configuration keep running first. Attaching is a
//! one-time step per configuration.

use crate::chain::chain_handler;
use crate::models::{
    CellRenderArgs, DateKey, HeaderClickHandling, SchedulerConfig, TimeHeaderClickArgs,
    TimeHeaderRenderArgs,
};
use crate::selection::ColumnSelection;

/// Style marker appended to a selected column's day header.
pub const SELECTED_HEADER_CLASS: &str = "tg-header-selected";

/// Style marker additionally appended to the anchor's day header.
pub const ANCHOR_HEADER_CLASS: &str = "tg-header-anchor";

/// Style marker appended to every cell of a selected column.
pub const SELECTED_COLUMN_CLASS: &str = "tg-col-selected";

/// Time-header row that represents whole calendar days.
pub const DEFAULT_DAY_HEADER_LEVEL: usize = 2;

/// Appends a class, keeping whatever is already there.
fn append_class(field: &mut String, class: &str) {
    if !field.is_empty() {
        field.push(' ');
    }
    field.push_str(class);
}

/// Wires column selection into an externally-owned configuration.
///
/// # Usage
///
/// ```
/// use timegrid_select::bridge::SelectionBridge;
/// use timegrid_select::models::SchedulerConfig;
/// use timegrid_select::selection::ColumnSelection;
///
/// let selection = ColumnSelection::new();
/// let mut config = SchedulerConfig::new();
/// SelectionBridge::new(selection.clone())
///     .with_day_header_level(1)
///     .attach(&mut config);
/// ```
#[derive(Debug, Clone)]
pub struct SelectionBridge {
    selection: ColumnSelection,
    day_header_level: usize,
}

impl SelectionBridge {
    /// Creates a bridge driving `selection`, watching the default day
    /// header level.
    pub fn new(selection: ColumnSelection) -> Self {
        Self {
            selection,
            day_header_level: DEFAULT_DAY_HEADER_LEVEL,
        }
    }

    /// Sets which time-header row represents whole days.
    pub fn with_day_header_level(mut self, level: usize) -> Self {
        self.day_header_level = level;
        self
    }

    /// The controller this bridge drives.
    pub fn selection(&self) -> &ColumnSelection {
        &self.selection
    }

    /// One-time wiring into the configuration.
    ///
    /// Upgrades [`HeaderClickHandling::Disabled`] to
    /// [`HeaderClickHandling::Callback`] (stronger modes are left alone)
    /// and chains the three callbacks onto their slots. Chaining is not
    /// idempotent; call this at most once per configuration lifetime.
    pub fn attach(&self, config: &mut SchedulerConfig) {
        if config.header_click_handling == HeaderClickHandling::Disabled {
            config.header_click_handling = HeaderClickHandling::Callback;
        }
        tracing::debug!(
            day_header_level = self.day_header_level,
            "attaching column selection to scheduler config"
        );

        let selection = self.selection.clone();
        let level = self.day_header_level;
        chain_handler(
            &mut config.on_before_time_header_render,
            Box::new(move |args: &mut TimeHeaderRenderArgs| {
                render_time_header(&selection, level, args);
            }),
        );

        let selection = self.selection.clone();
        chain_handler(
            &mut config.on_before_cell_render,
            Box::new(move |args: &mut CellRenderArgs| {
                render_cell(&selection, args);
            }),
        );

        let selection = self.selection.clone();
        let level = self.day_header_level;
        chain_handler(
            &mut config.on_time_header_click,
            Box::new(move |args: &mut TimeHeaderClickArgs| {
                handle_time_header_click(&selection, level, args);
            }),
        );
    }
}

fn render_time_header(
    selection: &ColumnSelection,
    day_level: usize,
    args: &mut TimeHeaderRenderArgs,
) {
    if args.level != day_level {
        return;
    }
    let key = DateKey::from_datetime(args.start);
    if selection.is_selected(&key) {
        append_class(&mut args.css_class, SELECTED_HEADER_CLASS);
    }
    if selection.anchor().map(DateKey::from_date) == Some(key) {
        append_class(&mut args.css_class, ANCHOR_HEADER_CLASS);
    }
}

fn render_cell(selection: &ColumnSelection, args: &mut CellRenderArgs) {
    let key = DateKey::from_datetime(args.start);
    if selection.is_selected(&key) {
        append_class(&mut args.css_class, SELECTED_COLUMN_CLASS);
    }
}

fn handle_time_header_click(
    selection: &ColumnSelection,
    day_level: usize,
    args: &mut TimeHeaderClickArgs,
) {
    if args.level != day_level {
        return;
    }
    let clicked = args.start.date();
    if args.modifiers.shift {
        selection.select_range(clicked);
    } else if args.modifiers.ctrl || args.modifiers.meta {
        selection.toggle_date(clicked);
    } else {
        let key = DateKey::from_date(clicked);
        if selection.len() == 1 && selection.is_selected(&key) {
            // Clicking the only selected column deselects it.
            selection.clear();
        } else {
            selection.select_single(clicked);
        }
    }
    selection.force_update();
}
