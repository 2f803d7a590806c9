//! Render and click argument objects.
//!
//! Mirrors of the externally-owned objects the scheduler widget passes to
//! its callbacks. The widget constructs them per render/click; handlers
//! communicate back by mutating the style-class field in place.

use jiff::civil::DateTime;
use serde::{Deserialize, Serialize};

/// Modifier-key state captured from the originating input event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    /// Shift was held.
    pub shift: bool,
    /// Ctrl was held.
    pub ctrl: bool,
    /// Meta (command) was held.
    pub meta: bool,
}

impl Modifiers {
    /// No modifier held.
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        meta: false,
    };

    /// Shift only.
    pub const SHIFT: Modifiers = Modifiers {
        shift: true,
        ctrl: false,
        meta: false,
    };

    /// Ctrl only.
    pub const CTRL: Modifiers = Modifiers {
        shift: false,
        ctrl: true,
        meta: false,
    };

    /// Meta only.
    pub const META: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        meta: true,
    };
}

/// Argument object for the "before time header render" callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeHeaderRenderArgs {
    /// Start of the interval this header covers.
    pub start: DateTime,
    /// Row in the time-header hierarchy (0 = outermost).
    pub level: usize,
    /// Mutable style-class field. Handlers append, never overwrite.
    pub css_class: String,
}

impl TimeHeaderRenderArgs {
    /// Creates header render args with an empty style-class field.
    pub fn new(start: DateTime, level: usize) -> Self {
        Self {
            start,
            level,
            css_class: String::new(),
        }
    }
}

/// Argument object for the "before cell render" callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellRenderArgs {
    /// Start of the interval this cell covers.
    pub start: DateTime,
    /// Mutable style-class field. Handlers append, never overwrite.
    pub css_class: String,
}

impl CellRenderArgs {
    /// Creates cell render args with an empty style-class field.
    pub fn new(start: DateTime) -> Self {
        Self {
            start,
            css_class: String::new(),
        }
    }
}

/// Argument object for the "time header click" callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeHeaderClickArgs {
    /// Start of the interval of the clicked header.
    pub start: DateTime,
    /// Row in the time-header hierarchy (0 = outermost).
    pub level: usize,
    /// Modifier keys held during the click.
    pub modifiers: Modifiers,
}

impl TimeHeaderClickArgs {
    /// Creates click args.
    pub fn new(start: DateTime, level: usize, modifiers: Modifiers) -> Self {
        Self {
            start,
            level,
            modifiers,
        }
    }
}
