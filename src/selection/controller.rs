//! Column selection controller.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::fmt;
use std::rc::{Rc, Weak};

use jiff::civil::Date;

use crate::models::{DateKey, SchedulerWidget};

use super::store::SelectionState;

/// Shared handle to the selection state.
///
/// Handed out by [`ColumnSelection::state`] for reactive observation;
/// mutation still goes through the controller.
pub type SelectionHandle = Rc<RefCell<SelectionState>>;

/// Public API for selecting day columns.
///
/// Cloning is cheap and every clone operates on the same underlying
/// state, which is how the render/click callbacks and the host
/// application stay in agreement. All operations are synchronous and run
/// on the UI thread; none of them fails under well-formed input.
///
/// Anchor rules: single-select always moves the anchor to the selected
/// day; toggling only sets it when it was unset; range-select never
/// touches it, so repeated shift-clicks keep adjusting from the same
/// fixed end; `clear` and bulk replacement drop it.
#[derive(Clone)]
pub struct ColumnSelection {
    state: SelectionHandle,
    widget: Rc<RefCell<Option<Weak<dyn SchedulerWidget>>>>,
}

impl ColumnSelection {
    /// Creates a controller with an empty selection and no widget handle.
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(SelectionState::new())),
            widget: Rc::new(RefCell::new(None)),
        }
    }

    /// Empties the selection and drops the anchor.
    pub fn clear(&self) {
        tracing::debug!("clearing column selection");
        let mut state = self.state.borrow_mut();
        state.replace(BTreeSet::new());
        state.set_anchor(None);
    }

    /// Selects exactly `date`, overwriting any prior selection, and moves
    /// the anchor to it.
    pub fn select_single(&self, date: Date) {
        let key = DateKey::from_date(date);
        tracing::debug!(key = %key, "selecting single column");
        let mut state = self.state.borrow_mut();
        state.replace(BTreeSet::from([key]));
        state.set_anchor(Some(date));
    }

    /// Removes `date` from the selection if present, inserts it
    /// otherwise. The anchor moves to `date` only when it was unset.
    pub fn toggle_date(&self, date: Date) {
        let key = DateKey::from_date(date);
        let mut state = self.state.borrow_mut();
        let mut next = state.selected().clone();
        let removed = next.remove(&key);
        if !removed {
            next.insert(key);
        }
        tracing::debug!(key = %key, removed, "toggling column");
        state.replace(next);
        if state.anchor().is_none() {
            state.set_anchor(Some(date));
        }
    }

    /// Selects the inclusive day span between the anchor and `to`.
    ///
    /// Without an anchor this is exactly [`select_single`]. With one, the
    /// selection becomes every day between the earlier and the later of
    /// the two endpoints, and the anchor stays where it is.
    ///
    /// [`select_single`]: Self::select_single
    pub fn select_range(&self, to: Date) {
        let anchor = self.state.borrow().anchor();
        let Some(anchor) = anchor else {
            self.select_single(to);
            return;
        };

        let (first, last) = if anchor <= to { (anchor, to) } else { (to, anchor) };
        let mut next = BTreeSet::new();
        let mut day = first;
        while day <= last {
            next.insert(DateKey::from_date(day));
            match day.tomorrow() {
                Ok(d) => day = d,
                // Ran into the end of the civil calendar.
                Err(_) => break,
            }
        }
        tracing::debug!(first = %first, last = %last, count = next.len(), "selecting column range");
        self.state.borrow_mut().replace(next);
    }

    /// Snapshot of the selected keys, ascending.
    pub fn selected_keys(&self) -> Vec<DateKey> {
        self.state.borrow().selected().iter().copied().collect()
    }

    /// Replaces the selection with the given keys (deduplicated), drops
    /// the anchor, and forces an external redraw.
    pub fn set_selected_keys<I>(&self, keys: I)
    where
        I: IntoIterator<Item = DateKey>,
    {
        let next: BTreeSet<DateKey> = keys.into_iter().collect();
        tracing::debug!(count = next.len(), "replacing column selection");
        {
            let mut state = self.state.borrow_mut();
            state.replace(next);
            state.set_anchor(None);
        }
        self.force_update();
    }

    /// Whether a key is currently selected.
    pub fn is_selected(&self, key: &DateKey) -> bool {
        self.state.borrow().is_selected(key)
    }

    /// Number of selected columns.
    pub fn len(&self) -> usize {
        self.state.borrow().len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.state.borrow().is_empty()
    }

    /// The range anchor, if set.
    pub fn anchor(&self) -> Option<Date> {
        self.state.borrow().anchor()
    }

    /// Moves or drops the anchor directly. Never alters the selection.
    pub fn set_anchor(&self, anchor: Option<Date>) {
        self.state.borrow_mut().set_anchor(anchor);
    }

    /// Change counter of the underlying state; strictly increases across
    /// visible mutations.
    pub fn generation(&self) -> u64 {
        self.state.borrow().generation()
    }

    /// The shared state handle, for reactive observation.
    pub fn state(&self) -> SelectionHandle {
        Rc::clone(&self.state)
    }

    /// Points the controller at the live widget for redraw requests.
    ///
    /// Only a weak handle is kept; the widget's lifetime stays with the
    /// host.
    pub fn connect_widget(&self, widget: &Rc<dyn SchedulerWidget>) {
        *self.widget.borrow_mut() = Some(Rc::downgrade(widget));
    }

    /// Requests a widget redraw; a no-op while no live widget is
    /// connected.
    pub fn force_update(&self) {
        let handle = self.widget.borrow().clone();
        match handle.and_then(|weak| weak.upgrade()) {
            Some(widget) => widget.update(),
            None => tracing::trace!("redraw requested without a connected widget"),
        }
    }
}

impl Default for ColumnSelection {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ColumnSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("ColumnSelection")
            .field("selected", &state.len())
            .field("anchor", &state.anchor())
            .field("generation", &state.generation())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    fn keys(selection: &ColumnSelection) -> Vec<String> {
        selection
            .selected_keys()
            .iter()
            .map(DateKey::to_string)
            .collect()
    }

    #[test]
    fn test_select_single_replaces_selection_and_anchor() {
        let selection = ColumnSelection::new();
        selection.select_single(date(2024, 1, 10));
        assert_eq!(keys(&selection), vec!["2024-01-10"]);
        assert_eq!(selection.anchor(), Some(date(2024, 1, 10)));

        selection.select_single(date(2024, 3, 5));
        assert_eq!(keys(&selection), vec!["2024-03-05"]);
        assert_eq!(selection.anchor(), Some(date(2024, 3, 5)));
    }

    #[test]
    fn test_toggle_is_its_own_inverse() {
        let selection = ColumnSelection::new();
        selection.select_single(date(2024, 1, 10));

        selection.toggle_date(date(2024, 1, 12));
        assert_eq!(keys(&selection), vec!["2024-01-10", "2024-01-12"]);

        selection.toggle_date(date(2024, 1, 12));
        assert_eq!(keys(&selection), vec!["2024-01-10"]);
    }

    #[test]
    fn test_toggle_sets_anchor_only_when_unset() {
        let selection = ColumnSelection::new();
        assert!(selection.anchor().is_none());

        selection.toggle_date(date(2024, 1, 10));
        assert_eq!(selection.anchor(), Some(date(2024, 1, 10)));

        // Anchor is already set; further toggles leave it alone.
        selection.toggle_date(date(2024, 1, 12));
        assert_eq!(selection.anchor(), Some(date(2024, 1, 10)));

        selection.toggle_date(date(2024, 1, 10));
        assert_eq!(selection.anchor(), Some(date(2024, 1, 10)));
    }

    #[test]
    fn test_range_spans_inclusive_days() {
        let selection = ColumnSelection::new();
        selection.select_single(date(2024, 1, 10));
        selection.select_range(date(2024, 1, 13));
        assert_eq!(
            keys(&selection),
            vec!["2024-01-10", "2024-01-11", "2024-01-12", "2024-01-13"]
        );
    }

    #[test]
    fn test_range_is_symmetric_in_endpoints() {
        let forward = ColumnSelection::new();
        forward.select_single(date(2024, 1, 10));
        forward.select_range(date(2024, 1, 13));

        let backward = ColumnSelection::new();
        backward.select_single(date(2024, 1, 13));
        backward.select_range(date(2024, 1, 10));

        assert_eq!(forward.selected_keys(), backward.selected_keys());
    }

    #[test]
    fn test_range_spans_month_boundary() {
        let selection = ColumnSelection::new();
        selection.select_single(date(2024, 1, 30));
        selection.select_range(date(2024, 2, 2));
        assert_eq!(
            keys(&selection),
            vec!["2024-01-30", "2024-01-31", "2024-02-01", "2024-02-02"]
        );
    }

    #[test]
    fn test_range_without_anchor_acts_as_single_select() {
        let selection = ColumnSelection::new();
        selection.select_range(date(2024, 1, 13));
        assert_eq!(keys(&selection), vec!["2024-01-13"]);
        assert_eq!(selection.anchor(), Some(date(2024, 1, 13)));
    }

    #[test]
    fn test_range_leaves_anchor_for_repeated_adjustment() {
        let selection = ColumnSelection::new();
        selection.select_single(date(2024, 1, 10));

        selection.select_range(date(2024, 1, 13));
        assert_eq!(selection.anchor(), Some(date(2024, 1, 10)));

        // Shrinking the range from the same anchor.
        selection.select_range(date(2024, 1, 11));
        assert_eq!(keys(&selection), vec!["2024-01-10", "2024-01-11"]);
        assert_eq!(selection.anchor(), Some(date(2024, 1, 10)));
    }

    #[test]
    fn test_range_of_single_day() {
        let selection = ColumnSelection::new();
        selection.select_single(date(2024, 1, 10));
        selection.select_range(date(2024, 1, 10));
        assert_eq!(keys(&selection), vec!["2024-01-10"]);
    }

    #[test]
    fn test_clear_empties_set_and_anchor() {
        let selection = ColumnSelection::new();
        selection.select_single(date(2024, 1, 10));
        selection.clear();
        assert!(selection.is_empty());
        assert!(selection.selected_keys().is_empty());
        assert!(selection.anchor().is_none());
    }

    #[test]
    fn test_set_selected_keys_dedups_and_sorts() {
        let selection = ColumnSelection::new();
        selection.select_single(date(2024, 5, 1));

        let k = |y, m, d| DateKey::from_date(date(y, m, d));
        selection.set_selected_keys(vec![
            k(2024, 2, 1),
            k(2024, 1, 15),
            k(2024, 2, 1),
            k(2024, 1, 2),
        ]);

        assert_eq!(keys(&selection), vec!["2024-01-02", "2024-01-15", "2024-02-01"]);
        assert!(selection.anchor().is_none());
    }

    #[test]
    fn test_is_selected() {
        let selection = ColumnSelection::new();
        selection.select_single(date(2024, 1, 10));
        assert!(selection.is_selected(&DateKey::from_date(date(2024, 1, 10))));
        assert!(!selection.is_selected(&DateKey::from_date(date(2024, 1, 11))));
    }

    #[test]
    fn test_set_anchor_never_alters_selection() {
        let selection = ColumnSelection::new();
        selection.select_single(date(2024, 1, 10));

        selection.set_anchor(Some(date(2024, 6, 1)));
        assert_eq!(keys(&selection), vec!["2024-01-10"]);
        assert_eq!(selection.anchor(), Some(date(2024, 6, 1)));

        selection.set_anchor(None);
        assert_eq!(keys(&selection), vec!["2024-01-10"]);
        assert!(selection.anchor().is_none());
    }

    #[test]
    fn test_clones_share_state() {
        let selection = ColumnSelection::new();
        let other = selection.clone();

        selection.select_single(date(2024, 1, 10));
        assert!(other.is_selected(&DateKey::from_date(date(2024, 1, 10))));

        other.clear();
        assert!(selection.is_empty());
    }

    #[test]
    fn test_generation_increases_across_mutations() {
        let selection = ColumnSelection::new();
        let before = selection.generation();

        selection.select_single(date(2024, 1, 10));
        let after_select = selection.generation();
        assert!(after_select > before);

        selection.toggle_date(date(2024, 1, 11));
        let after_toggle = selection.generation();
        assert!(after_toggle > after_select);

        selection.clear();
        assert!(selection.generation() > after_toggle);
    }

    #[test]
    fn test_force_update_without_widget_is_noop() {
        let selection = ColumnSelection::new();
        // Must not panic with no widget connected.
        selection.force_update();
    }

    struct UpdateCounter {
        updates: std::cell::Cell<usize>,
    }

    impl SchedulerWidget for UpdateCounter {
        fn update(&self) {
            self.updates.set(self.updates.get() + 1);
        }
    }

    #[test]
    fn test_set_selected_keys_forces_redraw() {
        let selection = ColumnSelection::new();
        let counter = Rc::new(UpdateCounter {
            updates: std::cell::Cell::new(0),
        });
        let widget: Rc<dyn SchedulerWidget> = counter.clone();
        selection.connect_widget(&widget);

        selection.set_selected_keys(vec![DateKey::from_date(date(2024, 1, 10))]);
        assert_eq!(counter.updates.get(), 1);

        // Plain selection ops do not redraw on their own.
        selection.select_single(date(2024, 1, 11));
        assert_eq!(counter.updates.get(), 1);
    }

    #[test]
    fn test_force_update_after_widget_dropped_is_noop() {
        let selection = ColumnSelection::new();
        {
            let counter = Rc::new(UpdateCounter {
                updates: std::cell::Cell::new(0),
            });
            let widget: Rc<dyn SchedulerWidget> = counter;
            selection.connect_widget(&widget);
        }
        // The widget is gone; the weak handle no longer upgrades.
        selection.force_update();
    }

    #[test]
    fn test_state_handle_observes_mutations() {
        let selection = ColumnSelection::new();
        let handle = selection.state();

        selection.select_single(date(2024, 1, 10));
        assert_eq!(handle.borrow().len(), 1);
        assert_eq!(handle.borrow().anchor(), Some(date(2024, 1, 10)));
    }
}
