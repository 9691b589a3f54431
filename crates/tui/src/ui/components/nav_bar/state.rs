use std::cell::Cell;
use std::rc::Rc;

use iqnav_types::{NavAction, NavItem, Route};
use ratatui::layout::Rect;
use tracing::{debug, warn};

use super::packer::visible_count;
use crate::ui::observer::{Subscription, WidthObserver};

/// Produces the rendered width of a navigation entry.
///
/// A width of `0` means the entry cannot be measured yet.
pub trait Measurer {
    fn measure(&self, item: &NavItem) -> u32;
}

impl<F> Measurer for F
where
    F: Fn(&NavItem) -> u32,
{
    fn measure(&self, item: &NavItem) -> u32 {
        self(item)
    }
}

/// Layout phase of the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutPhase {
    /// The visible count is unknown or stale.
    Measuring,
    /// The visible count matches the current width and item list.
    Stable,
}

#[derive(Debug, Default)]
enum Observation {
    /// Not mounted; no width will arrive.
    #[default]
    Detached,
    Active(Subscription),
    /// The host cannot observe widths; every entry is shown inline.
    Unavailable,
}

/// Which control of the bar holds keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavFocus {
    /// Inline entry at this position among the visible entries.
    Item(usize),
    /// The "More" trigger.
    Trigger,
}

/// Open/closed state and cursor of the overflow menu.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OverflowMenuState {
    pub open: bool,
    pub cursor: usize,
}

/// State for the overflow navigation bar.
///
/// Holds the caller-supplied items, the measured width of each renderable
/// entry (indexed by entry position and reset whenever the items change),
/// the last observed container width and the computed partition.
#[derive(Debug)]
pub struct OverflowNavState {
    items: Vec<NavItem>,
    /// Indices into `items` of entries with a renderable label, in order.
    entries: Vec<usize>,
    /// Measured width per entry; `0` while unmeasured.
    widths: Vec<u32>,
    generation: u64,
    /// Written by the observer callback.
    observed_width: Rc<Cell<Option<u32>>>,
    container_width: Option<u32>,
    reserved_width: u32,
    spacing: u32,
    visible_count: usize,
    phase: LayoutPhase,
    observation: Observation,
    pub menu: OverflowMenuState,
    pub focus: Option<NavFocus>,
    /// Entry position of the active route, if any entry navigates to it.
    pub selected: Option<usize>,
    /// Last rendered area of the bar; used for hit testing.
    pub last_area: Rect,
    /// Areas of the inline entries from the last render.
    pub per_item_areas: Vec<Rect>,
    /// Area of the "More" trigger from the last render.
    pub trigger_area: Option<Rect>,
    /// Overflow menu rows from the last render as (menu position, area).
    pub menu_item_areas: Vec<(usize, Rect)>,
    /// Outer area of the overflow menu popup from the last render.
    pub menu_area: Option<Rect>,
}

impl OverflowNavState {
    pub fn new(items: Vec<NavItem>, reserved_width: u32, spacing: u32) -> Self {
        let mut state = Self {
            items: Vec::new(),
            entries: Vec::new(),
            widths: Vec::new(),
            generation: 0,
            observed_width: Rc::new(Cell::new(None)),
            container_width: None,
            reserved_width,
            spacing,
            visible_count: 0,
            phase: LayoutPhase::Measuring,
            observation: Observation::Detached,
            menu: OverflowMenuState::default(),
            focus: None,
            selected: None,
            last_area: Rect::default(),
            per_item_areas: Vec::new(),
            trigger_area: None,
            menu_item_areas: Vec::new(),
            menu_area: None,
        };
        state.set_items(items);
        state
    }

    /// Replaces the item list.
    ///
    /// Measured widths are discarded so nothing measured for the previous
    /// list is reused, and the bar returns to `Measuring`.
    pub fn set_items(&mut self, items: Vec<NavItem>) {
        let skipped = items.iter().filter(|item| !item.is_renderable()).count();
        if skipped > 0 {
            warn!(skipped, "Skipping navigation entries without a label");
        }
        self.entries = items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.is_renderable())
            .map(|(index, _)| index)
            .collect();
        self.items = items;
        self.widths = vec![0; self.entries.len()];
        self.generation += 1;
        self.visible_count = 0;
        self.menu = OverflowMenuState::default();
        self.focus = None;
        self.selected = None;
        self.per_item_areas.clear();
        self.menu_item_areas.clear();
        self.enter_measuring();
        debug!(generation = self.generation, entries = self.entries.len(), "Navigation items replaced");
    }

    /// Starts observing the container width.
    ///
    /// When the observer is unavailable the bar fails open: every entry is
    /// shown inline and no trigger is rendered.
    pub fn mount<O: WidthObserver + ?Sized>(&mut self, observer: &O, target: &str) {
        self.unmount();
        let sink = Rc::clone(&self.observed_width);
        match observer.observe(target, Box::new(move |width| sink.set(Some(width)))) {
            Ok(subscription) => {
                self.observation = Observation::Active(subscription);
                self.enter_measuring();
            }
            Err(error) => {
                warn!(error = %error, target_id = target, "Layout observation unavailable; showing all navigation entries");
                self.observation = Observation::Unavailable;
                self.visible_count = self.entries.len();
                self.phase = LayoutPhase::Stable;
            }
        }
    }

    /// Detaches the width observer and forgets the container width.
    pub fn unmount(&mut self) {
        if let Observation::Active(subscription) = std::mem::take(&mut self.observation) {
            subscription.unsubscribe();
        }
        self.observed_width.set(None);
        self.container_width = None;
        self.menu = OverflowMenuState::default();
        self.enter_measuring();
    }

    #[cfg(test)]
    pub fn is_observing(&self) -> bool {
        matches!(self.observation, Observation::Active(_))
    }

    #[cfg(test)]
    pub fn is_observation_unavailable(&self) -> bool {
        matches!(self.observation, Observation::Unavailable)
    }

    /// Records the measured width of the entry at `position`.
    pub fn record_width(&mut self, position: usize, width: u32) {
        if let Some(slot) = self.widths.get_mut(position)
            && *slot != width
        {
            *slot = width;
            self.enter_measuring();
        }
    }

    /// Re-measures every entry at its natural width.
    ///
    /// Only widths that differ from the recorded ones send the bar back to
    /// `Measuring`.
    pub fn measure_with<M: Measurer + ?Sized>(&mut self, measurer: &M) {
        for position in 0..self.entries.len() {
            let width = measurer.measure(&self.items[self.entries[position]]);
            self.record_width(position, width);
        }
    }

    /// Applies any observed width change and re-packs when measuring.
    ///
    /// Returns `true` when the visible count changed.
    pub fn sync(&mut self) -> bool {
        if let Some(width) = self.observed_width.get()
            && self.container_width != Some(width)
        {
            self.container_width = Some(width);
            self.enter_measuring();
        }
        if self.phase == LayoutPhase::Stable {
            return false;
        }

        let previous = self.visible_count;
        match (&self.observation, self.container_width) {
            (Observation::Unavailable, _) => {
                self.visible_count = self.entries.len();
                self.phase = LayoutPhase::Stable;
            }
            (Observation::Active(_), Some(width)) => {
                self.visible_count = visible_count(&self.widths, width, self.reserved_width, self.spacing);
                self.phase = LayoutPhase::Stable;
            }
            // No width observed yet.
            _ => self.visible_count = 0,
        }

        if self.visible_count != previous {
            debug!(
                visible = self.visible_count,
                entries = self.entries.len(),
                container = ?self.container_width,
                "Navigation partition changed"
            );
            self.clamp_focus();
            match self.overflow_count() {
                0 => self.menu = OverflowMenuState::default(),
                count => self.menu.cursor = self.menu.cursor.min(count - 1),
            }
        }
        self.visible_count != previous
    }

    /// Re-measures entries and syncs in one step.
    pub fn relayout<M: Measurer + ?Sized>(&mut self, measurer: &M) -> bool {
        self.measure_with(measurer);
        self.sync()
    }

    fn enter_measuring(&mut self) {
        self.phase = LayoutPhase::Measuring;
    }

    fn clamp_focus(&mut self) {
        if let Some(NavFocus::Item(position)) = self.focus
            && position >= self.visible_count
        {
            self.focus = if self.visible_count > 0 {
                Some(NavFocus::Item(self.visible_count - 1))
            } else if self.has_overflow() {
                Some(NavFocus::Trigger)
            } else {
                None
            };
        }
        if self.focus == Some(NavFocus::Trigger) && !self.has_overflow() {
            self.focus = self.visible_count.checked_sub(1).map(NavFocus::Item);
        }
    }

    #[cfg(test)]
    pub fn phase(&self) -> LayoutPhase {
        self.phase
    }

    #[cfg(test)]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[cfg(test)]
    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    pub fn reserved_width(&self) -> u32 {
        self.reserved_width
    }

    pub fn spacing(&self) -> u32 {
        self.spacing
    }

    #[cfg(test)]
    pub fn container_width(&self) -> Option<u32> {
        self.container_width
    }

    /// Number of renderable entries.
    #[cfg(test)]
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Number of leading entries rendered inline.
    #[cfg(test)]
    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    /// Whether the "More" trigger is shown.
    pub fn has_overflow(&self) -> bool {
        self.visible_count < self.entries.len()
    }

    #[cfg(test)]
    pub fn widths(&self) -> &[u32] {
        &self.widths
    }

    /// Width of the inline entry at `position`.
    pub fn width_of(&self, position: usize) -> u32 {
        self.widths.get(position).copied().unwrap_or_default()
    }

    pub fn entry(&self, position: usize) -> Option<&NavItem> {
        self.entries.get(position).map(|&index| &self.items[index])
    }

    /// Entries rendered inline, in order.
    pub fn visible_items(&self) -> impl Iterator<Item = &NavItem> {
        self.entries[..self.visible_count].iter().map(|&index| &self.items[index])
    }

    /// Entries routed into the overflow menu, in order.
    pub fn overflow_items(&self) -> impl Iterator<Item = &NavItem> {
        self.entries[self.visible_count..].iter().map(|&index| &self.items[index])
    }

    pub fn overflow_count(&self) -> usize {
        self.entries.len() - self.visible_count
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu.open
    }

    /// Opens the menu; a no-op when nothing overflows.
    pub fn open_menu(&mut self) {
        if self.has_overflow() {
            self.menu = OverflowMenuState { open: true, cursor: 0 };
        }
    }

    pub fn close_menu(&mut self) {
        self.menu.open = false;
    }

    pub fn toggle_menu(&mut self) {
        if self.menu.open {
            self.close_menu();
        } else {
            self.open_menu();
        }
    }

    /// Moves the menu cursor, wrapping at both ends.
    pub fn move_menu_cursor(&mut self, forward: bool) {
        let len = self.overflow_count();
        if !self.menu.open || len == 0 {
            return;
        }
        self.menu.cursor = if forward {
            (self.menu.cursor + 1) % len
        } else {
            (self.menu.cursor + len - 1) % len
        };
    }

    /// Selects the overflowed entry at `position` (relative to the menu).
    ///
    /// Closes the menu and returns the entry's action. Returns `None` and
    /// leaves the menu untouched when the menu is closed or `position` is out
    /// of range.
    pub fn select_overflow(&mut self, position: usize) -> Option<NavAction> {
        if !self.menu.open || position >= self.overflow_count() {
            return None;
        }
        let entry_position = self.visible_count + position;
        let action = self.entry(entry_position).map(|item| item.action.clone());
        self.close_menu();
        self.mark_selected(entry_position);
        action
    }

    /// Selects the entry under the menu cursor.
    pub fn select_menu_cursor(&mut self) -> Option<NavAction> {
        self.select_overflow(self.menu.cursor)
    }

    /// Activates the inline entry at `position`.
    pub fn activate_inline(&mut self, position: usize) -> Option<NavAction> {
        if position >= self.visible_count {
            return None;
        }
        self.close_menu();
        self.mark_selected(position);
        self.entry(position).map(|item| item.action.clone())
    }

    fn mark_selected(&mut self, position: usize) {
        if matches!(self.entry(position).map(|item| &item.action), Some(NavAction::Navigate(_))) {
            self.selected = Some(position);
        }
    }

    /// Highlights the entry that navigates to `route`.
    pub fn set_route(&mut self, route: Route) {
        self.selected = (0..self.entries.len())
            .find(|&position| self.entry(position).is_some_and(|item| item.action == NavAction::Navigate(route)));
    }

    /// Moves keyboard focus across the inline entries and the trigger,
    /// wrapping at both ends.
    pub fn cycle_focus(&mut self, forward: bool) {
        let mut stops: Vec<NavFocus> = (0..self.visible_count).map(NavFocus::Item).collect();
        if self.has_overflow() {
            stops.push(NavFocus::Trigger);
        }
        if stops.is_empty() {
            self.focus = None;
            return;
        }
        let len = stops.len();
        let next = match self.focus.and_then(|focus| stops.iter().position(|stop| *stop == focus)) {
            Some(current) if forward => (current + 1) % len,
            Some(current) => (current + len - 1) % len,
            None if forward => 0,
            None => len - 1,
        };
        self.focus = Some(stops[next]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::observer::{LayoutObserver, UnavailableObserver};

    const TARGET: &str = "nav.test";
    const RESERVED: u32 = 56;

    fn item(label: &str) -> NavItem {
        NavItem::new(label, NavAction::Invoke(label.to_lowercase()))
    }

    fn fixed(width: u32) -> impl Fn(&NavItem) -> u32 {
        move |_: &NavItem| width
    }

    fn mounted(items: Vec<NavItem>, observer: &LayoutObserver) -> OverflowNavState {
        let mut state = OverflowNavState::new(items, RESERVED, 0);
        state.mount(observer, TARGET);
        state
    }

    #[test]
    fn wide_container_shows_item_inline() {
        let observer = LayoutObserver::new();
        let mut state = mounted(vec![NavItem::route(Route::Quiz)], &observer);
        observer.report(TARGET, 1000);
        state.relayout(&fixed(100));

        assert_eq!(state.phase(), LayoutPhase::Stable);
        assert_eq!(state.visible_count(), 1);
        assert!(!state.has_overflow());
        assert_eq!(state.visible_items().next().map(|item| item.label.as_str()), Some("Questions"));
    }

    #[test]
    fn zero_width_overflows_and_menu_selects_once() {
        let observer = LayoutObserver::new();
        let mut state = mounted(vec![NavItem::route(Route::Quiz)], &observer);
        observer.report(TARGET, 0);
        state.relayout(&fixed(100));

        assert_eq!(state.visible_count(), 0);
        assert!(state.has_overflow());

        state.open_menu();
        assert!(state.is_menu_open());
        let labels: Vec<&str> = state.overflow_items().map(|item| item.label.as_str()).collect();
        assert_eq!(labels, vec!["Questions"]);

        assert_eq!(state.select_overflow(0), Some(NavAction::Navigate(Route::Quiz)));
        assert!(!state.is_menu_open());
        assert_eq!(state.select_overflow(0), None);
    }

    #[test]
    fn narrow_container_splits_after_first_item() {
        let observer = LayoutObserver::new();
        let mut state = mounted(vec![item("A"), item("B"), item("C")], &observer);
        observer.report(TARGET, 250);
        state.relayout(&fixed(100));

        assert_eq!(state.visible_count(), 1);
        let overflow: Vec<&str> = state.overflow_items().map(|item| item.label.as_str()).collect();
        assert_eq!(overflow, vec!["B", "C"]);
    }

    #[test]
    fn stays_measuring_until_a_width_is_observed() {
        let observer = LayoutObserver::new();
        let mut state = mounted(vec![item("A")], &observer);
        state.relayout(&fixed(10));
        assert_eq!(state.phase(), LayoutPhase::Measuring);
        assert_eq!(state.visible_count(), 0);

        observer.report(TARGET, 500);
        assert!(state.relayout(&fixed(10)));
        assert_eq!(state.phase(), LayoutPhase::Stable);
    }

    #[test]
    fn resizing_moves_entries_between_bar_and_menu() {
        let observer = LayoutObserver::new();
        let mut state = mounted(vec![item("A"), item("B"), item("C")], &observer);
        observer.report(TARGET, 1000);
        state.relayout(&fixed(100));
        assert_eq!(state.visible_count(), 3);

        observer.report(TARGET, 300);
        assert_eq!(state.phase(), LayoutPhase::Stable, "callback alone does not re-pack");
        state.sync();
        assert_eq!(state.visible_count(), 2);

        observer.report(TARGET, 100);
        state.sync();
        assert_eq!(state.visible_count(), 0);
    }

    #[test]
    fn repeated_sync_without_changes_is_idempotent() {
        let observer = LayoutObserver::new();
        let mut state = mounted(vec![item("A"), item("B"), item("C")], &observer);
        observer.report(TARGET, 260);
        state.relayout(&fixed(100));
        let first = state.visible_count();

        assert!(!state.relayout(&fixed(100)));
        assert_eq!(state.visible_count(), first);
    }

    #[test]
    fn replacing_items_discards_widths() {
        let observer = LayoutObserver::new();
        let mut state = mounted(vec![item("A"), item("B")], &observer);
        observer.report(TARGET, 1000);
        state.relayout(&fixed(100));
        let generation = state.generation();

        state.set_items(vec![item("X"), item("Y"), item("Z")]);
        assert_eq!(state.generation(), generation + 1);
        assert_eq!(state.phase(), LayoutPhase::Measuring);
        assert_eq!(state.widths(), &[0, 0, 0]);

        state.relayout(&fixed(300));
        assert_eq!(state.visible_count(), 3);
        assert_eq!(state.widths(), &[300, 300, 300]);
    }

    #[test]
    fn unmeasured_entry_stops_packing() {
        let observer = LayoutObserver::new();
        let mut state = mounted(vec![item("A"), item("B"), item("C")], &observer);
        observer.report(TARGET, 1000);
        state.record_width(0, 50);
        state.sync();
        assert_eq!(state.visible_count(), 1);

        state.record_width(1, 50);
        state.record_width(2, 50);
        state.sync();
        assert_eq!(state.visible_count(), 3);
    }

    #[test]
    fn unavailable_observer_shows_everything_inline() {
        let mut state = OverflowNavState::new(vec![item("A"), item("B"), item("C")], RESERVED, 0);
        state.mount(&UnavailableObserver, TARGET);
        state.relayout(&fixed(10_000));

        assert!(state.is_observation_unavailable());
        assert_eq!(state.phase(), LayoutPhase::Stable);
        assert_eq!(state.visible_count(), 3);
        assert!(!state.has_overflow());

        state.set_items(vec![item("D")]);
        state.sync();
        assert_eq!(state.visible_count(), 1);
    }

    #[test]
    fn unmount_detaches_observer() {
        let observer = LayoutObserver::new();
        let mut state = mounted(vec![item("A")], &observer);
        assert_eq!(observer.subscriber_count(TARGET), 1);

        state.unmount();
        assert_eq!(observer.subscriber_count(TARGET), 0);
        observer.report(TARGET, 400);
        state.sync();
        assert_eq!(state.container_width(), None);
        assert_eq!(state.phase(), LayoutPhase::Measuring);
    }

    #[test]
    fn dropping_state_releases_subscription() {
        let observer = LayoutObserver::new();
        {
            let _state = mounted(vec![item("A")], &observer);
            assert_eq!(observer.subscriber_count(TARGET), 1);
        }
        assert_eq!(observer.subscriber_count(TARGET), 0);
    }

    #[test]
    fn blank_labels_are_skipped() {
        let observer = LayoutObserver::new();
        let mut state = mounted(vec![item("A"), item("   "), item("B")], &observer);
        observer.report(TARGET, 1000);
        state.relayout(&fixed(10));

        assert_eq!(state.entry_count(), 2);
        let labels: Vec<&str> = state.visible_items().map(|item| item.label.as_str()).collect();
        assert_eq!(labels, vec!["A", "B"]);
        assert_eq!(state.items().len(), 3);
    }

    #[test]
    fn empty_list_has_no_trigger() {
        let observer = LayoutObserver::new();
        let mut state = mounted(Vec::new(), &observer);
        observer.report(TARGET, 80);
        state.relayout(&fixed(10));

        assert_eq!(state.visible_count(), 0);
        assert!(!state.has_overflow());
        state.open_menu();
        assert!(!state.is_menu_open());
    }

    #[test]
    fn growing_the_container_closes_menu_when_nothing_overflows() {
        let observer = LayoutObserver::new();
        let mut state = mounted(vec![item("A"), item("B")], &observer);
        observer.report(TARGET, 100);
        state.relayout(&fixed(40));
        state.open_menu();
        assert!(state.is_menu_open());

        observer.report(TARGET, 500);
        state.sync();
        assert!(!state.has_overflow());
        assert!(!state.is_menu_open());
    }

    #[test]
    fn growing_the_container_keeps_menu_cursor_on_an_overflowed_entry() {
        let observer = LayoutObserver::new();
        let labels = ["A", "B", "C", "D", "E", "F", "G"];
        let mut state = mounted(labels.iter().map(|label| item(label)).collect(), &observer);
        observer.report(TARGET, 0);
        state.relayout(&fixed(10));
        state.open_menu();
        state.move_menu_cursor(false);
        assert_eq!(state.menu.cursor, 6);

        observer.report(TARGET, 60 + RESERVED);
        state.sync();
        assert_eq!(state.overflow_count(), 1);
        assert!(state.is_menu_open());
        assert_eq!(state.menu.cursor, 0);

        assert_eq!(state.select_menu_cursor(), Some(NavAction::Invoke("g".into())));
        assert!(!state.is_menu_open());
    }

    #[test]
    fn changed_natural_widths_are_picked_up_on_resize() {
        let observer = LayoutObserver::new();
        let mut state = mounted(vec![item("A"), item("B"), item("C")], &observer);
        observer.report(TARGET, 200 + RESERVED);
        state.relayout(&fixed(10));
        assert_eq!(state.visible_count(), 3);

        observer.report(TARGET, 100 + RESERVED);
        state.relayout(&fixed(50));
        assert_eq!(state.widths(), &[50, 50, 50]);
        assert_eq!(state.visible_count(), 2);
    }

    #[test]
    fn changed_natural_width_repacks_without_resize() {
        let observer = LayoutObserver::new();
        let mut state = mounted(vec![item("A"), item("B")], &observer);
        observer.report(TARGET, 100 + RESERVED);
        state.relayout(&fixed(40));
        assert_eq!(state.visible_count(), 2);

        assert!(state.relayout(&fixed(60)));
        assert_eq!(state.visible_count(), 1);
        assert!(!state.relayout(&fixed(60)));
    }

    #[test]
    fn menu_cursor_wraps() {
        let observer = LayoutObserver::new();
        let mut state = mounted(vec![item("A"), item("B"), item("C")], &observer);
        observer.report(TARGET, 0);
        state.relayout(&fixed(10));
        state.open_menu();

        state.move_menu_cursor(false);
        assert_eq!(state.menu.cursor, 2);
        state.move_menu_cursor(true);
        assert_eq!(state.menu.cursor, 0);
        assert_eq!(state.select_menu_cursor(), Some(NavAction::Invoke("a".into())));
    }

    #[test]
    fn focus_cycles_through_items_and_trigger() {
        let observer = LayoutObserver::new();
        let mut state = mounted(vec![item("A"), item("B"), item("C")], &observer);
        observer.report(TARGET, 100 + RESERVED);
        state.relayout(&fixed(50));
        assert_eq!(state.visible_count(), 2);

        state.cycle_focus(true);
        assert_eq!(state.focus, Some(NavFocus::Item(0)));
        state.cycle_focus(true);
        state.cycle_focus(true);
        assert_eq!(state.focus, Some(NavFocus::Trigger));
        state.cycle_focus(true);
        assert_eq!(state.focus, Some(NavFocus::Item(0)));
        state.cycle_focus(false);
        assert_eq!(state.focus, Some(NavFocus::Trigger));
    }

    #[test]
    fn shrinking_clamps_focus() {
        let observer = LayoutObserver::new();
        let mut state = mounted(vec![item("A"), item("B"), item("C")], &observer);
        observer.report(TARGET, 1000);
        state.relayout(&fixed(50));
        state.focus = Some(NavFocus::Item(2));

        observer.report(TARGET, 50 + RESERVED);
        state.sync();
        assert_eq!(state.focus, Some(NavFocus::Item(0)));
    }

    #[test]
    fn route_selection_tracks_navigate_entries() {
        let observer = LayoutObserver::new();
        let mut state = mounted(vec![NavItem::route(Route::Home), NavItem::route(Route::Quiz), item("Sign out")], &observer);
        state.set_route(Route::Quiz);
        assert_eq!(state.selected, Some(1));
        state.set_route(Route::AdminPricing);
        assert_eq!(state.selected, None);
    }
}
