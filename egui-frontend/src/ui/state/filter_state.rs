//! # Filter Panel State
//!
//! State behind the transaction filter side panel.
//!
//! ## Draft vs. applied:
//! The panel edits a draft copy of the filters. Only `apply()` copies the draft
//! into the filters the list actually uses; closing the panel any other way
//! (Escape, the close button) throws the draft away. `clear()` resets both.
//!
//! Escape belongs to an open date picker popup first; the panel only closes on
//! Escape when no picker is showing.

use chrono::{DateTime, NaiveDate, TimeZone};
use log::info;
use shared::dates::{end_of_day, start_of_day};
use shared::{QuickFilter, TransactionFilters};

#[derive(Debug, Clone, Default)]
pub struct FilterPanelState {
    pub is_open: bool,
    pub draft: TransactionFilters,
    /// Preset last picked, highlighted until a date is edited by hand
    pub active_quick_filter: Option<QuickFilter>,
    /// Whether a date picker popup was showing at the end of the last frame
    pub date_picker_open: bool,
}

/// What the From/To control shows for one bound of the draft range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundControl {
    /// No bound set: a placeholder button, so the range does not look active
    Placeholder,
    /// Bound set: a date picker showing that day
    Picker(NaiveDate),
}

impl BoundControl {
    pub fn for_bound(day: Option<NaiveDate>) -> Self {
        day.map_or(BoundControl::Placeholder, BoundControl::Picker)
    }
}

impl FilterPanelState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the panel with a fresh draft of the applied filters
    pub fn open(&mut self, applied: &TransactionFilters) {
        self.draft = applied.clone();
        self.active_quick_filter = None;
        self.date_picker_open = false;
        self.is_open = true;
    }

    /// Close without applying the draft
    pub fn close(&mut self) {
        self.is_open = false;
        self.date_picker_open = false;
    }

    /// Handle an Escape press. Returns `true` when the panel closed; an open
    /// date picker keeps the panel open.
    pub fn handle_escape(&mut self) -> bool {
        if !self.is_open || self.date_picker_open {
            return false;
        }
        info!("Filter panel dismissed with Escape");
        self.close();
        true
    }

    pub fn apply(&mut self, applied: &mut TransactionFilters) {
        info!("Applying transaction filters: {:?}", self.draft);
        *applied = self.draft.clone();
        self.is_open = false;
    }

    pub fn clear(&mut self, applied: &mut TransactionFilters) {
        info!("Clearing transaction filters");
        self.draft.clear();
        applied.clear();
        self.active_quick_filter = None;
        self.is_open = false;
    }

    pub fn apply_quick_filter<Tz: TimeZone>(&mut self, quick_filter: QuickFilter, now: &DateTime<Tz>) {
        self.draft.date_range = quick_filter.range_at(now);
        self.active_quick_filter = Some(quick_filter);
    }

    /// Set the draft's lower bound to the start of `day` in `tz`
    pub fn set_start_day<Tz: TimeZone>(&mut self, tz: &Tz, day: Option<NaiveDate>) {
        self.draft.date_range.start = day.map(|day| start_of_day(tz, day));
        self.active_quick_filter = None;
    }

    /// Set the draft's upper bound to the end of `day` in `tz`
    pub fn set_end_day<Tz: TimeZone>(&mut self, tz: &Tz, day: Option<NaiveDate>) {
        self.draft.date_range.end = day.map(|day| end_of_day(tz, day));
        self.active_quick_filter = None;
    }

    pub fn start_control<Tz: TimeZone>(&self, tz: &Tz) -> BoundControl {
        BoundControl::for_bound(self.start_day(tz))
    }

    pub fn end_control<Tz: TimeZone>(&self, tz: &Tz) -> BoundControl {
        BoundControl::for_bound(self.end_day(tz))
    }

    pub fn start_day<Tz: TimeZone>(&self, tz: &Tz) -> Option<NaiveDate> {
        self.draft.date_range.start.map(|start| start.with_timezone(tz).date_naive())
    }

    pub fn end_day<Tz: TimeZone>(&self, tz: &Tz) -> Option<NaiveDate> {
        self.draft.date_range.end.map(|end| end.with_timezone(tz).date_naive())
    }
}
