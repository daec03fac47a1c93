use chrono::{Datelike, NaiveDate};

use crate::errors::CoreError;
use crate::models::calendar::{CalendarEvent, CalendarFilter, EventKind, MonthGrid};

/// Client-side filtering of the smart calendar. Events are never mutated.
pub struct CalendarService;

impl CalendarService {
    pub fn new() -> Self {
        Self
    }

    /// Does an event pass the type tab?
    ///
    /// - `All`: everything
    /// - `Mine`: events tied to a ticker
    /// - `Macro`: no ticker, and not an earnings or dividend entry
    pub fn matches_filter(&self, event: &CalendarEvent, filter: CalendarFilter) -> bool {
        match filter {
            CalendarFilter::All => true,
            CalendarFilter::Mine => event.has_ticker(),
            CalendarFilter::Macro => {
                !event.has_ticker()
                    && !matches!(event.kind, Some(EventKind::Earnings) | Some(EventKind::Dividend))
            }
        }
    }

    /// Apply the type tab and, when a day is selected, an exact date match.
    pub fn filter<'a>(
        &self,
        events: &'a [CalendarEvent],
        filter: CalendarFilter,
        selected: Option<NaiveDate>,
    ) -> Vec<&'a CalendarEvent> {
        let selected = selected.map(|d| d.format("%Y-%m-%d").to_string());
        events
            .iter()
            .filter(|e| self.matches_filter(e, filter))
            .filter(|e| selected.as_deref().map_or(true, |day| e.date == day))
            .collect()
    }

    /// Clicking the selected day again clears the selection.
    pub fn toggle_selection(&self, current: Option<NaiveDate>, clicked: NaiveDate) -> Option<NaiveDate> {
        if current == Some(clicked) {
            None
        } else {
            Some(clicked)
        }
    }

    /// Days of a month with the Sunday-based offset of the 1st.
    pub fn month_grid(&self, year: i32, month: u32) -> Result<MonthGrid, CoreError> {
        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
            CoreError::ValidationError(format!("Invalid calendar month {year}-{month:02}"))
        })?;

        let days: Vec<NaiveDate> = first
            .iter_days()
            .take_while(|d| d.month() == month)
            .collect();

        Ok(MonthGrid {
            year,
            month,
            leading_blanks: first.weekday().num_days_from_sunday(),
            days,
        })
    }

    /// Number of events on a day, for the dots under calendar cells.
    pub fn events_on(&self, events: &[CalendarEvent], day: NaiveDate) -> usize {
        let day = day.format("%Y-%m-%d").to_string();
        events.iter().filter(|e| e.date == day).count()
    }
}

impl Default for CalendarService {
    fn default() -> Self {
        Self::new()
    }
}
