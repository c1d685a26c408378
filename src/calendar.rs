//! The month calendar: a displayed-month cursor and its grid view model

use chrono::{Datelike, Local, NaiveDate};
use csscolorparser::Color;

use crate::task::Task;

/// How many indicator dots a day cell shows at most.
/// Extra tasks on the same day produce no overflow marker.
pub const MAX_INDICATORS: usize = 3;

/// Weekday header labels, Sunday-first
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// The year-month currently displayed by the calendar.
///
/// This is a tiny state machine: the only transitions are one month backward or forward, and
/// there are no bounds in either direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonthCursor {
    year: i32,
    /// 1-indexed, always in 1..=12
    month: u32,
}

impl MonthCursor {
    /// The cursor positioned on the month containing `date`
    pub fn at(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The cursor positioned on the real current month
    pub fn current() -> Self {
        Self::at(Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Move the cursor one month backward
    pub fn prev_month(&mut self) {
        if self.month == 1 {
            self.year -= 1;
            self.month = 12;
        } else {
            self.month -= 1;
        }
    }

    /// Move the cursor one month forward
    pub fn next_month(&mut self) {
        if self.month == 12 {
            self.year += 1;
            self.month = 1;
        } else {
            self.month += 1;
        }
    }

    /// The first day of the displayed month
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .unwrap(/* this cannot fail, month is always in 1..=12 */)
    }

    /// The displayed month, as a human-readable label (e.g. "March 2024")
    pub fn label(&self) -> String {
        self.first_day().format("%B %Y").to_string()
    }

    /// Build the grid view model for the displayed month.
    ///
    /// `today` marks the "today" cell (only when the displayed month is the real current month),
    /// `selected` marks the day the task list is currently filtered to, and `tasks` provides the
    /// per-day indicator dots.
    pub fn grid(&self, today: NaiveDate, selected: Option<NaiveDate>, tasks: &[Task]) -> MonthGrid {
        let first = self.first_day();
        let day_count = days_in_month(self.year, self.month);

        let cells = (1..=day_count)
            .map(|day| {
                let date = NaiveDate::from_ymd_opt(self.year, self.month, day)
                    .unwrap(/* this cannot fail, day is at most the month's length */);
                let indicators = tasks.iter()
                    .filter(|task| task.date() == date)
                    .take(MAX_INDICATORS)
                    .map(|task| task.color().indicator())
                    .collect();
                DayCell {
                    day,
                    date,
                    is_today: date == today,
                    is_selected: selected == Some(date),
                    indicators,
                }
            })
            .collect();

        MonthGrid {
            label: self.label(),
            weekday_labels: WEEKDAY_LABELS,
            leading_blanks: first.weekday().num_days_from_sunday() as usize,
            cells,
        }
    }
}

impl Default for MonthCursor {
    fn default() -> Self {
        Self::current()
    }
}

/// How many days the given month has.
/// Uses the day-before-the-first-of-next-month trick rather than leap-year arithmetic.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap(/* this cannot fail, month is always in 1..=12 */)
        .pred_opt()
        .unwrap(/* this cannot fail, there is always a day before the first of a month */)
        .day()
}

/// Everything a UI needs to draw one month, computed from the store.
/// Rebuilt from scratch on every render: lists are small and renders are user-driven.
#[derive(Clone, Debug, PartialEq)]
pub struct MonthGrid {
    /// Human-readable month label (e.g. "March 2024")
    pub label: String,
    /// Weekday header labels, Sunday-first
    pub weekday_labels: [&'static str; 7],
    /// Number of blank cells before day 1, so that cells align under their weekday
    pub leading_blanks: usize,
    /// One cell per day of the month, in order
    pub cells: Vec<DayCell>,
}

/// One day cell of a [`MonthGrid`]
#[derive(Clone, Debug, PartialEq)]
pub struct DayCell {
    /// Day of month, 1-indexed
    pub day: u32,
    pub date: NaiveDate,
    /// Whether this cell is the real current date
    pub is_today: bool,
    /// Whether the task list is currently filtered to this day
    pub is_selected: bool,
    /// Indicator dot colors, at most [`MAX_INDICATORS`], in store order
    pub indicators: Vec<Color>,
}
