//! View window resolution and navigation.

use crate::model::dates::local_date_str;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Calendar view granularity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Seven consecutive days starting at the reference date.
    #[default]
    Week,
    /// The reference date only.
    Day,
}

impl ViewMode {
    /// Number of day columns in the grid.
    pub fn column_count(self) -> usize {
        match self {
            Self::Week => 7,
            Self::Day => 1,
        }
    }

    /// Days moved by one navigation step.
    pub fn step_days(self) -> u64 {
        self.column_count() as u64
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Day => "day",
        }
    }
}

/// View mode string outside `week|day`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownViewMode(pub String);

impl Display for UnknownViewMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown view mode `{}`; expected week|day", self.0)
    }
}

impl Error for UnknownViewMode {}

impl FromStr for ViewMode {
    type Err = UnknownViewMode;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "week" => Ok(Self::Week),
            "day" => Ok(Self::Day),
            other => Err(UnknownViewMode(other.to_string())),
        }
    }
}

/// Navigation direction for the prev/next controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Prev,
    Next,
}

/// Ordered, consecutive days currently in view.
///
/// Never empty: holds 7 days in week mode and 1 in day mode. The one
/// exception is a week starting within 6 days of `NaiveDate::MAX`, which is
/// cut short at the last representable date while `mode()` still reports
/// `Week`. Size grids with `column_count()`, not `mode().column_count()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewWindow {
    mode: ViewMode,
    days: Vec<NaiveDate>,
}

impl ViewWindow {
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn days(&self) -> &[NaiveDate] {
        &self.days
    }

    pub fn first(&self) -> NaiveDate {
        self.days[0]
    }

    pub fn last(&self) -> NaiveDate {
        self.days[self.days.len() - 1]
    }

    pub fn first_date_str(&self) -> String {
        local_date_str(self.first())
    }

    pub fn last_date_str(&self) -> String {
        local_date_str(self.last())
    }

    pub fn column_count(&self) -> usize {
        self.days.len()
    }

    /// Whether `date` falls inside the window, bounds inclusive.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.first() && date <= self.last()
    }

    /// Header label, `YYYY-MM-DD` for one day or `first - last` for a week.
    pub fn label(&self) -> String {
        if self.days.len() == 1 {
            self.first_date_str()
        } else {
            format!("{} - {}", self.first_date_str(), self.last_date_str())
        }
    }
}

/// One header cell of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayColumn {
    pub date: NaiveDate,
    /// 1-based grid column.
    pub column: usize,
    pub is_today: bool,
}

/// Resolves the days in view for `reference` and `mode`.
///
/// The window starts exactly at `reference`; there is no snapping to a
/// week boundary.
pub fn resolve_window(reference: NaiveDate, mode: ViewMode) -> ViewWindow {
    let mut days = Vec::with_capacity(mode.column_count());
    let mut cursor = Some(reference);
    while days.len() < mode.column_count() {
        let Some(day) = cursor else { break };
        days.push(day);
        cursor = day.succ_opt();
    }
    ViewWindow { mode, days }
}

/// Shifts `reference` by one navigation step for `mode`.
///
/// Leaves `reference` unchanged when the step would leave the calendar range.
pub fn navigate(reference: NaiveDate, mode: ViewMode, direction: NavDirection) -> NaiveDate {
    let steps = match direction {
        NavDirection::Next => 1,
        NavDirection::Prev => -1,
    };
    navigate_by(reference, mode, steps)
}

/// Shifts `reference` by `steps` navigation steps in one move; negative
/// values go back.
///
/// Leaves `reference` unchanged when the shift would leave the calendar range.
pub fn navigate_by(reference: NaiveDate, mode: ViewMode, steps: i64) -> NaiveDate {
    let shifted = mode
        .step_days()
        .checked_mul(steps.unsigned_abs())
        .map(Days::new)
        .and_then(|offset| {
            if steps < 0 {
                reference.checked_sub_days(offset)
            } else {
                reference.checked_add_days(offset)
            }
        });
    shifted.unwrap_or(reference)
}

/// Builds header cells for `window`, flagging the column equal to `today`.
pub fn day_columns(window: &ViewWindow, today: NaiveDate) -> Vec<DayColumn> {
    window
        .days()
        .iter()
        .enumerate()
        .map(|(index, date)| DayColumn {
            date: *date,
            column: index + 1,
            is_today: *date == today,
        })
        .collect()
}
