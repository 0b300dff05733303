// File: crates/visualize-core/src/calendar.rs
// Summary: Day-banded date axis: one lane per day, label collision removal, weekend bands, month/year gridlines.

use chrono::{Datelike, NaiveDate, Weekday};
use tracing::trace;

use crate::axis::{GridLine, LineTier};
use crate::text::TextMeasure;

/// Date arithmetic the calendar axis depends on.
pub trait Calendar {
    /// Whole days from `start` to `end` (negative when `end` is earlier).
    fn elapsed_days(&self, start: NaiveDate, end: NaiveDate) -> i64;
    /// `date` moved by `days`, `None` when out of the supported range.
    fn add_days(&self, date: NaiveDate, days: i64) -> Option<NaiveDate>;
}

/// Proleptic Gregorian calendar backed by `chrono`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ChronoCalendar;

impl Calendar for ChronoCalendar {
    fn elapsed_days(&self, start: NaiveDate, end: NaiveDate) -> i64 {
        end.signed_duration_since(start).num_days()
    }

    fn add_days(&self, date: NaiveDate, days: i64) -> Option<NaiveDate> {
        date.checked_add_signed(chrono::Duration::try_days(days)?)
    }
}

pub const MONTH_ABBREVIATIONS: [&str; 12] =
    ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];

/// One day-wide lane.
#[derive(Clone, Debug, PartialEq)]
pub struct DayLane {
    pub date: NaiveDate,
    pub left: f32,
    pub width: f32,
    /// Day number (plus month / year lines on the 1st); `None` when removed to avoid overlap.
    pub text: Option<String>,
    pub tier: LineTier,
}

/// Weekend highlight starting on a Saturday lane and covering two lanes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeekendBand {
    pub center: f32,
    pub width: f32,
}

impl WeekendBand {
    pub fn left(&self) -> f32 {
        self.center - self.width / 2.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CalendarLayout {
    pub width: f32,
    pub height: f32,
    pub lane: f32,
    pub lanes: Vec<DayLane>,
    pub lines: Vec<GridLine>,
    pub weekends: Vec<WeekendBand>,
}

impl CalendarLayout {
    pub fn lines_of(&self, tier: LineTier) -> impl Iterator<Item = &GridLine> + '_ {
        self.lines.iter().filter(move |l| l.tier == tier)
    }
}

/// Day labels wider than this share of the lane are dropped, unless the day
/// is the 1st or a multiple of 5.
fn crowding_threshold(day: u32) -> f32 {
    if day < 10 { 0.5 } else { 0.9 }
}

fn label_hidden(day: u32, label_width: f32, lane: f32) -> bool {
    (label_width > lane * crowding_threshold(day) && day % 5 != 0 && day != 1)
        || (day == 30 && label_width > lane * 1.9)
}

/// Lay out `start..=end` day by day across a `width` x `height` canvas.
///
/// `month_names` supplies the abbreviation appended on the 1st of each month;
/// missing entries fall back to [`MONTH_ABBREVIATIONS`].
pub fn layout_date_range(
    calendar: &dyn Calendar,
    start: NaiveDate,
    end: NaiveDate,
    month_names: &[String],
    width: f32,
    height: f32,
    measure: &dyn TextMeasure,
) -> CalendarLayout {
    let lanes_total = calendar.elapsed_days(start, end) + 1;
    let lane = if lanes_total <= 0 { width } else { width / lanes_total as f32 };

    let mut lanes = Vec::new();
    let mut lines = Vec::new();
    let mut weekends = Vec::new();

    let mut next = start;
    let mut i = 0usize;
    while next <= end {
        let day = next.day();
        let left = lane * i as f32;
        let mut text = day.to_string();
        let hidden = label_hidden(day, measure.text_width(&text), lane);
        if hidden {
            trace!(%next, "day label removed, lane too narrow");
        }

        if next.weekday() == Weekday::Sat {
            weekends.push(WeekendBand { center: lane * (i + 1) as f32, width: lane * 2.0 });
        }

        let tier = if day == 1 {
            let month = next.month0() as usize;
            let name = month_names
                .get(month)
                .map(String::as_str)
                .unwrap_or(MONTH_ABBREVIATIONS[month]);
            text.push('\n');
            text.push_str(name);
            if month == 0 {
                text.push('\n');
                text.push_str(&format!("{:04}", next.year()));
                LineTier::Year
            } else {
                LineTier::Month
            }
        } else {
            LineTier::Day
        };
        lines.push(GridLine::vertical(left, height, tier));

        lanes.push(DayLane { date: next, left, width: lane, text: (!hidden).then_some(text), tier });

        next = match calendar.add_days(next, 1) {
            Some(d) => d,
            None => break,
        };
        i += 1;
    }

    CalendarLayout { width, height, lane, lanes, lines, weekends }
}
