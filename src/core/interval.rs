//! Calendar interval classification and stepping for time axes.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{AxisError, AxisResult};

/// Uniform calendar stepping unit for time-axis ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateInterval {
    Day,
    Week,
    Month,
    Year,
}

impl DateInterval {
    /// Steps `date` forward by `count` whole intervals.
    ///
    /// Month and year steps clamp to the end of shorter months, the way
    /// calendar arithmetic is expected to behave for chart cadence.
    pub fn offset(self, date: NaiveDate, count: u32) -> AxisResult<NaiveDate> {
        let stepped = match self {
            Self::Day => date.checked_add_days(Days::new(u64::from(count))),
            Self::Week => date.checked_add_days(Days::new(u64::from(count) * 7)),
            Self::Month => date.checked_add_months(Months::new(count)),
            Self::Year => date.checked_add_months(Months::new(count * 12)),
        };
        stepped.ok_or_else(|| {
            AxisError::InvalidData(format!("date overflow stepping {date} by {count} {self}"))
        })
    }

    /// Rounds `date` down to the start of its interval.
    ///
    /// Weeks are Sunday-based, matching the tick boundaries the original
    /// charting stack produced.
    #[must_use]
    pub fn floor(self, date: NaiveDate) -> NaiveDate {
        match self {
            Self::Day => date,
            Self::Week => {
                let back = date.weekday().num_days_from_sunday();
                date - Days::new(u64::from(back))
            }
            Self::Month => date.with_day(1).unwrap_or(date),
            Self::Year => NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date),
        }
    }

    /// Rounds `date` up to the next interval boundary (identity when
    /// already on one).
    pub fn ceil(self, date: NaiveDate) -> AxisResult<NaiveDate> {
        let floored = self.floor(date);
        if floored == date {
            Ok(date)
        } else {
            self.offset(floored, 1)
        }
    }
}

impl fmt::Display for DateInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        };
        f.write_str(text)
    }
}

impl FromStr for DateInterval {
    type Err = AxisError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text {
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            other => Err(AxisError::InvalidInterval(other.to_owned())),
        }
    }
}

/// Coarsest uniform cadence spanning a date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalSpec {
    pub interval: DateInterval,
    pub step: u32,
}

/// Infers the coarsest calendar unit and whole-step count between two dates.
///
/// Whole years win over whole months, months over weeks, weeks over days.
/// `step` is 0 only when both dates are identical; callers guard that
/// degenerate case alongside zero-width domains.
#[must_use]
pub fn classify_interval(start: NaiveDate, end: NaiveDate) -> IntervalSpec {
    let (start, end) = if end < start { (end, start) } else { (start, end) };

    let years = whole_years(start, end);
    if years > 0 {
        return IntervalSpec {
            interval: DateInterval::Year,
            step: years,
        };
    }

    let months = whole_months(start, end);
    if months > 0 {
        return IntervalSpec {
            interval: DateInterval::Month,
            step: months,
        };
    }

    let days = (end - start).num_days() as u32;
    if days >= 7 {
        return IntervalSpec {
            interval: DateInterval::Week,
            step: days / 7,
        };
    }

    IntervalSpec {
        interval: DateInterval::Day,
        step: days,
    }
}

fn whole_years(start: NaiveDate, end: NaiveDate) -> u32 {
    let mut years = end.year() - start.year();
    if (end.month(), end.day()) < (start.month(), start.day()) {
        years -= 1;
    }
    years.max(0) as u32
}

fn whole_months(start: NaiveDate, end: NaiveDate) -> u32 {
    let mut months =
        (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;
    if end.day() < start.day() {
        months -= 1;
    }
    months.max(0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
    }

    #[test]
    fn three_whole_years_classify_as_year_step_three() {
        let spec = classify_interval(date(2020, 1, 1), date(2023, 1, 1));
        assert_eq!(spec.interval, DateInterval::Year);
        assert_eq!(spec.step, 3);
    }

    #[test]
    fn three_whole_months_classify_as_month_step_three() {
        let spec = classify_interval(date(2020, 1, 1), date(2020, 4, 1));
        assert_eq!(spec.interval, DateInterval::Month);
        assert_eq!(spec.step, 3);
    }

    #[test]
    fn partial_year_falls_through_to_months() {
        let spec = classify_interval(date(2020, 3, 15), date(2021, 1, 10));
        assert_eq!(spec.interval, DateInterval::Month);
        assert_eq!(spec.step, 9);
    }

    #[test]
    fn sub_month_spans_classify_as_weeks_then_days() {
        let weeks = classify_interval(date(2020, 1, 1), date(2020, 1, 22));
        assert_eq!(weeks.interval, DateInterval::Week);
        assert_eq!(weeks.step, 3);

        let days = classify_interval(date(2020, 1, 1), date(2020, 1, 3));
        assert_eq!(days.interval, DateInterval::Day);
        assert_eq!(days.step, 2);
    }

    #[test]
    fn identical_dates_yield_step_zero() {
        let spec = classify_interval(date(2020, 6, 1), date(2020, 6, 1));
        assert_eq!(spec.step, 0);
    }

    #[test]
    fn month_offset_clamps_short_months() {
        let stepped = DateInterval::Month
            .offset(date(2020, 1, 31), 1)
            .expect("in range");
        assert_eq!(stepped, date(2020, 2, 29));
    }

    #[test]
    fn week_floor_is_sunday_based() {
        // 2021-06-09 is a Wednesday.
        assert_eq!(DateInterval::Week.floor(date(2021, 6, 9)), date(2021, 6, 6));
    }

    #[test]
    fn ceil_is_identity_on_boundaries() {
        let boundary = date(2022, 1, 1);
        assert_eq!(DateInterval::Year.ceil(boundary).expect("in range"), boundary);
        assert_eq!(
            DateInterval::Year.ceil(date(2022, 1, 2)).expect("in range"),
            date(2023, 1, 1)
        );
    }

    #[test]
    fn interval_parses_from_config_strings() {
        assert_eq!("month".parse::<DateInterval>().expect("known"), DateInterval::Month);
        assert!(matches!(
            "fortnight".parse::<DateInterval>(),
            Err(AxisError::InvalidInterval(_))
        ));
    }
}
