//! Time axis builder: date extent to a default calendar tick cadence.

use chrono::NaiveDate;
use tracing::debug;

use crate::config::{TimeAxisConfig, TimeAxisPreset, TimeTicksConfig, DEFAULT_DATE_FORMAT};
use crate::core::interval::{classify_interval, DateInterval, IntervalSpec};
use crate::error::{AxisError, AxisResult};

/// Default target tick count for time axes.
pub const DEFAULT_TIME_TICK_COUNT: usize = 9;

/// Calendar stepping ladder with approximate durations in days, coarsest
/// last. Spans beyond the ladder fall through to multi-year stepping.
const TICK_LADDER: [(DateInterval, u32, f64); 6] = [
    (DateInterval::Day, 1, 1.0),
    (DateInterval::Day, 2, 2.0),
    (DateInterval::Week, 1, 7.0),
    (DateInterval::Month, 1, 30.0),
    (DateInterval::Month, 3, 90.0),
    (DateInterval::Year, 1, 365.0),
];

/// A built time axis: the persistable snapshot plus the raw date extent.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeAxis {
    pub config: TimeAxisConfig,
    pub raw_domain: (NaiveDate, NaiveDate),
}

/// Builds a time axis over a date column with the default tick count.
pub fn build_time_axis(dates: &[NaiveDate], preset: Option<&TimeAxisPreset>) -> AxisResult<TimeAxis> {
    build_time_axis_tuned(dates, DEFAULT_TIME_TICK_COUNT, preset)
}

/// Builds a time axis with an explicit target tick count.
pub fn build_time_axis_tuned(
    dates: &[NaiveDate],
    target_count: usize,
    preset: Option<&TimeAxisPreset>,
) -> AxisResult<TimeAxis> {
    let raw_domain = date_extent(dates)?;
    let tick_dates = default_calendar_ticks(raw_domain.0, raw_domain.1, target_count)?;

    // Cadence is re-derived from the generated ticks so the persisted
    // config regenerates exactly this sequence.
    let cadence = if tick_dates.len() >= 2 {
        classify_interval(tick_dates[0], tick_dates[1])
    } else {
        IntervalSpec {
            interval: DateInterval::Month,
            step: 1,
        }
    };
    debug!(?raw_domain, ticks = tick_dates.len(), ?cadence, "time axis built");

    let mut config = TimeAxisConfig {
        domain: raw_domain,
        ticks_config: TimeTicksConfig {
            start_date: tick_dates.first().copied().unwrap_or(raw_domain.0),
            num_ticks: tick_dates.len(),
            date_interval: cadence.interval,
            interval_step: cadence.step.max(1),
            date_format: DEFAULT_DATE_FORMAT.to_owned(),
        },
        label: None,
        guide_lines: false,
        hide_ticks: false,
    };

    if let Some(preset) = preset {
        preset.apply(&mut config);
    }

    Ok(TimeAxis { config, raw_domain })
}

fn date_extent(dates: &[NaiveDate]) -> AxisResult<(NaiveDate, NaiveDate)> {
    let first = dates.first().ok_or_else(|| {
        AxisError::InvalidData("time axis cannot be built from an empty date column".to_owned())
    })?;

    let mut min = *first;
    let mut max = *first;
    for date in dates {
        min = min.min(*date);
        max = max.max(*date);
    }
    Ok((min, max))
}

/// Generates evenly spaced calendar ticks covering `[start, end]`, the
/// d3 `utcTicks` equivalent over day-granularity data.
fn default_calendar_ticks(
    start: NaiveDate,
    end: NaiveDate,
    target_count: usize,
) -> AxisResult<Vec<NaiveDate>> {
    let span_days = (end - start).num_days();
    if span_days <= 0 || target_count == 0 {
        return Ok(vec![start]);
    }

    let target = span_days as f64 / target_count as f64;
    let (interval, step) = choose_cadence(target, span_days, target_count);

    let mut ticks = Vec::new();
    let mut tick = interval.ceil(start)?;
    while tick <= end {
        ticks.push(tick);
        tick = interval.offset(tick, step)?;
    }

    if ticks.is_empty() {
        // The span is narrower than one interval; fall back to its edges.
        ticks.push(start);
        ticks.push(end);
    }
    Ok(ticks)
}

/// Picks the ladder entry whose duration is closest to the target
/// spacing in log-ratio terms; beyond the ladder, whole years stepped by
/// a round count.
fn choose_cadence(target_days: f64, span_days: i64, target_count: usize) -> (DateInterval, u32) {
    let index = TICK_LADDER.partition_point(|(_, _, days)| *days <= target_days);

    if index >= TICK_LADDER.len() {
        let span_years = span_days as f64 / 365.0;
        let step = year_step(span_years, target_count);
        return (DateInterval::Year, step);
    }
    if index == 0 {
        let (interval, step, _) = TICK_LADDER[0];
        return (interval, step);
    }

    let (_, _, below) = TICK_LADDER[index - 1];
    let (_, _, above) = TICK_LADDER[index];
    let choice = if target_days / below < above / target_days {
        TICK_LADDER[index - 1]
    } else {
        TICK_LADDER[index]
    };
    (choice.0, choice.1)
}

/// Round year step from the {1, 2, 5} x 10^k family.
fn year_step(span_years: f64, target_count: usize) -> u32 {
    let raw = span_years / target_count.max(1) as f64;
    let power = raw.log10().floor();
    let error = raw / 10.0_f64.powf(power);
    let factor = if error >= 7.5 {
        10.0
    } else if error >= 3.5 {
        5.0
    } else if error >= 1.5 {
        2.0
    } else {
        1.0
    };
    ((factor * 10.0_f64.powf(power)).round() as u32).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
    }

    #[test]
    fn two_year_span_gets_quarterly_cadence() {
        let dates = vec![date(2020, 1, 15), date(2020, 9, 3), date(2021, 12, 20)];
        let axis = build_time_axis(&dates, None).expect("valid axis");

        let ticks = &axis.config.ticks_config;
        assert_eq!(ticks.date_interval, DateInterval::Month);
        assert_eq!(ticks.interval_step, 3);
        assert_eq!(ticks.start_date, date(2020, 2, 1));
        assert_eq!(axis.raw_domain, (date(2020, 1, 15), date(2021, 12, 20)));
    }

    #[test]
    fn decade_span_gets_yearly_cadence() {
        let dates = vec![date(2010, 3, 1), date(2020, 3, 1)];
        let axis = build_time_axis(&dates, None).expect("valid axis");

        let ticks = &axis.config.ticks_config;
        assert_eq!(ticks.date_interval, DateInterval::Year);
        assert_eq!(ticks.interval_step, 1);
        assert_eq!(ticks.start_date, date(2011, 1, 1));
        assert_eq!(ticks.num_ticks, 10);
    }

    #[test]
    fn cadence_regenerates_the_generated_ticks() {
        let dates = vec![date(2019, 5, 14), date(2022, 11, 2)];
        let axis = build_time_axis(&dates, None).expect("valid axis");

        let regenerated = axis.config.ticks_config.ticks().expect("valid ticks");
        assert_eq!(regenerated.len(), axis.config.ticks_config.num_ticks);
        assert_eq!(regenerated[0].value, axis.config.ticks_config.start_date);
        for tick in &regenerated {
            assert!(tick.value >= axis.raw_domain.0);
            assert!(tick.value <= axis.raw_domain.1);
        }
    }

    #[test]
    fn default_label_format_is_month_slash_year() {
        let dates = vec![date(2020, 1, 1), date(2021, 1, 1)];
        let axis = build_time_axis(&dates, None).expect("valid axis");
        assert_eq!(axis.config.ticks_config.date_format, "%m/%y");
    }

    #[test]
    fn preset_overrides_cadence_fields() {
        let dates = vec![date(2020, 1, 1), date(2023, 1, 1)];
        let preset = TimeAxisPreset {
            ticks_config: Some(crate::config::TimeTicksPreset {
                date_format: Some("%Y".to_owned()),
                interval_step: Some(6),
                ..Default::default()
            }),
            ..Default::default()
        };
        let axis = build_time_axis(&dates, Some(&preset)).expect("valid axis");

        assert_eq!(axis.config.ticks_config.date_format, "%Y");
        assert_eq!(axis.config.ticks_config.interval_step, 6);
    }

    #[test]
    fn empty_date_column_is_fatal() {
        assert!(build_time_axis(&[], None).is_err());
    }

    #[test]
    fn single_date_degenerates_to_one_tick() {
        let dates = vec![date(2020, 6, 1)];
        let axis = build_time_axis(&dates, None).expect("valid axis");
        assert_eq!(axis.config.ticks_config.num_ticks, 1);
        assert_eq!(axis.config.ticks_config.start_date, date(2020, 6, 1));
    }
}
