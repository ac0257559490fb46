//! Domain rounding ("nicing") and tick generation.
//!
//! Faithful port of the d3 linear-scale tick machinery: step sizes come
//! from the {1, 2, 5} x 10^k family, and nicing expands a raw extent
//! outward until its endpoints sit on round tick values.

use tracing::{debug, warn};

use crate::error::{AxisError, AxisResult};

const E10: f64 = 7.071_067_811_865_476; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Default pixel distance between adjacent ticks.
pub const DEFAULT_TICK_SPACING_PX: f64 = 80.0;

/// Tick count used when the pixel span is degenerate.
pub const FALLBACK_TICK_COUNT: usize = 5;

const MIN_TICK_COUNT: usize = 2;
const MAX_TICK_COUNT: usize = 20;
const NICE_MAX_ITER: usize = 10;

/// Derives a target tick count from the axis pixel span.
///
/// A non-positive or non-finite span cannot error out the whole build, so
/// it falls back to [`FALLBACK_TICK_COUNT`].
#[must_use]
pub fn target_tick_count(pixel_span: f64, target_spacing_px: f64) -> usize {
    if !pixel_span.is_finite()
        || pixel_span <= 0.0
        || !target_spacing_px.is_finite()
        || target_spacing_px <= 0.0
    {
        warn!(
            pixel_span,
            target_spacing_px, "degenerate pixel span, using fallback tick count"
        );
        return FALLBACK_TICK_COUNT;
    }

    let raw = (pixel_span / target_spacing_px).round() as usize;
    raw.clamp(MIN_TICK_COUNT, MAX_TICK_COUNT)
}

/// Returns the tick step for roughly `count` ticks over `[start, stop]`.
///
/// A positive return is the step itself; a negative return is the
/// negated inverse of a sub-unit step, kept in inverse form so callers
/// can divide instead of multiplying by an inexact reciprocal.
fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count.max(1) as f64;
    let power = (step.ln() / std::f64::consts::LN_10).floor();
    let error = step / 10.0_f64.powf(power);

    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    if power >= 0.0 {
        factor * 10.0_f64.powf(power)
    } else {
        -(10.0_f64.powf(-power)) / factor
    }
}

/// Generates roughly `count` round tick values covering `[start, stop]`.
///
/// Endpoints are included when they are themselves round. A reversed
/// input produces descending ticks, matching the d3 contract.
#[must_use]
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };

    let step = tick_increment(lo, hi, count);
    if step == 0.0 || !step.is_finite() {
        return Vec::new();
    }

    let mut values = if step > 0.0 {
        let mut first = (lo / step).round();
        let mut last = (hi / step).round();
        if first * step < lo {
            first += 1.0;
        }
        if last * step > hi {
            last -= 1.0;
        }
        let n = (last - first) as i64;
        if n < 0 {
            return Vec::new();
        }
        (0..=n)
            .map(|i| (first + i as f64) * step)
            .collect::<Vec<f64>>()
    } else {
        let inverse = -step;
        let mut first = (lo * inverse).round();
        let mut last = (hi * inverse).round();
        if first / inverse < lo {
            first += 1.0;
        }
        if last / inverse > hi {
            last -= 1.0;
        }
        let n = (last - first) as i64;
        if n < 0 {
            return Vec::new();
        }
        (0..=n)
            .map(|i| (first + i as f64) / inverse)
            .collect::<Vec<f64>>()
    };

    if reverse {
        values.reverse();
    }
    values
}

/// Pads a zero-width extent so nicing always has room to work with.
#[must_use]
pub fn pad_degenerate(value: f64) -> (f64, f64) {
    let pad = (value.abs() * 0.1).max(1.0);
    (value - pad, value + pad)
}

/// Expands `[lo, hi]` outward to the nearest round tick boundaries for
/// roughly `count` ticks.
///
/// The returned domain always contains the input extent.
pub fn nice_domain(lo: f64, hi: f64, count: usize) -> AxisResult<(f64, f64)> {
    if !lo.is_finite() || !hi.is_finite() {
        return Err(AxisError::InvalidData(
            "domain endpoints must be finite".to_owned(),
        ));
    }

    let (mut start, mut stop) = if hi < lo { (hi, lo) } else { (lo, hi) };
    if start == stop {
        (start, stop) = pad_degenerate(start);
        debug!(value = lo, "zero-width domain padded before nicing");
    }

    let mut prestep = f64::NAN;
    for _ in 0..NICE_MAX_ITER {
        let step = tick_increment(start, stop, count);
        if step == prestep {
            return Ok((start, stop));
        }
        if step > 0.0 {
            start = (start / step).floor() * step;
            stop = (stop / step).ceil() * step;
        } else if step < 0.0 {
            start = (start * step).ceil() / step;
            stop = (stop * step).floor() / step;
        } else {
            break;
        }
        prestep = step;
    }

    Ok((start, stop))
}

/// Nices a raw extent and generates its tick set in one pass.
pub fn nice_domain_and_ticks(
    lo: f64,
    hi: f64,
    count: usize,
) -> AxisResult<((f64, f64), Vec<f64>)> {
    let domain = nice_domain(lo, hi, count)?;
    let tick_values = ticks(domain.0, domain.1, count);
    Ok((domain, tick_values))
}
