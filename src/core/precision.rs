//! Decimal precision resolution for generated tick sequences.

use serde::{Deserialize, Serialize};

use crate::error::{AxisError, AxisResult};

const MAX_DECIMALS: usize = 12;

/// Uniform spacing and display precision shared by every tick of an axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickPrecision {
    pub interval: f64,
    pub decimals: u8,
}

/// Resolves the minimum decimal precision that exactly represents every
/// tick, plus the tick interval rounded at that precision.
///
/// Rounding the interval strips the `0.1 + 0.2` style float artifacts
/// that raw subtraction of generated ticks produces.
pub fn resolve_tick_precision(tick_values: &[f64]) -> AxisResult<TickPrecision> {
    if tick_values.len() < 2 {
        return Err(AxisError::InvalidData(
            "tick precision requires at least two ticks".to_owned(),
        ));
    }
    if tick_values.iter().any(|value| !value.is_finite()) {
        return Err(AxisError::InvalidData(
            "tick values must be finite".to_owned(),
        ));
    }

    let decimals = tick_values
        .iter()
        .map(|value| decimals_needed(*value))
        .max()
        .unwrap_or(0);

    let factor = 10.0_f64.powi(i32::from(decimals));
    let interval = ((tick_values[1] - tick_values[0]) * factor).round() / factor;

    Ok(TickPrecision { interval, decimals })
}

/// Fractional digits needed to exactly render `value` at display precision.
fn decimals_needed(value: f64) -> u8 {
    let text = format!("{:.*}", MAX_DECIMALS, value.abs());
    let Some((_, fraction)) = text.split_once('.') else {
        return 0;
    };
    fraction.trim_end_matches('0').len().min(MAX_DECIMALS) as u8
}
