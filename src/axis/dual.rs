//! Dual-axis alignment: re-derives the secondary axis domain as a linear
//! transform of the primary's nice domain so gridlines coincide
//! pixel-for-pixel.

use tracing::{debug, warn};

use crate::axis::quant::QuantAxis;
use crate::core::nice::nice_domain_and_ticks;
use crate::core::precision::resolve_tick_precision;
use crate::error::AxisResult;

const MAX_EXTEND_ATTEMPTS: usize = 10;

/// Result of reconciling a left/right axis pair.
///
/// `converged` is false when the tick counts still differ after the
/// capped extension loop; the rendering layer decides whether mismatched
/// grids are acceptable.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedAxes {
    pub left: QuantAxis,
    pub right: QuantAxis,
    pub converged: bool,
}

/// Aligns an independently built left/right pair, treating `left` as
/// primary.
///
/// The linear map `(m, b)` carries the primary's raw extent onto the
/// secondary's; applying it to the primary's nice domain puts the
/// secondary's round gridline values at the same pixel offsets. The
/// derived domain is then re-niced and re-ticked with the primary's
/// target count. A zero-width primary extent degenerates the map to a
/// constant offset.
pub fn align_dual_axes(left: &QuantAxis, right: &QuantAxis) -> AxisResult<AlignedAxes> {
    let (primary_lo, primary_hi) = left.raw_domain;
    let (secondary_lo, secondary_hi) = right.raw_domain;

    let (m, b) = if primary_hi - primary_lo != 0.0 {
        let m = (secondary_hi - secondary_lo) / (primary_hi - primary_lo);
        (m, secondary_lo - m * primary_lo)
    } else {
        (0.0, secondary_lo)
    };

    let derived = (
        m * left.config.domain.0 + b,
        m * left.config.domain.1 + b,
    );
    let count = left.target_count;

    let mut left_domain = left.config.domain;
    let mut left_ticks = left.tick_values.clone();
    let (mut right_domain, mut right_ticks) =
        nice_domain_and_ticks(derived.0, derived.1, count)?;
    debug!(?derived, ?right_domain, "secondary domain derived from primary");

    // Unequal counts break gridline coincidence; widen the shorter side
    // upward through the rounding primitive until the counts meet.
    let mut attempts = 0;
    while left_ticks.len() != right_ticks.len() && attempts < MAX_EXTEND_ATTEMPTS {
        if left_ticks.len() < right_ticks.len() {
            let widened = left_domain.1 + half_step(&left_ticks);
            (left_domain, left_ticks) = nice_domain_and_ticks(left_domain.0, widened, count)?;
        } else {
            let widened = right_domain.1 + half_step(&right_ticks);
            (right_domain, right_ticks) = nice_domain_and_ticks(right_domain.0, widened, count)?;
        }
        attempts += 1;
    }

    let converged = left_ticks.len() == right_ticks.len();
    if !converged {
        warn!(
            left_ticks = left_ticks.len(),
            right_ticks = right_ticks.len(),
            attempts,
            "dual axis tick counts did not reconcile; keeping mismatched grids"
        );
    }

    let left = rebuild(left, left_domain, left_ticks, count)?;
    let right = rebuild(right, right_domain, right_ticks, count)?;

    Ok(AlignedAxes {
        left,
        right,
        converged,
    })
}

fn half_step(tick_values: &[f64]) -> f64 {
    if tick_values.len() >= 2 {
        (tick_values[1] - tick_values[0]) * 0.5
    } else {
        1.0
    }
}

/// Rewrites an axis's domain and tick grid while preserving its label,
/// guide-line and formatting fields.
fn rebuild(
    axis: &QuantAxis,
    domain: (f64, f64),
    tick_values: Vec<f64>,
    target_count: usize,
) -> AxisResult<QuantAxis> {
    let precision = resolve_tick_precision(&tick_values)?;

    let mut config = axis.config.clone();
    config.domain = domain;
    config.ticks_config.start_val = tick_values[0];
    config.ticks_config.num_ticks = tick_values.len();
    config.ticks_config.tick_interval = precision.interval;
    config.ticks_config.decimals = precision.decimals;

    Ok(QuantAxis {
        config,
        raw_domain: axis.raw_domain,
        tick_values,
        target_count,
        side: axis.side,
    })
}
