//! Axis builders and the per-chart orchestration that feeds them.

pub mod band;
pub mod dual;
pub mod quant;
pub mod time;

pub use band::build_band_axis;
pub use dual::{align_dual_axes, AlignedAxes};
pub use quant::{build_quant_axis, build_quant_axis_tuned, QuantAxis};
pub use time::{build_time_axis, build_time_axis_tuned, TimeAxis};

use serde::{Deserialize, Serialize};

use crate::config::QuantAxisPreset;
use crate::core::types::{series_column, DataEntry, YAxisSide};
use crate::error::AxisResult;

/// Rendering module kind a series is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SeriesKind {
    LineChart,
    AreaChart,
    BarChart,
    ScatterPlot,
    PeriodAreas,
}

/// Maps one data column to a rendering module and an axis side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesConfig {
    pub series: usize,
    pub kind: SeriesKind,
    pub side: YAxisSide,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub bar_width: Option<f64>,
}

/// Optional per-side y-axis overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct YAxisPresets {
    pub left: Option<QuantAxisPreset>,
    pub right: Option<QuantAxisPreset>,
}

/// Built y axes for a chart; either side may be absent.
#[derive(Debug, Clone, PartialEq)]
pub struct YAxisPair {
    pub left: Option<QuantAxis>,
    pub right: Option<QuantAxis>,
    /// False only when both sides exist and their tick counts could not
    /// be reconciled.
    pub converged: bool,
}

/// Builds the left/right quantitative axes for a chart.
///
/// Series are partitioned by their assigned side; period-marker series
/// carry 0/1 flags and are excluded from extent computation. When both
/// sides are present the pair is reconciled through the dual-axis
/// aligner, left as primary.
pub fn build_y_axes<X>(
    entries: &[DataEntry<X>],
    series: &[SeriesConfig],
    plot_height: f64,
    presets: Option<&YAxisPresets>,
) -> AxisResult<YAxisPair> {
    let mut left_values: Vec<f64> = Vec::new();
    let mut right_values: Vec<f64> = Vec::new();

    for config in series {
        if config.kind == SeriesKind::PeriodAreas {
            continue;
        }
        let column = series_column(entries, config.series)?;
        match config.side {
            YAxisSide::Left => left_values.extend(column),
            YAxisSide::Right => right_values.extend(column),
        }
    }

    let left_preset = presets.and_then(|p| p.left.as_ref());
    let right_preset = presets.and_then(|p| p.right.as_ref());

    let left = if left_values.is_empty() {
        None
    } else {
        Some(build_quant_axis(
            &left_values,
            plot_height,
            YAxisSide::Left,
            left_preset,
        )?)
    };
    let right = if right_values.is_empty() {
        None
    } else {
        Some(build_quant_axis(
            &right_values,
            plot_height,
            YAxisSide::Right,
            right_preset,
        )?)
    };

    match (left, right) {
        (Some(left), Some(right)) => {
            let aligned = align_dual_axes(&left, &right)?;
            Ok(YAxisPair {
                left: Some(aligned.left),
                right: Some(aligned.right),
                converged: aligned.converged,
            })
        }
        (left, right) => Ok(YAxisPair {
            left,
            right,
            converged: true,
        }),
    }
}
