//! chart-axes: axis and scale computation engine for chart authoring.
//!
//! This crate derives axis configurations from raw tabular data: nice
//! rounded domains, evenly spaced tick sets with consistent decimal
//! precision, calendar cadence for time axes, and algebraic alignment of
//! dual quantitative axes so their gridlines coincide pixel-for-pixel.
//! Rendering, data ingestion and persistence UIs are external consumers.

pub mod axis;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod telemetry;

pub use axis::{
    align_dual_axes, build_band_axis, build_quant_axis, build_quant_axis_tuned, build_time_axis,
    build_time_axis_tuned, build_y_axes, AlignedAxes, QuantAxis, SeriesConfig, SeriesKind,
    TimeAxis, YAxisPair, YAxisPresets,
};
pub use config::{
    BandAxisConfig, QuantAxisConfig, QuantAxisPreset, QuantTicksConfig, QuantTicksPreset,
    TimeAxisConfig, TimeAxisPreset, TimeTicksConfig, TimeTicksPreset, XAxisConfig,
    DEFAULT_DATE_FORMAT,
};
pub use crate::core::{
    classify_interval, DataEntry, DateInterval, IntervalSpec, LinearScale, Tick, YAxisSide,
};
pub use error::{AxisError, AxisResult};
pub use format::{format_date, format_number, NumberFormatOptions, NumberLocale};
