//! Band (categorical) axis builder.

use crate::axis::{SeriesConfig, SeriesKind};
use crate::config::BandAxisConfig;

/// Builds a band axis over ordered category keys.
///
/// Row order is significant and preserved; bandwidth is the widest bar
/// series assigned to the chart, or 0 when no bar series exists.
#[must_use]
pub fn build_band_axis(categories: &[String], series: &[SeriesConfig]) -> BandAxisConfig {
    let bandwidth = series
        .iter()
        .filter(|config| config.kind == SeriesKind::BarChart)
        .filter_map(|config| config.bar_width)
        .fold(0.0_f64, f64::max);

    BandAxisConfig {
        categories: categories.to_vec(),
        bandwidth,
        label: None,
        guide_lines: false,
        hide_ticks: false,
    }
}
