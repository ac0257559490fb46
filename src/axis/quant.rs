//! Quantitative axis builder: raw extent to nice domain, ticks and
//! precision-aware formatting config.

use tracing::debug;

use crate::config::{QuantAxisConfig, QuantAxisPreset, QuantTicksConfig};
use crate::core::nice::{nice_domain_and_ticks, target_tick_count, DEFAULT_TICK_SPACING_PX};
use crate::core::precision::resolve_tick_precision;
use crate::core::types::{extent, YAxisSide};
use crate::error::AxisResult;
use crate::format::NumberFormatOptions;

/// A built quantitative axis.
///
/// `config` is the persistable snapshot handed to the rendering layer;
/// the remaining fields carry the raw extent and tick values the
/// dual-axis aligner needs for its cross-axis algebra.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantAxis {
    pub config: QuantAxisConfig,
    pub raw_domain: (f64, f64),
    pub tick_values: Vec<f64>,
    pub target_count: usize,
    pub side: YAxisSide,
}

/// Builds a quantitative axis with the default tick spacing.
pub fn build_quant_axis(
    values: &[f64],
    pixel_span: f64,
    side: YAxisSide,
    preset: Option<&QuantAxisPreset>,
) -> AxisResult<QuantAxis> {
    build_quant_axis_tuned(values, pixel_span, DEFAULT_TICK_SPACING_PX, side, preset)
}

/// Builds a quantitative axis with explicit target tick spacing.
pub fn build_quant_axis_tuned(
    values: &[f64],
    pixel_span: f64,
    target_spacing_px: f64,
    side: YAxisSide,
    preset: Option<&QuantAxisPreset>,
) -> AxisResult<QuantAxis> {
    let raw_domain = extent(values)?;
    let target_count = target_tick_count(pixel_span, target_spacing_px);
    let (nice, tick_values) = nice_domain_and_ticks(raw_domain.0, raw_domain.1, target_count)?;
    debug!(
        ?raw_domain,
        ?nice,
        ticks = tick_values.len(),
        ?side,
        "quant axis built"
    );

    let mut axis = assemble_quant_axis(raw_domain, nice, tick_values, target_count, side)?;

    if let Some(preset) = preset {
        preset.apply(&mut axis.config);
        // Overrides may change the tick grid; regenerate so the carried
        // tick values cannot drift from the config.
        axis.tick_values = axis.config.ticks_config.tick_values();
    }

    Ok(axis)
}

/// Assembles the axis snapshot from a nice domain and its tick values.
pub(crate) fn assemble_quant_axis(
    raw_domain: (f64, f64),
    nice: (f64, f64),
    tick_values: Vec<f64>,
    target_count: usize,
    side: YAxisSide,
) -> AxisResult<QuantAxis> {
    let precision = resolve_tick_precision(&tick_values)?;
    let format = NumberFormatOptions::default();

    let config = QuantAxisConfig {
        domain: nice,
        ticks_config: QuantTicksConfig {
            start_val: tick_values[0],
            num_ticks: tick_values.len(),
            tick_interval: precision.interval,
            decimals: precision.decimals,
            prefix: format.prefix,
            suffix: format.suffix,
            locale: format.locale,
        },
        label: None,
        guide_lines: side == YAxisSide::Left,
        hide_ticks: false,
    };

    Ok(QuantAxis {
        config,
        raw_domain,
        tick_values,
        target_count,
        side,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::QuantTicksPreset;

    #[test]
    fn end_to_end_scenario_covers_raw_extent() {
        let column = [0.0, 2.5, 5.0, 10.0, 7.3];
        let axis = build_quant_axis_tuned(&column, 500.0, 100.0, YAxisSide::Left, None)
            .expect("valid axis");

        assert!(axis.config.domain.0 <= 0.0);
        assert!(axis.config.domain.1 >= 10.0);
        assert_eq!(axis.config.domain, (0.0, 10.0));
        assert_eq!(axis.tick_values, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        assert_eq!(axis.config.ticks_config.tick_interval, 2.0);
        assert_eq!(axis.config.ticks_config.decimals, 0);
    }

    #[test]
    fn ticks_config_regenerates_the_same_grid() {
        let column = [0.3, 4.7, 2.2, 9.1];
        let axis = build_quant_axis(&column, 400.0, YAxisSide::Left, None).expect("valid axis");

        assert_eq!(axis.config.ticks_config.tick_values(), axis.tick_values);
    }

    #[test]
    fn guide_lines_default_on_for_left_only() {
        let column = [1.0, 2.0, 3.0];
        let left = build_quant_axis(&column, 300.0, YAxisSide::Left, None).expect("valid axis");
        let right = build_quant_axis(&column, 300.0, YAxisSide::Right, None).expect("valid axis");

        assert!(left.config.guide_lines);
        assert!(!right.config.guide_lines);
    }

    #[test]
    fn build_is_idempotent() {
        let column = [0.0, 2.5, 5.0, 10.0, 7.3];
        let first = build_quant_axis(&column, 500.0, YAxisSide::Left, None).expect("valid axis");
        let second = build_quant_axis(&column, 500.0, YAxisSide::Left, None).expect("valid axis");
        assert_eq!(first, second);
    }

    #[test]
    fn single_valued_column_still_yields_a_usable_axis() {
        let column = [42.0, 42.0, 42.0];
        let axis = build_quant_axis(&column, 300.0, YAxisSide::Left, None).expect("valid axis");

        assert!(axis.config.domain.0 < 42.0);
        assert!(axis.config.domain.1 > 42.0);
        assert!(axis.tick_values.len() >= 2);
    }

    #[test]
    fn preset_override_regenerates_tick_values() {
        let column = [0.0, 10.0];
        let preset = QuantAxisPreset {
            ticks_config: Some(QuantTicksPreset {
                start_val: Some(0.0),
                num_ticks: Some(3),
                tick_interval: Some(5.0),
                ..Default::default()
            }),
            ..Default::default()
        };
        let axis =
            build_quant_axis(&column, 500.0, YAxisSide::Left, Some(&preset)).expect("valid axis");

        assert_eq!(axis.tick_values, vec![0.0, 5.0, 10.0]);
    }
}
