//! Persisted axis configuration shapes and on-demand tick regeneration.
//!
//! These types are the JSON surface shared with chart preset files. Ticks
//! are never persisted directly; they are regenerated from `*TicksConfig`
//! so a stored config and a freshly computed one cannot drift apart.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::interval::DateInterval;
use crate::core::types::Tick;
use crate::error::{AxisError, AxisResult};
use crate::format::{format_date, format_number, NumberFormatOptions, NumberLocale};

/// Default x-axis date label pattern.
pub const DEFAULT_DATE_FORMAT: &str = "%m/%y";

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_owned()
}

/// Regenerable description of a numeric tick sequence.
///
/// Invariant: `start_val + tick_interval * (num_ticks - 1)` is the last
/// tick, and every tick renders exactly at `decimals` precision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantTicksConfig {
    pub start_val: f64,
    pub num_ticks: usize,
    pub tick_interval: f64,
    #[serde(default)]
    pub decimals: u8,
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub suffix: String,
    #[serde(default)]
    pub locale: NumberLocale,
}

impl QuantTicksConfig {
    #[must_use]
    pub fn format_options(&self) -> NumberFormatOptions {
        NumberFormatOptions {
            decimals: self.decimals,
            prefix: self.prefix.clone(),
            suffix: self.suffix.clone(),
            locale: self.locale,
        }
    }

    /// Raw tick values without labels.
    #[must_use]
    pub fn tick_values(&self) -> Vec<f64> {
        (0..self.num_ticks)
            .map(|index| self.start_val + index as f64 * self.tick_interval)
            .collect()
    }

    /// Regenerates the labeled tick sequence.
    #[must_use]
    pub fn ticks(&self) -> Vec<Tick<f64>> {
        let options = self.format_options();
        self.tick_values()
            .into_iter()
            .map(|value| Tick::new(value, format_number(value, &options)))
            .collect()
    }
}

/// Regenerable description of a calendar tick sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeTicksConfig {
    pub start_date: NaiveDate,
    pub num_ticks: usize,
    pub date_interval: DateInterval,
    pub interval_step: u32,
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl TimeTicksConfig {
    /// Regenerates the labeled tick sequence by calendar stepping from
    /// the start date.
    pub fn ticks(&self) -> AxisResult<Vec<Tick<NaiveDate>>> {
        (0..self.num_ticks)
            .map(|index| {
                let steps = u32::try_from(index)
                    .ok()
                    .and_then(|count| self.interval_step.checked_mul(count))
                    .ok_or_else(|| {
                        AxisError::InvalidData(format!(
                            "tick index {index} overflows interval step {}",
                            self.interval_step
                        ))
                    })?;
                let value = self.date_interval.offset(self.start_date, steps)?;
                Ok(Tick::new(value, format_date(value, &self.date_format)?))
            })
            .collect()
    }
}

/// Quantitative axis snapshot: nice domain plus regenerable ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantAxisConfig {
    pub domain: (f64, f64),
    pub ticks_config: QuantTicksConfig,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub guide_lines: bool,
    #[serde(default)]
    pub hide_ticks: bool,
}

/// Time axis snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeAxisConfig {
    pub domain: (NaiveDate, NaiveDate),
    pub ticks_config: TimeTicksConfig,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub guide_lines: bool,
    #[serde(default)]
    pub hide_ticks: bool,
}

/// Band (categorical) axis snapshot.
///
/// Categories keep row order; they are never sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BandAxisConfig {
    pub categories: Vec<String>,
    #[serde(default)]
    pub bandwidth: f64,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub guide_lines: bool,
    #[serde(default)]
    pub hide_ticks: bool,
}

impl BandAxisConfig {
    /// One tick per category, value and label identical.
    #[must_use]
    pub fn ticks(&self) -> Vec<Tick<String>> {
        self.categories
            .iter()
            .map(|key| Tick::new(key.clone(), key.clone()))
            .collect()
    }
}

/// X-axis configuration, tagged by axis kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum XAxisConfig {
    Time(TimeAxisConfig),
    Quant(QuantAxisConfig),
    Band(BandAxisConfig),
}

/// User-supplied overrides for a quantitative ticks config.
///
/// Merge policy is shallow per leaf field: a present preset field wins,
/// everything else keeps its computed value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct QuantTicksPreset {
    pub start_val: Option<f64>,
    pub num_ticks: Option<usize>,
    pub tick_interval: Option<f64>,
    pub decimals: Option<u8>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub locale: Option<NumberLocale>,
}

impl QuantTicksPreset {
    pub fn apply(&self, config: &mut QuantTicksConfig) {
        if let Some(start_val) = self.start_val {
            config.start_val = start_val;
        }
        if let Some(num_ticks) = self.num_ticks {
            config.num_ticks = num_ticks;
        }
        if let Some(tick_interval) = self.tick_interval {
            config.tick_interval = tick_interval;
        }
        if let Some(decimals) = self.decimals {
            config.decimals = decimals;
        }
        if let Some(prefix) = &self.prefix {
            config.prefix = prefix.clone();
        }
        if let Some(suffix) = &self.suffix {
            config.suffix = suffix.clone();
        }
        if let Some(locale) = self.locale {
            config.locale = locale;
        }
    }
}

/// User-supplied overrides for a quantitative axis config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct QuantAxisPreset {
    pub domain: Option<(f64, f64)>,
    pub ticks_config: Option<QuantTicksPreset>,
    pub label: Option<String>,
    pub guide_lines: Option<bool>,
    pub hide_ticks: Option<bool>,
}

impl QuantAxisPreset {
    pub fn apply(&self, config: &mut QuantAxisConfig) {
        if let Some(domain) = self.domain {
            config.domain = domain;
        }
        if let Some(ticks) = &self.ticks_config {
            ticks.apply(&mut config.ticks_config);
        }
        if let Some(label) = &self.label {
            config.label = Some(label.clone());
        }
        if let Some(guide_lines) = self.guide_lines {
            config.guide_lines = guide_lines;
        }
        if let Some(hide_ticks) = self.hide_ticks {
            config.hide_ticks = hide_ticks;
        }
    }
}

/// User-supplied overrides for a time ticks config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct TimeTicksPreset {
    pub start_date: Option<NaiveDate>,
    pub num_ticks: Option<usize>,
    pub date_interval: Option<DateInterval>,
    pub interval_step: Option<u32>,
    pub date_format: Option<String>,
}

impl TimeTicksPreset {
    pub fn apply(&self, config: &mut TimeTicksConfig) {
        if let Some(start_date) = self.start_date {
            config.start_date = start_date;
        }
        if let Some(num_ticks) = self.num_ticks {
            config.num_ticks = num_ticks;
        }
        if let Some(date_interval) = self.date_interval {
            config.date_interval = date_interval;
        }
        if let Some(interval_step) = self.interval_step {
            config.interval_step = interval_step;
        }
        if let Some(date_format) = &self.date_format {
            config.date_format = date_format.clone();
        }
    }
}

/// User-supplied overrides for a time axis config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct TimeAxisPreset {
    pub ticks_config: Option<TimeTicksPreset>,
    pub label: Option<String>,
    pub guide_lines: Option<bool>,
    pub hide_ticks: Option<bool>,
}

impl TimeAxisPreset {
    pub fn apply(&self, config: &mut TimeAxisConfig) {
        if let Some(ticks) = &self.ticks_config {
            ticks.apply(&mut config.ticks_config);
        }
        if let Some(label) = &self.label {
            config.label = Some(label.clone());
        }
        if let Some(guide_lines) = self.guide_lines {
            config.guide_lines = guide_lines;
        }
        if let Some(hide_ticks) = self.hide_ticks {
            config.hide_ticks = hide_ticks;
        }
    }
}
