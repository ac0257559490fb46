//! Tick label formatting for numeric and date axis values.

use std::fmt::Write as _;

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{AxisError, AxisResult};

/// Grouping and decimal separator convention for numeric labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NumberLocale {
    /// `1,234,567.8`
    #[default]
    Us,
    /// `1 234 567,8`
    Eu,
}

impl NumberLocale {
    fn group_separator(self) -> char {
        match self {
            Self::Us => ',',
            Self::Eu => ' ',
        }
    }

    fn decimal_separator(self) -> char {
        match self {
            Self::Us => '.',
            Self::Eu => ',',
        }
    }
}

/// Display options for one axis's numeric tick labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct NumberFormatOptions {
    pub decimals: u8,
    pub prefix: String,
    pub suffix: String,
    pub locale: NumberLocale,
}

impl NumberFormatOptions {
    #[must_use]
    pub fn with_decimals(decimals: u8) -> Self {
        Self {
            decimals,
            ..Self::default()
        }
    }
}

/// Renders a numeric tick value with fixed decimals, thousands grouping
/// and optional prefix/suffix. Total for finite input.
#[must_use]
pub fn format_number(value: f64, options: &NumberFormatOptions) -> String {
    if !value.is_finite() {
        return "nan".to_owned();
    }

    let decimals = usize::from(options.decimals);
    let digits = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (digits.as_str(), None),
    };

    // A value that rounds to zero at display precision drops its sign.
    let negative = value.is_sign_negative() && digits.bytes().any(|b| (b'1'..=b'9').contains(&b));

    let mut out = String::with_capacity(digits.len() + 8);
    out.push_str(&options.prefix);
    if negative {
        out.push('-');
    }
    out.push_str(&group_integer_digits(int_part, options.locale.group_separator()));
    if let Some(frac_part) = frac_part {
        out.push(options.locale.decimal_separator());
        out.push_str(frac_part);
    }
    out.push_str(&options.suffix);
    out
}

fn group_integer_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let count = digits.len();
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (count - index) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

/// Renders a date tick value through a strftime-style pattern.
///
/// An unrecognized pattern is a contract violation and fails with a
/// descriptive error instead of emitting garbage labels.
pub fn format_date(date: NaiveDate, pattern: &str) -> AxisResult<String> {
    let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(AxisError::InvalidDateFormat(pattern.to_owned()));
    }

    let mut out = String::new();
    write!(out, "{}", date.format_with_items(items.into_iter()))
        .map_err(|_| AxisError::InvalidDateFormat(pattern.to_owned()))?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn us_locale_groups_with_commas() {
        let options = NumberFormatOptions::with_decimals(1);
        assert_eq!(format_number(1_234_567.5, &options), "1,234,567.5");
    }

    #[test]
    fn eu_locale_uses_space_and_comma() {
        let options = NumberFormatOptions {
            decimals: 1,
            locale: NumberLocale::Eu,
            ..Default::default()
        };
        assert_eq!(format_number(1_234_567.5, &options), "1 234 567,5");
    }

    #[test]
    fn prefix_sits_outside_the_sign() {
        let options = NumberFormatOptions {
            decimals: 0,
            prefix: "$".to_owned(),
            suffix: "M".to_owned(),
            ..Default::default()
        };
        assert_eq!(format_number(-1_250.0, &options), "$-1,250M");
    }

    #[test]
    fn negative_zero_is_normalized() {
        let options = NumberFormatOptions::with_decimals(1);
        assert_eq!(format_number(-0.01, &options), "0.0");
    }

    #[test]
    fn small_integers_are_not_grouped() {
        let options = NumberFormatOptions::with_decimals(0);
        assert_eq!(format_number(987.0, &options), "987");
    }

    #[test]
    fn date_pattern_renders_month_slash_year() {
        let date = NaiveDate::from_ymd_opt(2021, 6, 1).expect("valid ymd");
        assert_eq!(format_date(date, "%m/%y").expect("valid pattern"), "06/21");
        assert_eq!(format_date(date, "%Y").expect("valid pattern"), "2021");
    }

    #[test]
    fn unknown_pattern_specifier_is_fatal() {
        let date = NaiveDate::from_ymd_opt(2021, 6, 1).expect("valid ymd");
        assert!(matches!(
            format_date(date, "%Q"),
            Err(AxisError::InvalidDateFormat(_))
        ));
    }
}
