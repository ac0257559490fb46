use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::error::{AxisError, AxisResult};

/// Date layout used by uploaded CSV rows.
pub const UPLOAD_DATE_FORMAT: &str = "%d/%m/%Y";

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> AxisResult<f64> {
    value
        .to_f64()
        .ok_or_else(|| AxisError::InvalidData(format!("{field_name} cannot be represented as f64")))
}

/// Parses an uploaded x-column date string (`%d/%m/%Y`).
pub fn parse_upload_date(text: &str) -> AxisResult<NaiveDate> {
    NaiveDate::parse_from_str(text, UPLOAD_DATE_FORMAT)
        .map_err(|_| AxisError::InvalidDate(text.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_dates_use_day_first_layout() {
        let date = parse_upload_date("03/11/2021").expect("valid date");
        assert_eq!(date, NaiveDate::from_ymd_opt(2021, 11, 3).expect("valid ymd"));
    }

    #[test]
    fn malformed_date_is_a_descriptive_error() {
        let err = parse_upload_date("2021-11-03").expect_err("wrong layout");
        assert!(matches!(err, AxisError::InvalidDate(_)));
    }
}
