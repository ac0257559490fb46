use crate::error::{AxisError, AxisResult};

/// Linear mapping from a value domain onto a pixel range.
///
/// The range may be inverted; y axes map `[lo, hi]` onto `[height, 0]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> AxisResult<Self> {
        if !domain.0.is_finite() || !domain.1.is_finite() || domain.0 == domain.1 {
            return Err(AxisError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        if !range.0.is_finite() || !range.1.is_finite() || range.0 == range.1 {
            return Err(AxisError::InvalidData(
                "scale range must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Maps a domain value to its pixel position.
    #[must_use]
    pub fn position(self, value: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    /// Maps a pixel position back to its domain value.
    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let normalized = (pixel - self.range_start) / (self.range_end - self.range_start);
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_round_trips_within_tolerance() {
        let scale = LinearScale::new((10.0, 110.0), (0.0, 1000.0)).expect("valid scale");

        let original = 42.5;
        let px = scale.position(original);
        let recovered = scale.invert(px);
        assert!((recovered - original).abs() <= 1e-9);
    }

    #[test]
    fn inverted_range_maps_max_to_zero() {
        let scale = LinearScale::new((0.0, 100.0), (300.0, 0.0)).expect("valid scale");
        assert_eq!(scale.position(100.0), 0.0);
        assert_eq!(scale.position(0.0), 300.0);
    }

    #[test]
    fn zero_width_domain_is_rejected() {
        assert!(LinearScale::new((5.0, 5.0), (0.0, 100.0)).is_err());
    }
}
