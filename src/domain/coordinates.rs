use serde::{Deserialize, Serialize};

pub const DEFAULT_LATITUDE: f64 = 38.897957;
pub const DEFAULT_LONGITUDE: f64 = -77.036560;

/// Largest absolute latitude accepted by validation
pub const MAX_LATITUDE: f64 = 89.9999;
/// Largest absolute longitude accepted by validation
pub const MAX_LONGITUDE: f64 = 179.9999;

/// Target in decimal degrees. Values are kept as entered, including NaN.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetCoordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Default for TargetCoordinates {
    fn default() -> Self {
        Self {
            lat: DEFAULT_LATITUDE,
            lng: DEFAULT_LONGITUDE,
        }
    }
}

impl TargetCoordinates {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// NaN compares false against the bounds, so it never validates.
    pub fn is_valid(&self) -> bool {
        self.lat.abs() <= MAX_LATITUDE && self.lng.abs() <= MAX_LONGITUDE
    }
}

/// Parses operator input into a coordinate, yielding NaN for anything unparseable.
pub fn parse_coordinate(input: &str) -> f64 {
    input.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Formats a coordinate the way the input fields show it.
pub fn format_coordinate(value: f64) -> String {
    if value.is_nan() {
        String::new()
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(38.9, -77.03, true)]
    #[case(DEFAULT_LATITUDE, DEFAULT_LONGITUDE, true)]
    #[case(89.9999, 179.9999, true)]
    #[case(-89.9999, -179.9999, true)]
    #[case(90.0, 0.0, false)]
    #[case(0.0, 180.0, false)]
    #[case(-90.0, 0.0, false)]
    #[case(0.0, -180.5, false)]
    #[case(f64::NAN, 0.0, false)]
    #[case(0.0, f64::NAN, false)]
    fn test_is_valid(#[case] lat: f64, #[case] lng: f64, #[case] expected: bool) {
        assert_eq!(TargetCoordinates::new(lat, lng).is_valid(), expected);
    }

    #[test]
    fn test_default_target() {
        let target = TargetCoordinates::default();
        assert_eq!(target.lat, 38.897957);
        assert_eq!(target.lng, -77.03656);
        assert!(target.is_valid());
    }

    #[rstest]
    #[case("38.9", 38.9)]
    #[case(" -77.03 ", -77.03)]
    #[case("1e1", 10.0)]
    #[case("+5", 5.0)]
    fn test_parse_coordinate(#[case] input: &str, #[case] expected: f64) {
        assert_eq!(parse_coordinate(input), expected);
    }

    #[rstest]
    #[case("")]
    #[case("-")]
    #[case("north")]
    #[case("1.2.3")]
    fn test_parse_coordinate_invalid(#[case] input: &str) {
        assert!(parse_coordinate(input).is_nan());
    }

    #[test]
    fn test_format_coordinate() {
        assert_eq!(format_coordinate(38.897957), "38.897957");
        assert_eq!(format_coordinate(-77.03656), "-77.03656");
        assert_eq!(format_coordinate(f64::NAN), "");
    }
}
