// src/core/units.rs

use crate::constants::{BOUND_PRECISION_DECIMALS, COORDINATE_ECHO_DECIMALS};

/// One international foot in metres.
pub const METERS_PER_FOOT: f64 = 0.3048;

/// One knot in metres per second.
pub const MPS_PER_KNOT: f64 = 0.514_444_444_444_444_4;

/// Converts a simulator altitude (metres) to feet for display.
pub fn meters_to_feet(meters: f64) -> f64 {
    meters / METERS_PER_FOOT
}

/// Converts a simulator speed (m/s) to knots for display.
pub fn mps_to_knots(mps: f64) -> f64 {
    mps / MPS_PER_KNOT
}

/// Formats a coordinate pair the way command echoes report it, rounded to
/// three decimals.
pub fn format_coordinates(lat: f64, lon: f64) -> String {
    format!(
        "{lat:.prec$}, {lon:.prec$}",
        prec = COORDINATE_ECHO_DECIMALS
    )
}

/// Formats a zoom level for echoes, rounded to one decimal.
pub fn format_zoom_level(level: f64) -> String {
    format!("{level:.1}")
}

/// Formats one region-query bound with full fixed-point precision. Never
/// scientific notation: the consumer on the far end splits on whitespace and
/// parses plain decimals.
pub fn format_bound(degrees: f64) -> String {
    format!("{degrees:.prec$}", prec = BOUND_PRECISION_DECIMALS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feet_and_knots_round_trip_the_standard_factors() {
        assert!((meters_to_feet(0.3048) - 1.0).abs() < 1e-12);
        assert!((mps_to_knots(514.444_444_444_444_4) - 1000.0).abs() < 1e-6);
    }

    #[test]
    fn coordinates_echo_with_three_decimals() {
        assert_eq!(format_coordinates(52.3, 4.8), "52.300, 4.800");
        assert_eq!(format_coordinates(-0.1234, 100.9876), "-0.123, 100.988");
    }

    #[test]
    fn bounds_format_fixed_point_at_full_precision() {
        assert_eq!(format_bound(52.0), "52.00000000000000");
        assert_eq!(format_bound(4.0), "4.00000000000000");
    }

    #[test]
    fn zoom_echo_uses_one_decimal() {
        assert_eq!(format_zoom_level(7.0), "7.0");
        assert_eq!(format_zoom_level(6.25), "6.2");
    }
}
