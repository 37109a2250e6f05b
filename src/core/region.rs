// src/core/region.rs

use crate::core::units::format_bound;
use crate::models::ViewBounds;

/// Rewrites a view-relative command into one qualified by explicit
/// geographic bounds:
///
/// `INSIDE <south> <west> <north> <east> <command> <arguments>`
///
/// The far end expects exactly this ordering and field count, with each
/// bound in fixed-point notation. Bound ordering (south < north etc.) is not
/// validated here; malformed bounds from the view are passed through as
/// received.
pub fn synthesize_region_query(bounds: ViewBounds, command: &str, arguments: &str) -> String {
    format!(
        "INSIDE {} {} {} {} {} {}",
        format_bound(bounds.south),
        format_bound(bounds.west),
        format_bound(bounds.north),
        format_bound(bounds.east),
        command,
        arguments
    )
    .trim()
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> ViewBounds {
        ViewBounds {
            west: 4.0,
            south: 52.0,
            east: 5.0,
            north: 53.0,
        }
    }

    #[test]
    fn produces_the_exact_wire_form() {
        let line = synthesize_region_query(bounds(), "MCRE", "3 B737");
        assert_eq!(
            line,
            "INSIDE 52.00000000000000 4.00000000000000 53.00000000000000 5.00000000000000 MCRE 3 B737"
        );
    }

    #[test]
    fn empty_arguments_leave_no_trailing_whitespace() {
        let line = synthesize_region_query(bounds(), "MCRE", "");
        assert!(line.ends_with("MCRE"));
        assert_eq!(line.trim(), line);
    }

    #[test]
    fn malformed_bounds_pass_through_unvalidated() {
        let inverted = ViewBounds {
            west: 5.0,
            south: 53.0,
            east: 4.0,
            north: 52.0,
        };
        let line = synthesize_region_query(inverted, "MCRE", "1");
        assert!(line.starts_with("INSIDE 53.00000000000000 5.00000000000000"));
    }
}
