// src/console/handlers/pan.rs

use crate::console::dispatcher::DispatchContext;
use crate::core::resolver::{self, EntityFix};
use crate::core::units;
use crate::models::{CommandResult, Severity};

/// `PAN <lat,lon | aircraft id>` — centers the view on explicit coordinates
/// or on a live aircraft.
///
/// Coordinates are tried first; anything that does not parse as a valid
/// pair falls back to a case-insensitive id lookup in the current traffic
/// snapshot. Missing arguments and an unready view short-circuit before any
/// lookup.
pub fn handle(arguments: &str, ctx: &mut DispatchContext<'_>) -> CommandResult {
    if arguments.trim().is_empty() {
        ctx.post(
            "PAN: specify coordinates (lat,lon) or an aircraft id",
            Severity::Warning,
        );
        return CommandResult::completed();
    }
    if !ctx.view.is_ready() {
        ctx.post("PAN: map view is not ready", Severity::Error);
        return CommandResult::completed();
    }

    if let Some(fix) = resolver::parse_lat_lon(arguments) {
        ctx.view.pan_to(fix.lat, fix.lon);
        let echo = format!(
            "PAN: centered on {}",
            units::format_coordinates(fix.lat, fix.lon)
        );
        ctx.post(&echo, Severity::Success);
        return CommandResult::completed();
    }

    pan_to_entity(arguments, ctx);
    CommandResult::completed()
}

fn pan_to_entity(ident: &str, ctx: &mut DispatchContext<'_>) {
    let snapshot = match ctx.sim.current_entity_snapshot() {
        Some(snapshot) if !snapshot.is_empty() => snapshot,
        _ => {
            ctx.post("PAN: no aircraft data available yet", Severity::Warning);
            return;
        }
    };

    match resolver::find_entity(&snapshot, ident) {
        Some(fix) => {
            ctx.view.pan_to(fix.position.lat, fix.position.lon);
            ctx.post(&entity_echo(&fix), Severity::Success);
        }
        None => {
            let text = format!("PAN: unknown aircraft or location '{ident}'");
            ctx.post(&text, Severity::Warning);
        }
    }
}

/// Success echo for an aircraft match, enriched with altitude and speed in
/// display units when the snapshot carries them.
fn entity_echo(fix: &EntityFix) -> String {
    let position = units::format_coordinates(fix.position.lat, fix.position.lon);
    match (fix.altitude, fix.speed) {
        (Some(alt), Some(tas)) => format!(
            "PAN: centered on {} at {} ({:.0} ft, {:.0} kt)",
            fix.id,
            position,
            units::meters_to_feet(alt),
            units::mps_to_knots(tas)
        ),
        _ => format!("PAN: centered on {} at {}", fix.id, position),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::dispatcher::DispatchContext;
    use crate::models::AircraftSnapshot;
    use crate::system::testkit::{RecordingSink, RecordingTransport, StubSim, StubView};

    fn run(
        arguments: &str,
        view: &mut StubView,
        sim: &StubSim,
        sink: &mut RecordingSink,
    ) -> CommandResult {
        let mut transport = RecordingTransport::default();
        let mut ctx = DispatchContext {
            view,
            sim,
            transport: &mut transport,
            messages: sink,
            overlay: None,
        };
        handle(arguments, &mut ctx)
    }

    #[test]
    fn coordinates_center_the_view_with_a_rounded_echo() {
        let mut view = StubView::ready();
        let mut sink = RecordingSink::default();
        run("52.34567 4.87654", &mut view, &StubSim::default(), &mut sink);

        assert_eq!(view.center, Some((52.34567, 4.87654)));
        let (text, severity) = &sink.messages[0];
        assert_eq!(*severity, Severity::Success);
        assert_eq!(text, "PAN: centered on 52.346, 4.877");
    }

    #[test]
    fn missing_arguments_warn_before_any_lookup() {
        let mut view = StubView::not_ready();
        let mut sink = RecordingSink::default();
        run("  ", &mut view, &StubSim::default(), &mut sink);

        // The argument warning wins even though the view is also unready.
        assert_eq!(sink.messages[0].1, Severity::Warning);
    }

    #[test]
    fn unready_view_is_a_precondition_error() {
        let mut view = StubView::not_ready();
        let mut sink = RecordingSink::default();
        run("52.3,4.8", &mut view, &StubSim::default(), &mut sink);

        assert_eq!(sink.messages[0].1, Severity::Error);
        assert_eq!(view.center, None);
    }

    #[test]
    fn entity_lookup_matches_case_insensitively() {
        let mut view = StubView::ready();
        let sim = StubSim::with_aircraft(&[("KL123", 52.3, 4.8)]);
        let mut sink = RecordingSink::default();
        run("kl123", &mut view, &sim, &mut sink);

        assert_eq!(view.center, Some((52.3, 4.8)));
        assert_eq!(sink.messages[0].1, Severity::Success);
    }

    #[test]
    fn entity_echo_carries_display_units_when_available() {
        let mut view = StubView::ready();
        let sim = StubSim {
            snapshot: Some(AircraftSnapshot {
                id: vec!["KL123".into()],
                lat: vec![52.3],
                lon: vec![4.8],
                alt: vec![3048.0],
                tas: vec![128.611_111],
            }),
            vocabulary: None,
        };
        let mut sink = RecordingSink::default();
        run("KL123", &mut view, &sim, &mut sink);

        let (text, _) = &sink.messages[0];
        assert_eq!(text, "PAN: centered on KL123 at 52.300, 4.800 (10000 ft, 250 kt)");
    }

    #[test]
    fn unknown_entity_warns_and_leaves_the_view_alone() {
        let mut view = StubView::ready();
        let sim = StubSim::with_aircraft(&[("KL123", 52.3, 4.8)]);
        let mut sink = RecordingSink::default();
        run("XX999", &mut view, &sim, &mut sink);

        assert_eq!(view.center, None);
        assert_eq!(sink.messages[0].1, Severity::Warning);
        assert!(sink.messages[0].0.contains("XX999"));
    }

    #[test]
    fn absent_snapshot_warns_about_missing_data() {
        let mut view = StubView::ready();
        let mut sink = RecordingSink::default();
        run("KL123", &mut view, &StubSim::default(), &mut sink);

        assert_eq!(sink.messages[0].1, Severity::Warning);
        assert!(sink.messages[0].0.contains("no aircraft data"));
    }

    #[test]
    fn out_of_range_coordinates_fall_back_to_entity_lookup() {
        let mut view = StubView::ready();
        let sim = StubSim::with_aircraft(&[("KL123", 52.3, 4.8)]);
        let mut sink = RecordingSink::default();
        run("95,4.8", &mut view, &sim, &mut sink);

        // Not a valid pair, not a known id: a lookup miss, never a clamp.
        assert_eq!(view.center, None);
        assert_eq!(sink.messages[0].1, Severity::Warning);
    }
}
