// src/console/handlers/reserved.rs

use crate::console::dispatcher::DispatchContext;
use crate::core::vocabulary::ReservedCommand;
use crate::models::{CommandResult, Severity};

/// The recognized-but-unwired command set. These never reach the simulator;
/// they delegate to the overlay capability when the host has injected one
/// and report "not yet implemented" while it is absent.
pub fn handle(
    command: ReservedCommand,
    arguments: &str,
    ctx: &mut DispatchContext<'_>,
) -> CommandResult {
    let name = command.name();
    let Some(overlay) = ctx.overlay.as_deref_mut() else {
        let text = format!("{name}: not yet implemented");
        ctx.post(&text, Severity::Warning);
        return CommandResult::completed();
    };

    match command {
        ReservedCommand::DefineWaypoint => {
            overlay.define_waypoint(arguments);
            ctx.post("DEFWPT: waypoint defined", Severity::Success);
        }
        ReservedCommand::Area
        | ReservedCommand::Box
        | ReservedCommand::Circle
        | ReservedCommand::Line
        | ReservedCommand::Poly => {
            overlay.draw_shape(name, arguments);
            let text = format!("{name}: overlay updated");
            ctx.post(&text, Severity::Success);
        }
    }
    CommandResult::completed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::testkit::{
        RecordingOverlay, RecordingSink, RecordingTransport, StubSim, StubView,
    };

    #[test]
    fn absent_capability_warns_not_yet_implemented() {
        let mut view = StubView::ready();
        let sim = StubSim::default();
        let mut transport = RecordingTransport::default();
        let mut sink = RecordingSink::default();
        let mut ctx = DispatchContext {
            view: &mut view,
            sim: &sim,
            transport: &mut transport,
            messages: &mut sink,
            overlay: None,
        };
        let result = handle(ReservedCommand::Poly, "52.3 4.8 52.4 4.9", &mut ctx);

        assert!(result.handled && !result.forward);
        let (text, severity) = &sink.messages[0];
        assert_eq!(*severity, Severity::Warning);
        assert_eq!(text, "POLY: not yet implemented");
    }

    #[test]
    fn injected_capability_receives_the_delegation() {
        let mut view = StubView::ready();
        let sim = StubSim::default();
        let mut transport = RecordingTransport::default();
        let mut sink = RecordingSink::default();
        let mut overlay = RecordingOverlay::default();
        let mut ctx = DispatchContext {
            view: &mut view,
            sim: &sim,
            transport: &mut transport,
            messages: &mut sink,
            overlay: Some(&mut overlay),
        };
        handle(ReservedCommand::Circle, "52.3 4.8 10", &mut ctx);
        handle(ReservedCommand::DefineWaypoint, "WP1 52.3 4.8", &mut ctx);

        assert_eq!(overlay.shapes, vec![("CIRCLE".into(), "52.3 4.8 10".into())]);
        assert_eq!(overlay.waypoints, vec!["WP1 52.3 4.8".to_string()]);
        assert!(sink.messages.iter().all(|(_, s)| *s == Severity::Success));
    }
}
