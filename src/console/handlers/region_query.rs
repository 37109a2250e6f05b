// src/console/handlers/region_query.rs

use crate::console::dispatcher::DispatchContext;
use crate::core::region;
use crate::models::{CommandResult, Severity};

/// Qualifies a view-relative command with the current map bounds before it
/// is forwarded, so the simulator applies it inside the visible region.
///
/// On success nothing is posted locally: the simulator echoes the outcome of
/// the forwarded command. Without a ready view (or before the first render
/// produced bounds) the command is swallowed with an error.
pub fn handle(name: &str, arguments: &str, ctx: &mut DispatchContext<'_>) -> CommandResult {
    let bounds = if ctx.view.is_ready() {
        ctx.view.current_bounds()
    } else {
        None
    };
    let Some(bounds) = bounds else {
        let text = format!("{name}: map view is not ready, cannot determine bounds");
        ctx.post(&text, Severity::Error);
        return CommandResult::completed();
    };

    let rewritten = region::synthesize_region_query(bounds, name, arguments);
    log::debug!("Region query rewritten to '{rewritten}'");
    CommandResult::forward_rewritten(rewritten)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::testkit::{RecordingSink, RecordingTransport, StubSim, StubView};

    fn run(view: &mut StubView, sink: &mut RecordingSink) -> CommandResult {
        let sim = StubSim::default();
        let mut transport = RecordingTransport::default();
        let mut ctx = DispatchContext {
            view,
            sim: &sim,
            transport: &mut transport,
            messages: sink,
            overlay: None,
        };
        handle("MCRE", "3 B737", &mut ctx)
    }

    #[test]
    fn ready_view_produces_the_rewritten_command_silently() {
        let mut view = StubView::ready();
        let mut sink = RecordingSink::default();
        let result = run(&mut view, &mut sink);

        assert!(result.handled && result.forward);
        assert!(result.rewritten.is_some());
        assert!(sink.messages.is_empty());
    }

    #[test]
    fn missing_bounds_count_as_an_unready_view() {
        let mut view = StubView::ready();
        view.bounds = None;
        let mut sink = RecordingSink::default();
        let result = run(&mut view, &mut sink);

        assert!(result.handled && !result.forward);
        assert_eq!(sink.messages[0].1, Severity::Error);
    }
}
