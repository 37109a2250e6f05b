// src/console/handlers/zoom.rs

use crate::console::dispatcher::DispatchContext;
use crate::core::units;
use crate::models::{CommandResult, Severity};

/// `ZOOM <IN | OUT | level>` — `IN`/`OUT` (any case) delegate to the
/// one-level step handlers; anything else must parse as a floating-point
/// level, applied unclamped (clamping, if any, belongs to the view).
pub fn handle_level(arguments: &str, ctx: &mut DispatchContext<'_>) -> CommandResult {
    let argument = arguments.trim();
    if argument.eq_ignore_ascii_case("IN") {
        return handle_steps_in(1, ctx);
    }
    if argument.eq_ignore_ascii_case("OUT") {
        return handle_steps_out(1, ctx);
    }

    let Ok(level) = argument.parse::<f64>() else {
        ctx.post("ZOOM: expected IN, OUT or a numeric level", Severity::Warning);
        return CommandResult::completed();
    };
    if !ctx.view.is_ready() {
        ctx.post("ZOOM: map view is not ready", Severity::Error);
        return CommandResult::completed();
    }

    ctx.view.set_zoom_level(level);
    let echo = format!("ZOOM: level set to {}", units::format_zoom_level(level));
    ctx.post(&echo, Severity::Success);
    CommandResult::completed()
}

/// Zooms in by `count` whole levels (`ZOOMIN`, `ZOOM IN`, `+`, `++`, ...).
pub fn handle_steps_in(count: usize, ctx: &mut DispatchContext<'_>) -> CommandResult {
    if !ctx.view.is_ready() {
        ctx.post("ZOOM: map view is not ready", Severity::Error);
        return CommandResult::completed();
    }
    for _ in 0..count {
        ctx.view.zoom_in_one_level();
    }
    ctx.post(&step_echo("in", count), Severity::Success);
    CommandResult::completed()
}

/// Zooms out by `count` whole levels (`ZOOMOUT`, `ZOOM OUT`, `-`, `--`, ...).
pub fn handle_steps_out(count: usize, ctx: &mut DispatchContext<'_>) -> CommandResult {
    if !ctx.view.is_ready() {
        ctx.post("ZOOM: map view is not ready", Severity::Error);
        return CommandResult::completed();
    }
    for _ in 0..count {
        ctx.view.zoom_out_one_level();
    }
    ctx.post(&step_echo("out", count), Severity::Success);
    CommandResult::completed()
}

fn step_echo(direction: &str, count: usize) -> String {
    if count == 1 {
        format!("ZOOM: zoomed {direction} one level")
    } else {
        format!("ZOOM: zoomed {direction} {count} levels")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::testkit::{RecordingSink, RecordingTransport, StubSim, StubView};

    fn run(arguments: &str, view: &mut StubView, sink: &mut RecordingSink) -> CommandResult {
        let sim = StubSim::default();
        let mut transport = RecordingTransport::default();
        let mut ctx = DispatchContext {
            view,
            sim: &sim,
            transport: &mut transport,
            messages: sink,
            overlay: None,
        };
        handle_level(arguments, &mut ctx)
    }

    #[test]
    fn numeric_level_applies_unclamped_with_one_decimal_echo() {
        let mut view = StubView::ready();
        let mut sink = RecordingSink::default();
        run("42.25", &mut view, &mut sink);

        assert_eq!(view.zoom_level, Some(42.25));
        let (text, severity) = &sink.messages[0];
        assert_eq!(*severity, Severity::Success);
        assert_eq!(text, "ZOOM: level set to 42.2");
    }

    #[test]
    fn in_and_out_delegate_to_single_steps() {
        let mut view = StubView::ready();
        let mut sink = RecordingSink::default();
        run("in", &mut view, &mut sink);
        run("OUT", &mut view, &mut sink);
        run("Out", &mut view, &mut sink);

        assert_eq!(view.zoom_steps, -1);
        assert_eq!(view.zoom_level, None);
    }

    #[test]
    fn non_numeric_level_warns_and_touches_nothing() {
        let mut view = StubView::ready();
        let mut sink = RecordingSink::default();
        run("fast", &mut view, &mut sink);

        assert_eq!(view.zoom_level, None);
        assert_eq!(sink.messages[0].1, Severity::Warning);
    }

    #[test]
    fn empty_argument_is_a_warning_not_a_default() {
        let mut view = StubView::ready();
        let mut sink = RecordingSink::default();
        run("", &mut view, &mut sink);

        assert_eq!(view.zoom_level, None);
        assert_eq!(sink.messages[0].1, Severity::Warning);
    }

    #[test]
    fn unready_view_is_an_error_for_every_variant() {
        let mut view = StubView::not_ready();
        let mut sink = RecordingSink::default();
        run("7", &mut view, &mut sink);

        let sim = StubSim::default();
        let mut transport = RecordingTransport::default();
        let mut ctx = DispatchContext {
            view: &mut view,
            sim: &sim,
            transport: &mut transport,
            messages: &mut sink,
            overlay: None,
        };
        handle_steps_in(1, &mut ctx);
        handle_steps_out(1, &mut ctx);

        assert_eq!(sink.messages.len(), 3);
        assert!(sink.messages.iter().all(|(_, s)| *s == Severity::Error));
        assert_eq!(view.zoom_steps, 0);
    }

    #[test]
    fn multi_step_echo_counts_levels() {
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
        handle_steps_in(3, &mut ctx);

        assert_eq!(view.zoom_steps, 3);
        assert_eq!(sink.messages[0].0, "ZOOM: zoomed in 3 levels");
    }
}
