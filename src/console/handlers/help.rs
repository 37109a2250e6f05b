// src/console/handlers/help.rs

use crate::console::dispatcher::DispatchContext;
use crate::core::vocabulary::{self, LOCAL_NAMES, PREPROCESSED_NAMES};
use crate::models::{CommandResult, Severity};

/// `HELP [command]` / `?` — always answered on the client.
///
/// Without arguments: a summary of the client-side commands. With one: the
/// parameter description the simulator announced for that command, when it
/// announced any.
pub fn handle(arguments: &str, ctx: &mut DispatchContext<'_>) -> CommandResult {
    let topic = arguments.split_whitespace().next();
    let text = match topic {
        None => {
            let mut names: Vec<&str> = LOCAL_NAMES
                .iter()
                .chain(PREPROCESSED_NAMES.iter())
                .copied()
                .collect();
            names.sort_unstable();
            format!(
                "Console commands: {}. Anything else is forwarded to the simulator.",
                names.join(", ")
            )
        }
        Some(topic) => {
            let name = topic.to_uppercase();
            let remote = ctx.sim.remote_vocabulary();
            match vocabulary::parameter_description(remote.as_ref(), &name) {
                Some(description) => format!("{name}: {description}"),
                None => format!("{name}: documented by the simulator"),
            }
        }
    };
    ctx.post(&text, Severity::Info);
    CommandResult::completed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::testkit::{RecordingSink, RecordingTransport, StubSim, StubView};

    fn run(arguments: &str, sim: &StubSim, sink: &mut RecordingSink) -> CommandResult {
        let mut view = StubView::ready();
        let mut transport = RecordingTransport::default();
        let mut ctx = DispatchContext {
            view: &mut view,
            sim,
            transport: &mut transport,
            messages: sink,
            overlay: None,
        };
        handle(arguments, &mut ctx)
    }

    #[test]
    fn bare_help_lists_the_client_vocabulary() {
        let mut sink = RecordingSink::default();
        let result = run("", &StubSim::default(), &mut sink);

        assert!(result.handled && !result.forward);
        let (text, severity) = &sink.messages[0];
        assert_eq!(*severity, Severity::Info);
        assert!(text.contains("PAN"));
        assert!(text.contains("MCRE"));
    }

    #[test]
    fn help_for_a_remote_command_shows_its_parameters() {
        let sim = StubSim::with_vocabulary(&[("CRE", "acid,type,lat,lon,hdg,alt,spd")]);
        let mut sink = RecordingSink::default();
        run("cre", &sim, &mut sink);

        assert_eq!(sink.messages[0].0, "CRE: acid,type,lat,lon,hdg,alt,spd");
    }

    #[test]
    fn help_for_an_undeclared_command_defers_to_the_simulator() {
        let mut sink = RecordingSink::default();
        run("spd", &StubSim::default(), &mut sink);

        assert_eq!(sink.messages[0].0, "SPD: documented by the simulator");
    }
}
