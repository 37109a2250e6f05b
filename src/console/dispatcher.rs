// src/console/dispatcher.rs

use crate::console::handlers;
use crate::core::vocabulary::{LocalCommand, PreprocessedCommand};
use crate::models::{CommandResult, ParsedCommand, Severity};
use crate::system::{MapView, MessageSink, OverlayManager, SimulationState, Transport};

/// The collaborators a single classification may touch, borrowed from
/// whoever owns them for the duration of one dispatch.
pub struct DispatchContext<'a> {
    pub view: &'a mut dyn MapView,
    pub sim: &'a dyn SimulationState,
    pub transport: &'a mut dyn Transport,
    pub messages: &'a mut dyn MessageSink,
    /// Late-wired overlay capability; absent until the host injects it.
    pub overlay: Option<&'a mut dyn OverlayManager>,
}

impl std::fmt::Debug for DispatchContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DispatchContext").finish_non_exhaustive()
    }
}

impl DispatchContext<'_> {
    pub(crate) fn post(&mut self, text: &str, severity: Severity) {
        self.messages.post_message(text, severity);
    }
}

/// Classifies one raw command line and runs whatever local processing it
/// needs.
///
/// The decision procedure:
/// 1. blank input is nobody's command (`handled:false, forward:false`);
/// 2. the first whitespace token, uppercased, is the command name;
/// 3. local commands run here and never leave the client;
/// 4. preprocessed commands run here and may request forwarding, rewritten
///    or not;
/// 5. everything else is passed through verbatim — absence of local
///    knowledge is not a failure.
///
/// The dispatcher never raises across this boundary: every failing branch
/// ends in one classified message plus a swallowing result.
pub fn classify(raw: &str, ctx: &mut DispatchContext<'_>) -> CommandResult {
    let Some(parsed) = ParsedCommand::parse(raw) else {
        return CommandResult::empty();
    };
    log::debug!("Classifying command '{}'", parsed.name);

    if let Some(command) = LocalCommand::from_name(&parsed.name) {
        return dispatch_local(command, &parsed, ctx);
    }
    if let Some(command) = PreprocessedCommand::from_name(&parsed.name) {
        return dispatch_preprocessed(command, &parsed, ctx);
    }
    CommandResult::pass_through()
}

fn dispatch_local(
    command: LocalCommand,
    parsed: &ParsedCommand,
    ctx: &mut DispatchContext<'_>,
) -> CommandResult {
    match command {
        LocalCommand::Pan => handlers::pan::handle(&parsed.arguments, ctx),
        LocalCommand::Zoom => handlers::zoom::handle_level(&parsed.arguments, ctx),
        LocalCommand::ZoomIn => handlers::zoom::handle_steps_in(1, ctx),
        LocalCommand::ZoomOut => handlers::zoom::handle_steps_out(1, ctx),
        LocalCommand::ZoomInSteps(count) => handlers::zoom::handle_steps_in(count, ctx),
        LocalCommand::ZoomOutSteps(count) => handlers::zoom::handle_steps_out(count, ctx),
        LocalCommand::Help => handlers::help::handle(&parsed.arguments, ctx),
        LocalCommand::Reserved(reserved) => {
            handlers::reserved::handle(reserved, &parsed.arguments, ctx)
        }
    }
}

fn dispatch_preprocessed(
    command: PreprocessedCommand,
    parsed: &ParsedCommand,
    ctx: &mut DispatchContext<'_>,
) -> CommandResult {
    match command {
        PreprocessedCommand::CreateInView => {
            handlers::region_query::handle(&parsed.name, &parsed.arguments, ctx)
        }
        PreprocessedCommand::Disconnect => handlers::disconnect::handle(ctx),
    }
}
