// src/console/handlers/disconnect.rs

use crate::console::dispatcher::DispatchContext;
use crate::models::{CommandResult, Severity};

/// `DISCONNECT` — tears down the transport as a side effect and reports it.
/// Never forwarded: by the time the simulator could see it, the link is
/// already gone.
pub fn handle(ctx: &mut DispatchContext<'_>) -> CommandResult {
    ctx.transport.disconnect();
    ctx.post("Disconnecting from simulator", Severity::Info);
    CommandResult::completed()
}
