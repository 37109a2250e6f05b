//! # Console Session
//!
//! The orchestrator that ties the engine together: it owns the command
//! history, the draft input line, and the collaborator handles, and exposes
//! the operations the input surface drives — submit, history recall,
//! autocomplete, and parameter hints.
//!
//! There is deliberately no global session: the host constructs one and
//! passes it to whatever owns the input widget, with storage injected as a
//! capability rather than reached for ambiently.

pub mod dispatcher;
pub mod handlers;

use crate::core::history::{HistoryBuffer, RecallNext};
use crate::core::suggest::{self, Completion};
use crate::models::Severity;
use crate::system::{
    KeyValueStorage, MapView, MessageSink, OverlayManager, SimulationState, Transport,
};
use dispatcher::DispatchContext;

/// One interactive console session.
///
/// All operations run on the caller's (UI) thread, one at a time; a submit
/// is fully processed — classified, optionally forwarded, appended to
/// history — before the next operation is accepted, so history can never
/// miss a command behind a pending async reply.
pub struct ConsoleSession {
    view: Box<dyn MapView>,
    sim: Box<dyn SimulationState>,
    transport: Box<dyn Transport>,
    messages: Box<dyn MessageSink>,
    storage: Box<dyn KeyValueStorage>,
    overlay: Option<Box<dyn OverlayManager>>,
    history: HistoryBuffer,
    draft: String,
}

impl std::fmt::Debug for ConsoleSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleSession")
            .field("history_len", &self.history.len())
            .field("draft", &self.draft)
            .finish_non_exhaustive()
    }
}

impl ConsoleSession {
    /// Builds a session around the host's collaborators, restoring any
    /// persisted history from the injected storage.
    pub fn new(
        view: Box<dyn MapView>,
        sim: Box<dyn SimulationState>,
        transport: Box<dyn Transport>,
        messages: Box<dyn MessageSink>,
        storage: Box<dyn KeyValueStorage>,
    ) -> Self {
        let history = HistoryBuffer::restore(&*storage);
        log::debug!("Console session restored {} history entries", history.len());
        Self {
            view,
            sim,
            transport,
            messages,
            storage,
            overlay: None,
            history,
            draft: String::new(),
        }
    }

    /// Injects the overlay capability after construction. Until this is
    /// called, the overlay commands report "not yet implemented".
    pub fn set_overlay_manager(&mut self, overlay: Box<dyn OverlayManager>) {
        self.overlay = Some(overlay);
    }

    /// Submits one command line.
    ///
    /// Blank lines are discarded. Otherwise the raw line is echoed, then
    /// classified; a forward decision (explicit, or the pass-through default
    /// for unrecognized commands) hands the rewritten-or-original text to
    /// the transport. The *original* line — never the rewritten form — is
    /// appended to history, and the recall cursor returns to the fresh line.
    pub fn submit(&mut self, line: &str) {
        let raw = line.trim();
        if raw.is_empty() {
            return;
        }
        self.messages.post_message(raw, Severity::Info);

        let result = {
            let mut ctx = DispatchContext {
                view: &mut *self.view,
                sim: &*self.sim,
                transport: &mut *self.transport,
                messages: &mut *self.messages,
                overlay: self
                    .overlay
                    .as_deref_mut()
                    .map(|o| o as &mut dyn OverlayManager),
            };
            dispatcher::classify(raw, &mut ctx)
        };

        if result.should_forward() {
            let outbound = result.rewritten.as_deref().unwrap_or(raw);
            self.transport.send_command(outbound);
        }

        self.history.push(raw);
        self.history.persist(&mut *self.storage);
        self.draft.clear();
    }

    /// Recalls the previous (older) history entry into the draft. At the
    /// oldest entry this sticks; with no history it is a no-op.
    pub fn recall_previous(&mut self) -> &str {
        if let Some(entry) = self.history.recall_previous() {
            self.draft = entry;
        }
        &self.draft
    }

    /// Recalls the next (newer) history entry into the draft. Stepping past
    /// the most recent entry clears the draft and ends the recall — the only
    /// way back to the fresh line short of submitting.
    pub fn recall_next(&mut self) -> &str {
        match self.history.recall_next() {
            RecallNext::Entry(entry) => self.draft = entry,
            RecallNext::Cleared => self.draft.clear(),
            RecallNext::Inactive => {}
        }
        &self.draft
    }

    /// Replaces the draft with what the user has typed so far.
    pub fn update_draft(&mut self, text: &str) {
        self.draft = text.to_string();
    }

    /// Completes the token being typed. A unique candidate rewrites the
    /// draft in place; several candidates are posted as one suggestion-list
    /// message and the draft stays untouched.
    pub fn autocomplete(&mut self) -> &str {
        let remote = self.sim.remote_vocabulary();
        match suggest::complete(&self.draft, remote.as_ref()) {
            Completion::Applied(completed) => self.draft = completed,
            Completion::Suggestions(candidates) => {
                self.messages
                    .post_message(&candidates.join(", "), Severity::Info);
            }
            Completion::Unchanged => {}
        }
        &self.draft
    }

    /// The remaining-parameter hint for the current draft, recomputed from
    /// the live remote vocabulary on every call and shown right after the
    /// typed text. `None` clears the hint.
    pub fn parameter_hint(&self) -> Option<String> {
        let remote = self.sim.remote_vocabulary();
        suggest::parameter_hint(&self.draft, remote.as_ref())
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }
}
