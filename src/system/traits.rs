// src/system/traits.rs

use crate::models::{AircraftSnapshot, Severity, ViewBounds};
use std::collections::HashMap;

/// The map/view component the console steers. Pan and zoom are applied
/// directly; the view owns any clamping of zoom levels.
pub trait MapView {
    /// Whether the view has finished initializing. Commands that need the
    /// view short-circuit with an error message while this is false.
    fn is_ready(&self) -> bool;

    /// Centers the view on the given coordinates.
    fn pan_to(&mut self, lat: f64, lon: f64);

    /// Applies an absolute zoom level, unclamped by the console.
    fn set_zoom_level(&mut self, level: f64);

    fn zoom_in_one_level(&mut self);

    fn zoom_out_one_level(&mut self);

    /// The current geographic extent, or `None` before the first render.
    fn current_bounds(&self) -> Option<ViewBounds>;
}

/// The simulation-state component: traffic snapshots and the command
/// vocabulary announced by the connected simulator.
///
/// Both return owned snapshots: the underlying data is hot-swapped whole on
/// reconnect, so a caller always observes one consistent state and never a
/// torn one.
pub trait SimulationState {
    /// The latest traffic snapshot, or `None` before any data arrived.
    fn current_entity_snapshot(&self) -> Option<AircraftSnapshot>;

    /// Remote command name to comma-separated parameter names, or `None`
    /// pre-connection. Used for completion and hints only, never for
    /// dispatch decisions.
    fn remote_vocabulary(&self) -> Option<HashMap<String, String>>;
}

/// The transport to the remote simulator. Sends are fire-and-forget: the
/// console does not await replies and holds no in-flight request state.
pub trait Transport {
    fn send_command(&mut self, line: &str);

    fn disconnect(&mut self);
}

/// The message/log display surface. Every user action produces exactly one
/// echo of the typed command and at most one status message here.
pub trait MessageSink {
    fn post_message(&mut self, text: &str, severity: Severity);
}

/// Optional capability for the shape/waypoint overlay features that are
/// wired in after console construction. While absent, the commands that
/// would use it report "not yet implemented" instead of faulting.
pub trait OverlayManager {
    fn draw_shape(&mut self, name: &str, arguments: &str);

    fn define_waypoint(&mut self, arguments: &str);
}
