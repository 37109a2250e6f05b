// src/core/vocabulary.rs

use std::collections::HashMap;

// --- COMMAND PARTITIONS ---
//
// The local and preprocessed partitions are static and owned by this crate;
// the remote partition arrives from the simulator connection and is merged
// additively for completion and hints only. Classification never consults
// the remote partition, so a remote name colliding with a local one can
// never change dispatch: local always wins.

/// Commands executed entirely on the client. Never transmitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalCommand {
    /// `PAN <lat,lon | aircraft id>` — center the view.
    Pan,
    /// `ZOOM <IN | OUT | level>` — absolute or stepwise zoom.
    Zoom,
    /// `ZOOMIN` — one level in.
    ZoomIn,
    /// `ZOOMOUT` — one level out.
    ZoomOut,
    /// Bare `+`/`++`/`=` lines: one level in per symbol.
    ZoomInSteps(usize),
    /// Bare `-`/`--` lines: one level out per symbol.
    ZoomOutSteps(usize),
    /// `HELP [command]` / `?` — client-side help.
    Help,
    /// Recognized but feature-gated commands (overlay drawing, waypoints).
    Reserved(ReservedCommand),
}

/// The fixed set of recognized-but-unwired commands. They classify as local
/// so they are never forwarded, and report as unimplemented until an overlay
/// capability is injected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservedCommand {
    Area,
    Box,
    Circle,
    Line,
    Poly,
    DefineWaypoint,
}

impl ReservedCommand {
    pub fn name(self) -> &'static str {
        match self {
            Self::Area => "AREA",
            Self::Box => "BOX",
            Self::Circle => "CIRCLE",
            Self::Line => "LINE",
            Self::Poly => "POLY",
            Self::DefineWaypoint => "DEFWPT",
        }
    }
}

/// Commands rewritten or intercepted on the client before an optional
/// transmission decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreprocessedCommand {
    /// `MCRE <n> [type] ...` — qualified with the current view bounds before
    /// forwarding, so the aircraft spawn inside the visible region.
    CreateInView,
    /// `DISCONNECT` — tears down the transport; never forwarded.
    Disconnect,
}

impl LocalCommand {
    /// Resolves an uppercased command name to its local variant.
    pub fn from_name(name: &str) -> Option<Self> {
        let command = match name {
            "PAN" => Self::Pan,
            "ZOOM" => Self::Zoom,
            "ZOOMIN" => Self::ZoomIn,
            "ZOOMOUT" => Self::ZoomOut,
            "HELP" | "?" => Self::Help,
            "AREA" => Self::Reserved(ReservedCommand::Area),
            "BOX" => Self::Reserved(ReservedCommand::Box),
            "CIRCLE" => Self::Reserved(ReservedCommand::Circle),
            "LINE" => Self::Reserved(ReservedCommand::Line),
            "POLY" => Self::Reserved(ReservedCommand::Poly),
            "DEFWPT" => Self::Reserved(ReservedCommand::DefineWaypoint),
            _ => return Self::from_zoom_symbols(name),
        };
        Some(command)
    }

    /// Bare `+`/`=` and `-` command lines nudge the zoom one level per
    /// symbol, mirroring the keyboard shortcuts of the desktop client.
    fn from_zoom_symbols(name: &str) -> Option<Self> {
        if name.is_empty() {
            return None;
        }
        if name.chars().all(|c| c == '+' || c == '=') {
            return Some(Self::ZoomInSteps(name.len()));
        }
        if name.chars().all(|c| c == '-') {
            return Some(Self::ZoomOutSteps(name.len()));
        }
        None
    }
}

impl PreprocessedCommand {
    /// Resolves an uppercased command name to its preprocessed variant.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "MCRE" => Some(Self::CreateInView),
            "DISCONNECT" => Some(Self::Disconnect),
            _ => None,
        }
    }
}

// --- COMPLETION VOCABULARY ---

/// Local command names offered by autocomplete. The zoom symbol forms are
/// deliberately absent: they are shorthand, not vocabulary.
pub const LOCAL_NAMES: &[&str] = &[
    "PAN", "ZOOM", "ZOOMIN", "ZOOMOUT", "HELP", "?", "AREA", "BOX", "CIRCLE",
    "LINE", "POLY", "DEFWPT",
];

/// Preprocessed command names offered by autocomplete.
pub const PREPROCESSED_NAMES: &[&str] = &["MCRE", "DISCONNECT"];

/// The merged completion vocabulary: local ∪ preprocessed ∪ remote,
/// uppercased, deduplicated case-insensitively, lexicographically sorted.
pub fn merged_names(remote: Option<&HashMap<String, String>>) -> Vec<String> {
    let mut names: Vec<String> = LOCAL_NAMES
        .iter()
        .chain(PREPROCESSED_NAMES.iter())
        .map(|name| (*name).to_string())
        .collect();
    if let Some(remote) = remote {
        names.extend(remote.keys().map(|name| name.to_uppercase()));
    }
    names.sort();
    names.dedup();
    names
}

/// Looks up the comma-separated parameter description a remote vocabulary
/// declares for `name`. Local commands declare no parameters and therefore
/// never produce hints.
pub fn parameter_description<'a>(
    remote: Option<&'a HashMap<String, String>>,
    name: &str,
) -> Option<&'a str> {
    let remote = remote?;
    remote
        .iter()
        .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
        .map(|(_, description)| description.as_str())
        .filter(|description| !description.trim().is_empty())
}
