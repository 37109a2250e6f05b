// src/models.rs

use serde::{Deserialize, Serialize};
use std::fmt;

// --- MESSAGE SURFACE MODELS ---

/// Classification of a message posted to the external message surface.
///
/// Every failing or succeeding command branch emits exactly one message with
/// one of these severities; the surface decides how to render them.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        };
        f.write_str(label)
    }
}

// --- COMMAND MODELS ---

/// A submitted command line split into its name and argument string.
///
/// The name is uppercased for case-insensitive comparison; the arguments keep
/// their original casing and are rejoined single-spaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub name: String,
    pub arguments: String,
}

impl ParsedCommand {
    /// Splits a raw line on whitespace. Returns `None` for blank input.
    pub fn parse(raw: &str) -> Option<Self> {
        let mut tokens = raw.split_whitespace();
        let name = tokens.next()?.to_uppercase();
        let arguments = tokens.collect::<Vec<_>>().join(" ");
        Some(Self { name, arguments })
    }
}

/// The outcome of classifying one command line.
///
/// Invariants: `rewritten.is_some()` implies `forward`; when both `handled`
/// and `forward` are false the engine made no decision and the caller must
/// default to forwarding the original line verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// The engine recognized and fully processed the command.
    pub handled: bool,
    /// The (possibly rewritten) command must be sent to the simulator.
    pub forward: bool,
    /// Replacement text to forward instead of the original line.
    pub rewritten: Option<String>,
}

impl CommandResult {
    /// Local completion: recognized, nothing leaves the client.
    pub fn completed() -> Self {
        Self {
            handled: true,
            forward: false,
            rewritten: None,
        }
    }

    /// Unknown command: no decision made, caller forwards verbatim.
    pub fn pass_through() -> Self {
        Self {
            handled: false,
            forward: true,
            rewritten: None,
        }
    }

    /// Blank input: nothing to classify, nothing to forward.
    pub fn empty() -> Self {
        Self {
            handled: false,
            forward: false,
            rewritten: None,
        }
    }

    /// Preprocessed command forwarded as typed.
    pub fn forwarded() -> Self {
        Self {
            handled: true,
            forward: true,
            rewritten: None,
        }
    }

    /// Preprocessed command forwarded in rewritten form.
    pub fn forward_rewritten(text: impl Into<String>) -> Self {
        Self {
            handled: true,
            forward: true,
            rewritten: Some(text.into()),
        }
    }

    /// Whether the caller must hand this command to the transport, counting
    /// the absence of a decision as pass-through.
    pub fn should_forward(&self) -> bool {
        self.forward || !self.handled
    }
}

// --- GEOGRAPHIC MODELS ---

/// A validated latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

/// The geographic extent currently shown by the map view, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBounds {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

// --- SIMULATION STATE MODELS ---

/// A read-only snapshot of the simulated traffic, as parallel arrays keyed
/// by index. Owned and refreshed by the simulation-state component; the
/// console only reads it to resolve pan-to-entity lookups and to enrich
/// their echoes.
///
/// `alt` (metres) and `tas` (m/s) may be empty when the feed omits them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AircraftSnapshot {
    pub id: Vec<String>,
    pub lat: Vec<f64>,
    pub lon: Vec<f64>,
    pub alt: Vec<f64>,
    pub tas: Vec<f64>,
}

impl AircraftSnapshot {
    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
    }
}
