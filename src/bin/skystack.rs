// src/bin/skystack.rs

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use dialoguer::{Completion as PromptCompletion, History, Input};
use skystack::config::ClientConfig;
use skystack::console::ConsoleSession;
use skystack::core::suggest::{self, Completion};
use skystack::models::{AircraftSnapshot, Severity, ViewBounds};
use skystack::system::{
    FileStorage, MapView, MessageSink, SimulationState, Transport,
};
use std::collections::HashMap;
use std::path::PathBuf;

/// skystack: an interactive command console for air-traffic simulation.
///
/// Runs the console engine against an offline map view and a printing
/// transport, so every part of the command pipeline — classification,
/// rewriting, history, completion, hints — can be exercised from a plain
/// terminal. Type `HELP` for the client-side vocabulary; anything unknown
/// is "forwarded" (printed as outbound traffic). `exit` leaves.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the client configuration file. Defaults to
    /// `skystack.toml` in the platform config directory.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the store file used for persisted command history.
    #[arg(long)]
    store: Option<PathBuf>,
}

// --- OFFLINE COLLABORATORS ---

/// An in-memory map view: real pan/zoom state, no pixels.
#[derive(Debug)]
struct OfflineView {
    center: (f64, f64),
    zoom: f64,
}

impl Default for OfflineView {
    fn default() -> Self {
        // Start over Amsterdam, roughly where the canned traffic flies.
        Self {
            center: (52.3, 4.8),
            zoom: 7.0,
        }
    }
}

impl MapView for OfflineView {
    fn is_ready(&self) -> bool {
        true
    }

    fn pan_to(&mut self, lat: f64, lon: f64) {
        self.center = (lat, lon);
    }

    fn set_zoom_level(&mut self, level: f64) {
        self.zoom = level;
    }

    fn zoom_in_one_level(&mut self) {
        self.zoom += 1.0;
    }

    fn zoom_out_one_level(&mut self) {
        self.zoom -= 1.0;
    }

    fn current_bounds(&self) -> Option<ViewBounds> {
        let lon_span = 360.0 / 2.0_f64.powf(self.zoom);
        let lat_span = lon_span / 2.0;
        let (lat, lon) = self.center;
        Some(ViewBounds {
            west: lon - lon_span / 2.0,
            south: lat - lat_span / 2.0,
            east: lon + lon_span / 2.0,
            north: lat + lat_span / 2.0,
        })
    }
}

/// Canned simulation state: a handful of flights and the parameter
/// vocabulary a connected simulator would announce.
#[derive(Debug)]
struct OfflineSim {
    vocabulary: HashMap<String, String>,
}

impl SimulationState for OfflineSim {
    fn current_entity_snapshot(&self) -> Option<AircraftSnapshot> {
        Some(AircraftSnapshot {
            id: vec!["KL123".into(), "BA456".into(), "EZY789".into()],
            lat: vec![52.31, 51.47, 51.15],
            lon: vec![4.77, -0.45, 2.19],
            alt: vec![3657.6, 10_668.0, 11_582.4],
            tas: vec![128.6, 236.7, 231.5],
        })
    }

    fn remote_vocabulary(&self) -> Option<HashMap<String, String>> {
        Some(self.vocabulary.clone())
    }
}

fn offline_vocabulary() -> HashMap<String, String> {
    [
        ("CRE", "acid,type,lat,lon,hdg,alt,spd"),
        ("MCRE", "n,type,alt,spd,dest"),
        ("DEL", "acid"),
        ("ALT", "acid,alt"),
        ("SPD", "acid,spd"),
        ("HDG", "acid,hdg"),
        ("DEST", "acid,wpname"),
        ("OP", ""),
        ("HOLD", ""),
    ]
    .into_iter()
    .map(|(name, params)| (name.to_string(), params.to_string()))
    .collect()
}

/// Transport that prints outbound traffic instead of framing it onto a
/// socket. Protocol framing is the real client's job, not the console's.
#[derive(Debug, Default)]
struct PrintingTransport;

impl Transport for PrintingTransport {
    fn send_command(&mut self, line: &str) {
        println!("{} {}", "-->".bright_black(), line.bright_black());
    }

    fn disconnect(&mut self) {
        println!("{}", "--> transport closed".bright_black());
    }
}

/// Renders console messages with one color per severity.
#[derive(Debug, Default)]
struct TerminalSink;

impl MessageSink for TerminalSink {
    fn post_message(&mut self, text: &str, severity: Severity) {
        match severity {
            Severity::Info => println!("{text}"),
            Severity::Success => println!("{}", text.green()),
            Severity::Warning => println!("{}", text.yellow()),
            Severity::Error => println!("{}", text.red()),
        }
    }
}

// --- PROMPT INTEGRATION ---

/// Bridges the prompt's up/down recall to the restored command history.
struct PromptHistory {
    entries: Vec<String>,
}

impl History<String> for PromptHistory {
    fn read(&self, pos: usize) -> Option<String> {
        self.entries.iter().rev().nth(pos).cloned()
    }

    fn write(&mut self, val: &String) {
        self.entries.push(val.clone());
    }
}

/// Bridges the prompt's Tab key to the suggestion engine. Ambiguous
/// completions and parameter hints are printed dimmed above the prompt.
struct ConsoleCompletion {
    vocabulary: HashMap<String, String>,
}

impl PromptCompletion for ConsoleCompletion {
    fn get(&self, input: &str) -> Option<String> {
        match suggest::complete(input, Some(&self.vocabulary)) {
            Completion::Applied(line) => Some(line),
            Completion::Suggestions(candidates) => {
                println!("{}", candidates.join(", ").bright_black());
                None
            }
            Completion::Unchanged => {
                if let Some(hint) = suggest::parameter_hint(input, Some(&self.vocabulary)) {
                    println!("{}", hint.bright_black().italic());
                }
                None
            }
        }
    }
}

// --- ENTRY POINT ---

fn main() {
    env_logger::init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("\n{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = ClientConfig::load(cli.config.as_deref())?;

    // CLI override > config file > platform default.
    let store_path = match cli.store {
        Some(path) => Some(path),
        None => config.store_path()?,
    };
    let storage = match store_path {
        Some(path) => FileStorage::open(path),
        None => FileStorage::open_default(),
    }
    .context("Failed to open the history store")?;
    log::debug!("History store at '{}'", storage.path().display());

    let mut session = ConsoleSession::new(
        Box::new(OfflineView::default()),
        Box::new(OfflineSim {
            vocabulary: offline_vocabulary(),
        }),
        Box::new(PrintingTransport),
        Box::new(TerminalSink),
        Box::new(storage),
    );

    println!(
        "{} offline console (configured simulator: {}:{})",
        "skystack".bold(),
        config.connection.host,
        config.connection.port
    );
    println!("Type HELP for client commands, Tab to complete, 'exit' to leave.\n");

    let completion = ConsoleCompletion {
        vocabulary: offline_vocabulary(),
    };
    let mut history = PromptHistory {
        entries: session.history().entries().map(String::from).collect(),
    };

    loop {
        let line: String = match Input::new()
            .with_prompt("stack>")
            .history_with(&mut history)
            .completion_with(&completion)
            .allow_empty(true)
            .interact_text()
        {
            Ok(line) => line,
            // End of input (or a torn-down terminal): leave quietly.
            Err(e) => {
                log::debug!("Prompt closed: {e}");
                break;
            }
        };

        if line.trim().eq_ignore_ascii_case("exit") {
            break;
        }
        session.submit(&line);
    }

    Ok(())
}
