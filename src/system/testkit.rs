// src/system/testkit.rs
//
// Shared test doubles for the collaborator traits. Compiled only for tests.

use crate::models::{AircraftSnapshot, Severity, ViewBounds};
use crate::system::storage::StorageError;
use crate::system::{
    KeyValueStorage, MapView, MessageSink, OverlayManager, SimulationState, Transport,
};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// A scriptable map view that records the calls made against it.
#[derive(Debug)]
pub(crate) struct StubView {
    pub ready: bool,
    pub bounds: Option<ViewBounds>,
    pub center: Option<(f64, f64)>,
    pub zoom_level: Option<f64>,
    pub zoom_steps: i32,
}

impl StubView {
    pub fn ready() -> Self {
        Self {
            ready: true,
            bounds: Some(ViewBounds {
                west: 4.0,
                south: 52.0,
                east: 5.0,
                north: 53.0,
            }),
            center: None,
            zoom_level: None,
            zoom_steps: 0,
        }
    }

    pub fn not_ready() -> Self {
        Self {
            ready: false,
            bounds: None,
            center: None,
            zoom_level: None,
            zoom_steps: 0,
        }
    }
}

impl MapView for StubView {
    fn is_ready(&self) -> bool {
        self.ready
    }

    fn pan_to(&mut self, lat: f64, lon: f64) {
        self.center = Some((lat, lon));
    }

    fn set_zoom_level(&mut self, level: f64) {
        self.zoom_level = Some(level);
    }

    fn zoom_in_one_level(&mut self) {
        self.zoom_steps += 1;
    }

    fn zoom_out_one_level(&mut self) {
        self.zoom_steps -= 1;
    }

    fn current_bounds(&self) -> Option<ViewBounds> {
        self.bounds
    }
}

/// Simulation state with a canned snapshot and remote vocabulary.
#[derive(Debug, Default)]
pub(crate) struct StubSim {
    pub snapshot: Option<AircraftSnapshot>,
    pub vocabulary: Option<HashMap<String, String>>,
}

impl StubSim {
    pub fn with_aircraft(ids: &[(&str, f64, f64)]) -> Self {
        let snapshot = AircraftSnapshot {
            id: ids.iter().map(|(id, _, _)| id.to_string()).collect(),
            lat: ids.iter().map(|(_, lat, _)| *lat).collect(),
            lon: ids.iter().map(|(_, _, lon)| *lon).collect(),
            alt: Vec::new(),
            tas: Vec::new(),
        };
        Self {
            snapshot: Some(snapshot),
            vocabulary: None,
        }
    }

    pub fn with_vocabulary(entries: &[(&str, &str)]) -> Self {
        let vocabulary = entries
            .iter()
            .map(|(name, params)| (name.to_string(), params.to_string()))
            .collect();
        Self {
            snapshot: None,
            vocabulary: Some(vocabulary),
        }
    }
}

impl SimulationState for StubSim {
    fn current_entity_snapshot(&self) -> Option<AircraftSnapshot> {
        self.snapshot.clone()
    }

    fn remote_vocabulary(&self) -> Option<HashMap<String, String>> {
        self.vocabulary.clone()
    }
}

/// Transport that records everything handed to it.
#[derive(Debug, Default)]
pub(crate) struct RecordingTransport {
    pub sent: Vec<String>,
    pub disconnects: usize,
}

impl Transport for RecordingTransport {
    fn send_command(&mut self, line: &str) {
        self.sent.push(line.to_string());
    }

    fn disconnect(&mut self) {
        self.disconnects += 1;
    }
}

/// Message sink that records posted messages in order.
#[derive(Debug, Default)]
pub(crate) struct RecordingSink {
    pub messages: Vec<(String, Severity)>,
}

impl MessageSink for RecordingSink {
    fn post_message(&mut self, text: &str, severity: Severity) {
        self.messages.push((text.to_string(), severity));
    }
}

/// Overlay capability that records delegated calls.
#[derive(Debug, Default)]
pub(crate) struct RecordingOverlay {
    pub shapes: Vec<(String, String)>,
    pub waypoints: Vec<String>,
}

impl OverlayManager for RecordingOverlay {
    fn draw_shape(&mut self, name: &str, arguments: &str) {
        self.shapes.push((name.to_string(), arguments.to_string()));
    }

    fn define_waypoint(&mut self, arguments: &str) {
        self.waypoints.push(arguments.to_string());
    }
}

// --- SHARED HANDLES ---
//
// Session tests hand ownership of the doubles to the session but still need
// to inspect them afterwards, so every collaborator trait is also
// implemented for `Rc<RefCell<T>>` (the tests are as single-threaded as the
// console itself).

impl<V: MapView> MapView for Rc<RefCell<V>> {
    fn is_ready(&self) -> bool {
        self.borrow().is_ready()
    }

    fn pan_to(&mut self, lat: f64, lon: f64) {
        self.borrow_mut().pan_to(lat, lon);
    }

    fn set_zoom_level(&mut self, level: f64) {
        self.borrow_mut().set_zoom_level(level);
    }

    fn zoom_in_one_level(&mut self) {
        self.borrow_mut().zoom_in_one_level();
    }

    fn zoom_out_one_level(&mut self) {
        self.borrow_mut().zoom_out_one_level();
    }

    fn current_bounds(&self) -> Option<ViewBounds> {
        self.borrow().current_bounds()
    }
}

impl<S: SimulationState> SimulationState for Rc<RefCell<S>> {
    fn current_entity_snapshot(&self) -> Option<AircraftSnapshot> {
        self.borrow().current_entity_snapshot()
    }

    fn remote_vocabulary(&self) -> Option<HashMap<String, String>> {
        self.borrow().remote_vocabulary()
    }
}

impl<T: Transport> Transport for Rc<RefCell<T>> {
    fn send_command(&mut self, line: &str) {
        self.borrow_mut().send_command(line);
    }

    fn disconnect(&mut self) {
        self.borrow_mut().disconnect();
    }
}

impl<M: MessageSink> MessageSink for Rc<RefCell<M>> {
    fn post_message(&mut self, text: &str, severity: Severity) {
        self.borrow_mut().post_message(text, severity);
    }
}

impl<K: KeyValueStorage> KeyValueStorage for Rc<RefCell<K>> {
    fn get(&self, key: &str) -> Option<String> {
        self.borrow().get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.borrow_mut().set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.borrow_mut().remove(key)
    }
}
