//! Command interpretation and console interaction engine for an air-traffic
//! simulation client.
//!
//! The crate owns the state-machine content of the client console: command
//! classification and dispatch, argument preprocessing (bounding-box command
//! synthesis), bounded command history with recall, and context-sensitive
//! autocomplete/parameter hints. Everything around it (map rendering, the
//! wire protocol to the simulator, the message log surface) is consumed
//! through the traits in [`system`].

pub mod config;
pub mod console;
pub mod constants;
pub mod core;
pub mod models;
pub mod system;
