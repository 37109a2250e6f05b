// src/constants.rs

/// Maximum number of entries retained in the command history buffer.
/// Insertion beyond this evicts the oldest entry.
pub const HISTORY_CAPACITY: usize = 100;

/// Storage key under which the command history is persisted.
/// The stored layout (a JSON array of strings) is format-stable; there is
/// deliberately no version tag on this key.
pub const HISTORY_STORAGE_KEY: &str = "console_history";

/// Name of the per-store file used by the file-backed key/value store.
pub const STORE_FILENAME: &str = "store.json";

/// Name of the client configuration file, looked up in the platform config
/// directory unless overridden on the command line.
pub const CLIENT_CONFIG_FILENAME: &str = "skystack.toml";

/// The command whose third argument token completes against
/// [`AIRCRAFT_TYPES`] instead of the command vocabulary.
pub const CREATE_AIRCRAFT_COMMAND: &str = "CRE";

/// Fixed list of aircraft type codes offered by the creation autocomplete.
pub const AIRCRAFT_TYPES: &[&str] = &[
    "A319", "A320", "A321", "A332", "A333", "A359", "A388", "B737", "B738",
    "B739", "B744", "B748", "B752", "B763", "B772", "B77W", "B788", "B789",
    "E190", "MD11",
];

/// Decimal digits used when echoing coordinates back to the user.
pub const COORDINATE_ECHO_DECIMALS: usize = 3;

/// Decimal digits of fixed-point precision for region-query bounds. Chosen
/// to preserve sub-meter geographic precision across the text protocol.
pub const BOUND_PRECISION_DECIMALS: usize = 14;
