// src/core/resolver.rs

use crate::models::{AircraftSnapshot, LatLon};

/// Parses free-form location text into an explicit coordinate pair.
///
/// Comma-separated `lat,lon` is tried first; if that does not yield exactly
/// two parts, whitespace-separated parsing is the fallback. Both parts must
/// parse as finite numbers, latitude within [-90, 90] and longitude within
/// [-180, 180]. Any violation yields `None` (never a clamped or partial
/// result), which tells the caller to fall back to entity-identifier
/// resolution.
pub fn parse_lat_lon(text: &str) -> Option<LatLon> {
    let comma_parts: Vec<&str> = text.split(',').map(str::trim).collect();
    let parts: Vec<&str> = if comma_parts.len() == 2 {
        comma_parts
    } else {
        text.split_whitespace().collect()
    };

    let [lat_text, lon_text] = parts.as_slice() else {
        return None;
    };
    let lat: f64 = lat_text.parse().ok()?;
    let lon: f64 = lon_text.parse().ok()?;

    if !lat.is_finite() || !lon.is_finite() {
        return None;
    }
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
        return None;
    }
    Some(LatLon { lat, lon })
}

/// The position (and any display extras the snapshot carries) of one
/// resolved aircraft.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityFix {
    pub id: String,
    pub position: LatLon,
    /// Altitude in metres, when the feed provides it.
    pub altitude: Option<f64>,
    /// True airspeed in m/s, when the feed provides it.
    pub speed: Option<f64>,
}

/// Resolves an entity identifier against the current traffic snapshot by
/// case-insensitive exact match. Returns `None` on a miss or when the
/// parallel arrays are too short to give the match a position.
pub fn find_entity(snapshot: &AircraftSnapshot, ident: &str) -> Option<EntityFix> {
    let index = snapshot
        .id
        .iter()
        .position(|candidate| candidate.eq_ignore_ascii_case(ident))?;

    let lat = *snapshot.lat.get(index)?;
    let lon = *snapshot.lon.get(index)?;
    Some(EntityFix {
        id: snapshot.id.get(index)?.clone(),
        position: LatLon { lat, lon },
        altitude: snapshot.alt.get(index).copied(),
        speed: snapshot.tas.get(index).copied(),
    })
}
