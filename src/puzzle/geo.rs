//! Spherical geometry helpers
//!
//! Distances use the haversine formula on a sphere; bearings are the initial
//! great-circle azimuth, quantized into compass octants.

use super::config::EARTH_RADIUS_KM;
use super::types::{Coordinates, Direction};

/// Great-circle distance between two positions in kilometers
pub fn distance_km(a: Coordinates, b: Coordinates) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    // Rounding can push h a hair outside [0, 1] for antipodal points
    let h = h.clamp(0.0, 1.0);
    EARTH_RADIUS_KM * 2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Initial bearing from `a` to `b` in degrees, normalized to [0, 360)
pub fn bearing_degrees(a: Coordinates, b: Coordinates) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let y = d_lng.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lng.cos();
    let degrees = y.atan2(x).to_degrees();
    let normalized = degrees.rem_euclid(360.0);
    // rem_euclid can return exactly 360.0 for tiny negative inputs
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

/// Quantize a bearing into one of eight octants.
///
/// Each octant is a half-open 45° interval centred on its direction, so a
/// bearing sitting on a boundary belongs to the clockwise neighbour.
pub fn octant_for_bearing(degrees: f64) -> Direction {
    let normalized = degrees.rem_euclid(360.0);
    let index = ((normalized + 22.5) / 45.0).floor() as usize % 8;
    Direction::OCTANTS[index]
}

/// Compass octant pointing from `a` toward `b`
pub fn bearing_octant(a: Coordinates, b: Coordinates) -> Direction {
    octant_for_bearing(bearing_degrees(a, b))
}
