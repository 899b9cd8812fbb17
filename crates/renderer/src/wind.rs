//! Wind vector transforms.
//!
//! A wind reading is a (speed, bearing) pair where the bearing is a
//! compass direction in degrees (0 = north, increasing clockwise). Two
//! output conventions exist and are deliberately kept separate:
//!
//! - [`map_offset`] is compass-aligned: bearing 0° displaces pure
//!   +latitude, 90° pure +longitude. Used to draw a line from a point to
//!   a displaced endpoint in lon/lat space.
//! - [`cartesian_components`] follows the standard mathematical angle
//!   convention (cos on x, sin on y) used by quiver-style arrows on a
//!   plain x/y plot. For the same bearing this produces a DIFFERENT
//!   orientation than the map offset; both renderings are reproduced
//!   as-is rather than unified.

/// Compute the (dx, dy) map displacement for a wind reading.
///
/// `dx` is the longitude offset and `dy` the latitude offset, in
/// degrees when `scale` converts m/s to degrees (e.g. 0.0005). Bearing
/// 0° yields (0, speed*scale); bearing 90° yields (speed*scale, 0).
pub fn map_offset(speed: f64, bearing_deg: f64, scale: f64) -> (f64, f64) {
    let theta = bearing_deg.to_radians();
    (speed * scale * theta.sin(), speed * scale * theta.cos())
}

/// Compute the displaced endpoint (end_lon, end_lat) for a wind line
/// starting at (lon, lat).
pub fn displaced_endpoint(
    lon: f64,
    lat: f64,
    speed: f64,
    bearing_deg: f64,
    scale: f64,
) -> (f64, f64) {
    let (dx, dy) = map_offset(speed, bearing_deg, scale);
    (lon + dx, lat + dy)
}

/// Compute the (u, v) cartesian components for a quiver arrow.
///
/// Math-angle convention: `u = speed * cos(bearing)`,
/// `v = speed * sin(bearing)`. Not compass-aligned; see the module docs.
pub fn cartesian_components(speed: f64, bearing_deg: f64) -> (f64, f64) {
    let theta = bearing_deg.to_radians();
    (speed * theta.cos(), speed * theta.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    #[test]
    fn test_map_offset_north() {
        let (dx, dy) = map_offset(10.0, 0.0, 1.0);
        assert!(dx.abs() < TOL, "north bearing must not displace longitude");
        assert!((dy - 10.0).abs() < TOL);
    }

    #[test]
    fn test_map_offset_east() {
        let (dx, dy) = map_offset(10.0, 90.0, 1.0);
        assert!((dx - 10.0).abs() < TOL);
        assert!(dy.abs() < TOL, "east bearing must not displace latitude");
    }

    #[test]
    fn test_map_offset_southwest() {
        let (dx, dy) = map_offset(2.0, 225.0, 1.0);
        let expected = -2.0 * (std::f64::consts::FRAC_PI_4).sin();
        assert!((dx - expected).abs() < TOL);
        assert!((dy - expected).abs() < TOL);
    }

    #[test]
    fn test_map_offset_scales_linearly() {
        let (dx1, dy1) = map_offset(8.0, 37.0, 0.0005);
        let (dx2, dy2) = map_offset(8.0, 37.0, 0.001);
        assert!((dx2 - 2.0 * dx1).abs() < TOL);
        assert!((dy2 - 2.0 * dy1).abs() < TOL);
    }

    #[test]
    fn test_displaced_endpoint() {
        let (end_lon, end_lat) = displaced_endpoint(13.0, 47.6, 10.0, 90.0, 0.0005);
        assert!((end_lon - 13.005).abs() < TOL);
        assert!((end_lat - 47.6).abs() < 1e-6);
    }

    #[test]
    fn test_cartesian_components() {
        let (u, v) = cartesian_components(10.0, 0.0);
        assert!((u - 10.0).abs() < TOL);
        assert!(v.abs() < TOL);

        let (u, v) = cartesian_components(10.0, 90.0);
        assert!(u.abs() < TOL);
        assert!((v - 10.0).abs() < TOL);
    }

    #[test]
    fn test_conventions_differ_for_same_bearing() {
        // Bearing 0°: map offset points +lat, cartesian points +x. The
        // mismatch is part of the contract, not a bug to fix here.
        let (dx, dy) = map_offset(10.0, 0.0, 1.0);
        let (u, v) = cartesian_components(10.0, 0.0);
        assert!((dx - v).abs() < TOL);
        assert!((dy - u).abs() < TOL);
        assert!((dx - u).abs() > 1.0);
    }
}
