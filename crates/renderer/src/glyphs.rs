//! Compass-arrow glyphs for text-based wind display.

/// The eight arrow glyphs in clockwise order starting from north.
pub const COMPASS_ARROWS: [char; 8] = ['↑', '↗', '→', '↘', '↓', '↙', '←', '↖'];

/// Map a compass bearing to one of eight arrow glyphs.
///
/// Bearings are bucketed into 45° sectors centered on the cardinal and
/// diagonal directions (bucket = round(deg / 45) mod 8). Any real input
/// is accepted via modulo; non-finite input yields `None`, which
/// renders as an empty glyph rather than failing.
pub fn arrow_for_bearing(bearing_deg: f64) -> Option<char> {
    if !bearing_deg.is_finite() {
        return None;
    }
    let deg = bearing_deg.rem_euclid(360.0);
    let idx = ((deg / 45.0).round() as usize) % 8;
    Some(COMPASS_ARROWS[idx])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cardinal_directions() {
        assert_eq!(arrow_for_bearing(0.0), Some('↑'));
        assert_eq!(arrow_for_bearing(90.0), Some('→'));
        assert_eq!(arrow_for_bearing(180.0), Some('↓'));
        assert_eq!(arrow_for_bearing(270.0), Some('←'));
    }

    #[test]
    fn test_diagonal_directions() {
        assert_eq!(arrow_for_bearing(45.0), Some('↗'));
        assert_eq!(arrow_for_bearing(135.0), Some('↘'));
        assert_eq!(arrow_for_bearing(225.0), Some('↙'));
        assert_eq!(arrow_for_bearing(315.0), Some('↖'));
    }

    #[test]
    fn test_sector_boundaries() {
        // Sectors are centered on the directions, so 22.4° still rounds
        // to north and 22.5° tips over to northeast.
        assert_eq!(arrow_for_bearing(22.4), Some('↑'));
        assert_eq!(arrow_for_bearing(22.5), Some('↗'));
        assert_eq!(arrow_for_bearing(337.5), Some('↑'));
        assert_eq!(arrow_for_bearing(337.4), Some('↖'));
    }

    #[test]
    fn test_wraparound_and_negative() {
        assert_eq!(arrow_for_bearing(360.0), Some('↑'));
        assert_eq!(arrow_for_bearing(405.0), Some('↗'));
        assert_eq!(arrow_for_bearing(-1.0), Some('↑'));
        assert_eq!(arrow_for_bearing(-90.0), Some('←'));
    }

    #[test]
    fn test_non_finite_yields_none() {
        assert_eq!(arrow_for_bearing(f64::NAN), None);
        assert_eq!(arrow_for_bearing(f64::INFINITY), None);
        assert_eq!(arrow_for_bearing(f64::NEG_INFINITY), None);
    }
}
