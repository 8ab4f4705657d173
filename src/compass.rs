//! Wind bearing to compass direction conversion

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the eight principal compass directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompassDirection {
    North,
    Northeast,
    East,
    Southeast,
    South,
    Southwest,
    West,
    Northwest,
}

impl CompassDirection {
    /// Clockwise from North, one entry per 45° sector
    const SECTORS: [CompassDirection; 8] = [
        CompassDirection::North,
        CompassDirection::Northeast,
        CompassDirection::East,
        CompassDirection::Southeast,
        CompassDirection::South,
        CompassDirection::Southwest,
        CompassDirection::West,
        CompassDirection::Northwest,
    ];

    /// Resolve a bearing in degrees clockwise from North.
    ///
    /// Sectors are half-open and centered on each direction, so North covers
    /// `[337.5, 360) ∪ [0, 22.5)` and Northeast starts at exactly 22.5°.
    /// Bearings outside `[0, 360)` are wrapped; NaN resolves to North.
    #[must_use]
    pub fn from_bearing(degrees: f64) -> Self {
        let wrapped = degrees.rem_euclid(360.0);
        // saturating cast maps NaN to 0
        let sector = ((wrapped + 22.5) / 45.0).floor() as usize % 8;
        Self::SECTORS[sector]
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            CompassDirection::North => "North",
            CompassDirection::Northeast => "Northeast",
            CompassDirection::East => "East",
            CompassDirection::Southeast => "Southeast",
            CompassDirection::South => "South",
            CompassDirection::Southwest => "Southwest",
            CompassDirection::West => "West",
            CompassDirection::Northwest => "Northwest",
        }
    }
}

impl fmt::Display for CompassDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, CompassDirection::North)]
    #[case(22.49, CompassDirection::North)]
    #[case(22.5, CompassDirection::Northeast)]
    #[case(67.49, CompassDirection::Northeast)]
    #[case(67.5, CompassDirection::East)]
    #[case(90.0, CompassDirection::East)]
    #[case(112.49, CompassDirection::East)]
    #[case(112.5, CompassDirection::Southeast)]
    #[case(157.5, CompassDirection::South)]
    #[case(180.0, CompassDirection::South)]
    #[case(202.5, CompassDirection::Southwest)]
    #[case(247.5, CompassDirection::West)]
    #[case(270.0, CompassDirection::West)]
    #[case(292.5, CompassDirection::Northwest)]
    #[case(337.49, CompassDirection::Northwest)]
    #[case(337.5, CompassDirection::North)]
    #[case(359.99, CompassDirection::North)]
    fn test_sector_boundaries(#[case] degrees: f64, #[case] expected: CompassDirection) {
        assert_eq!(CompassDirection::from_bearing(degrees), expected);
    }

    #[rstest]
    #[case(360.0, CompassDirection::North)]
    #[case(450.0, CompassDirection::East)]
    #[case(-90.0, CompassDirection::West)]
    #[case(-0.0, CompassDirection::North)]
    fn test_out_of_range_bearings_wrap(#[case] degrees: f64, #[case] expected: CompassDirection) {
        assert_eq!(CompassDirection::from_bearing(degrees), expected);
    }

    #[test]
    fn test_nan_is_north() {
        assert_eq!(CompassDirection::from_bearing(f64::NAN), CompassDirection::North);
    }

    #[test]
    fn test_every_whole_degree_hits_its_sector() {
        for degree in 0..360 {
            let direction = CompassDirection::from_bearing(f64::from(degree));
            let centre = CompassDirection::SECTORS
                .iter()
                .position(|d| *d == direction)
                .unwrap() as f64
                * 45.0;
            let distance = (f64::from(degree) - centre).rem_euclid(360.0);
            let distance = distance.min(360.0 - distance);
            assert!(distance <= 22.5, "{degree}° resolved to {direction}");
        }
    }

    #[test]
    fn test_serializes_as_name() {
        let json = serde_json::to_string(&CompassDirection::Southwest).unwrap();
        assert_eq!(json, "\"Southwest\"");
        assert_eq!(CompassDirection::East.to_string(), "East");
    }
}
