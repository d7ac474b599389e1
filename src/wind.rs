/*
 *  wind.rs
 *
 *  WxPanel - weather at a glance
 *  (c) 2020-26 Stuart Hunter
 *
 *  Wind direction helpers: 8-way arrows and 16-point compass labels
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *  Public License.
 *
 */

//! Meteorological degrees give the direction the wind blows *from*; the arrow
//! points the way it is travelling, so 0° (a northerly) draws as a down arrow.

/// One of eight arrow buckets, 45° apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindArrow {
    Down,
    DownLeft,
    Left,
    UpLeft,
    Up,
    UpRight,
    Right,
    DownRight,
}

const ARROWS: [WindArrow; 8] = [
    WindArrow::Down,
    WindArrow::DownLeft,
    WindArrow::Left,
    WindArrow::UpLeft,
    WindArrow::Up,
    WindArrow::UpRight,
    WindArrow::Right,
    WindArrow::DownRight,
];

const COMPASS_POINTS: [&str; 16] = [
    "N",  "NNE", "NE", "ENE", "E",  "ESE",
    "SE", "SSE", "S",  "SSW", "SW", "WSW",
    "W",  "WNW", "NW", "NNW"];

/// Reduce any finite angle into [0, 360); NaN and infinities count as 0.
fn normalize(degrees: f64) -> f64 {
    if degrees.is_finite() { degrees.rem_euclid(360.0) } else { 0.0 }
}

impl WindArrow {
    /// Bucket is `round(degrees / 45) mod 8`, halves rounding up.
    pub fn from_degrees(degrees: f64) -> Self {
        let bucket = ((normalize(degrees) / 45.0) + 0.5).floor() as usize % 8;
        ARROWS[bucket]
    }

    pub fn as_char(&self) -> char {
        match self {
            WindArrow::Down => '↓',
            WindArrow::DownLeft => '↙',
            WindArrow::Left => '←',
            WindArrow::UpLeft => '↖',
            WindArrow::Up => '↑',
            WindArrow::UpRight => '↗',
            WindArrow::Right => '→',
            WindArrow::DownRight => '↘',
        }
    }

    /// Unit step in screen space (y grows downward).
    pub fn vector(&self) -> (i32, i32) {
        match self {
            WindArrow::Down => (0, 1),
            WindArrow::DownLeft => (-1, 1),
            WindArrow::Left => (-1, 0),
            WindArrow::UpLeft => (-1, -1),
            WindArrow::Up => (0, -1),
            WindArrow::UpRight => (1, -1),
            WindArrow::Right => (1, 0),
            WindArrow::DownRight => (1, 1),
        }
    }
}

/// 16-point compass label for the direction the wind comes from.
pub fn compass_point(degrees: f64) -> &'static str {
    let d16 = ((normalize(degrees) / 22.5) + 0.5) as usize % 16;
    COMPASS_POINTS[d16]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cardinal_buckets() {
        assert_eq!(WindArrow::from_degrees(0.0), WindArrow::Down);
        assert_eq!(WindArrow::from_degrees(90.0), WindArrow::Left);
        assert_eq!(WindArrow::from_degrees(180.0), WindArrow::Up);
        assert_eq!(WindArrow::from_degrees(270.0), WindArrow::Right);
    }

    #[test]
    fn test_full_turn_wraps() {
        assert_eq!(WindArrow::from_degrees(360.0), WindArrow::from_degrees(0.0));
        assert_eq!(WindArrow::from_degrees(720.0 + 45.0), WindArrow::DownLeft);
        assert_eq!(WindArrow::from_degrees(-45.0), WindArrow::DownRight);
        // 350 rounds up into the first bucket
        assert_eq!(WindArrow::from_degrees(350.0), WindArrow::Down);
    }

    #[test]
    fn test_neighbouring_angles_share_bucket() {
        assert_eq!(WindArrow::from_degrees(190.0), WindArrow::from_degrees(200.0));
        assert_eq!(WindArrow::from_degrees(190.0), WindArrow::Up);
    }

    #[test]
    fn test_half_bucket_rounds_up() {
        assert_eq!(WindArrow::from_degrees(22.5), WindArrow::DownLeft);
        assert_eq!(WindArrow::from_degrees(22.4), WindArrow::Down);
    }

    #[test]
    fn test_non_finite_degrees() {
        assert_eq!(WindArrow::from_degrees(f64::NAN), WindArrow::Down);
        assert_eq!(compass_point(f64::INFINITY), "N");
    }

    #[test]
    fn test_arrow_chars_and_vectors_agree() {
        for arrow in ARROWS {
            let (dx, dy) = arrow.vector();
            assert!(dx != 0 || dy != 0);
            assert!(!arrow.as_char().is_ascii());
        }
        assert_eq!(WindArrow::Up.vector(), (0, -1));
        assert_eq!(WindArrow::from_degrees(180.0).as_char(), '↑');
    }

    #[test]
    fn test_compass_points() {
        assert_eq!(compass_point(0.0), "N");
        assert_eq!(compass_point(180.0), "S");
        assert_eq!(compass_point(202.5), "SSW");
        assert_eq!(compass_point(355.0), "N");
        assert_eq!(compass_point(-90.0), "W");
    }
}
