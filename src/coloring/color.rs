// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The three cell colors and their cyclic difference algebra.
//!
//! Colors are cyclically ordered White → Black → Gray → White. The signed
//! matrix is built from the *relative* difference between two colors along
//! this cycle, see [`rel_diff`].

use strum_macros::{EnumCount as EnumCountMacro, EnumIter};

/// Number of colors.
pub const NCOLORS: usize = <Color as strum::EnumCount>::COUNT;

/// A cell color.
///
/// The discriminants 1..=3 match the numeric encoding used by the color
/// algebra (White=1, Black=2, Gray=3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCountMacro, EnumIter)]
#[repr(u8)]
pub enum Color {
    White = 1,
    Black = 2,
    Gray = 3,
}

impl Color {
    /// Numeric value in 1..=3.
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Map a base-3 digit (0, 1 or 2) to a color.
    ///
    /// # Panics
    ///
    /// Panics if `digit >= 3`.
    pub fn from_digit(digit: u8) -> Self {
        match digit {
            0 => Color::White,
            1 => Color::Black,
            2 => Color::Gray,
            _ => panic!("color digit out of range: {}", digit),
        }
    }

    /// Lowercase wire name, as used by the serialization contract.
    pub fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
            Color::Gray => "gray",
        }
    }

    /// Parse a wire name. Unknown names yield `None` (the codec drops them).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "white" => Some(Color::White),
            "black" => Some(Color::Black),
            "gray" => Some(Color::Gray),
            _ => None,
        }
    }
}

/// Relative color difference along the cyclic order, a value in {0, 1, 2}.
///
/// `rel_diff(a, b) = ((b-1) - (a-1) + 3) mod 3`. Two properties follow:
/// `rel_diff(c, c) == 0`, and for `a != b`,
/// `rel_diff(a, b) + rel_diff(b, a) == 3`.
pub fn rel_diff(a: Color, b: Color) -> i64 {
    ((b.value() as i64 - a.value() as i64) + 3) % 3
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_rel_diff_zero_on_diagonal() {
        for c in Color::iter() {
            assert_eq!(rel_diff(c, c), 0);
        }
    }

    #[test]
    fn test_rel_diff_complementary() {
        for a in Color::iter() {
            for b in Color::iter() {
                if a != b {
                    assert_eq!(rel_diff(a, b) + rel_diff(b, a), 3);
                }
            }
        }
    }

    #[test]
    fn test_rel_diff_known_values() {
        assert_eq!(rel_diff(Color::White, Color::Black), 1);
        assert_eq!(rel_diff(Color::Black, Color::White), 2);
        assert_eq!(rel_diff(Color::Black, Color::Gray), 1);
        assert_eq!(rel_diff(Color::Gray, Color::White), 1);
        assert_eq!(rel_diff(Color::White, Color::Gray), 2);
    }

    #[test]
    fn test_from_digit_round_trip() {
        for d in 0..3u8 {
            assert_eq!(Color::from_digit(d).value(), d + 1);
        }
    }

    #[test]
    #[should_panic(expected = "color digit out of range")]
    fn test_from_digit_out_of_range() {
        Color::from_digit(3);
    }

    #[test]
    fn test_names() {
        for c in Color::iter() {
            assert_eq!(Color::from_name(c.name()), Some(c));
        }
        assert_eq!(Color::from_name("blue"), None);
        assert_eq!(Color::from_name("White"), None);
    }
}
