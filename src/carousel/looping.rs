//! Tripled rendering and boundary correction.
//!
//! The list is rendered as three back-to-back copies. Whenever the view drifts
//! within one item of either absolute end, the offset is moved to the same
//! position in the middle copy. The content under the viewer is identical, so
//! the jump cannot be seen.

use super::geometry::{Geometry, Position};

/// Number of copies of the item list that get rendered
pub const SECTION_COUNT: usize = 3;

/// The middle copy, where the view is kept
pub const HOME_SECTION: i64 = 1;

const LEADING_SECTION: i64 = 0;
const TRAILING_SECTION: i64 = SECTION_COUNT as i64 - 1;

/// Which end of the tripled list triggered a correction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    Leading,
    Trailing,
}

/// An instantaneous relocation into the middle section
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Correction {
    pub boundary: Boundary,
    pub target: f64,
}

/// Concatenate three copies of `items`.
pub fn triple<T: Clone>(items: &[T]) -> Vec<T> {
    let mut looped = Vec::with_capacity(items.len() * SECTION_COUNT);
    for _ in 0..SECTION_COUNT {
        looped.extend_from_slice(items);
    }
    looped
}

/// Decide whether `position` sits in a correction zone.
///
/// Only one correction is produced per call. With very few items the two
/// zones can span most of a section, so the leading check wins.
pub fn correction_for(geometry: &Geometry, position: &Position) -> Option<Correction> {
    let pitch = geometry.item_pitch();
    let width = geometry.section_width();

    let boundary = if position.section == LEADING_SECTION && position.position_in_section < pitch {
        Boundary::Leading
    } else if position.section == TRAILING_SECTION
        && position.position_in_section > width - pitch
    {
        Boundary::Trailing
    } else {
        return None;
    };

    Some(Correction {
        boundary,
        target: geometry.home_offset() + position.position_in_section,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five() -> Geometry {
        Geometry::new(5, 280.0, 12.0).unwrap()
    }

    fn correct(g: &Geometry, offset: f64) -> Option<Correction> {
        correction_for(g, &g.locate(offset).unwrap())
    }

    #[test]
    fn test_triple_concatenates_three_copies() {
        let looped = triple(&["a", "b"]);
        assert_eq!(looped, vec!["a", "b", "a", "b", "a", "b"]);
        assert!(triple::<u8>(&[]).is_empty());
    }

    #[test]
    fn test_leading_zone_corrects() {
        let c = correct(&five(), 200.0).unwrap();
        assert_eq!(c.boundary, Boundary::Leading);
        assert_eq!(c.target, 1660.0);
    }

    #[test]
    fn test_trailing_zone_corrects() {
        // section 2 starts at 2920; last pitch of it starts at 2920 + 1168
        let c = correct(&five(), 2920.0 + 1200.0).unwrap();
        assert_eq!(c.boundary, Boundary::Trailing);
        assert_eq!(c.target, 1460.0 + 1200.0);
    }

    #[test]
    fn test_interior_offsets_are_left_alone() {
        let g = five();
        assert!(correct(&g, 292.0).is_none());
        assert!(correct(&g, 1752.0).is_none());
        assert!(correct(&g, 2920.0 + 1168.0).is_none());
    }

    #[test]
    fn test_single_item_zones_never_double_correct() {
        let g = Geometry::new(1, 100.0, 0.0).unwrap();
        let c = correct(&g, 50.0).unwrap();
        assert_eq!(c.boundary, Boundary::Leading);
        assert_eq!(c.target, 150.0);
        // The home section is never corrected, whatever its size
        assert!(correct(&g, 150.0).is_none());
    }
}
