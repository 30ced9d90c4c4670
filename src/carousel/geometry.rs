//! Carousel geometry: item pitch, section width and offset decomposition.

use crate::error::{CarouselError, CarouselResult};

use super::looping::HOME_SECTION;

/// Derived layout scalars for one item list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    item_count: usize,
    item_pitch: f64,
    section_width: f64,
}

/// Where an offset falls within the tripled list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    /// Which copy of the list (0 leading, 1 middle, 2 trailing)
    pub section: i64,
    /// Distance from the start of that copy, in `[0, section_width)`
    pub position_in_section: f64,
    /// Nearest item to the offset, in `[0, item_count)`
    pub index: usize,
}

impl Geometry {
    /// Compute geometry, rejecting configurations that would make the
    /// offset math produce infinite or NaN corrections.
    pub fn new(item_count: usize, card_width: f64, gap: f64) -> CarouselResult<Self> {
        if !card_width.is_finite() || card_width <= 0.0 {
            return Err(CarouselError::InvalidCardWidth(card_width));
        }
        if !gap.is_finite() || gap < 0.0 {
            return Err(CarouselError::InvalidGap(gap));
        }
        let item_pitch = card_width + gap;
        if !item_pitch.is_finite() || item_pitch <= 0.0 {
            return Err(CarouselError::DegenerateGeometry(item_pitch));
        }

        Ok(Self {
            item_count,
            item_pitch,
            section_width: item_pitch * item_count as f64,
        })
    }

    /// Same pitch over a different number of items. The pitch was validated
    /// by [`Geometry::new`], so this cannot fail.
    pub fn with_item_count(&self, item_count: usize) -> Self {
        Self {
            item_count,
            item_pitch: self.item_pitch,
            section_width: self.item_pitch * item_count as f64,
        }
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn item_pitch(&self) -> f64 {
        self.item_pitch
    }

    pub fn section_width(&self) -> f64 {
        self.section_width
    }

    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    /// Offset of the first item in the middle section.
    pub fn home_offset(&self) -> f64 {
        self.section_width * HOME_SECTION as f64
    }

    /// Offset of `index` re-centred into the middle section.
    pub fn offset_for(&self, index: usize) -> f64 {
        self.home_offset() + index as f64 * self.item_pitch
    }

    /// Split a raw offset into section, position and nearest index.
    ///
    /// Returns `None` for an empty list, where there is nothing to divide by.
    pub fn locate(&self, offset: f64) -> Option<Position> {
        if self.is_empty() || !offset.is_finite() {
            return None;
        }

        let mut section = (offset / self.section_width).floor() as i64;
        let mut position_in_section = offset.rem_euclid(self.section_width);
        // rem_euclid can round up to the divisor for tiny negative inputs
        if position_in_section >= self.section_width {
            position_in_section -= self.section_width;
            section += 1;
        }

        let slot = (position_in_section / self.item_pitch).round() as usize;
        Some(Position {
            section,
            position_in_section,
            index: slot % self.item_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five() -> Geometry {
        Geometry::new(5, 280.0, 12.0).unwrap()
    }

    #[test]
    fn test_pitch_and_section_width() {
        let g = five();
        assert_eq!(g.item_pitch(), 292.0);
        assert_eq!(g.section_width(), 1460.0);
        assert_eq!(g.home_offset(), 1460.0);
        assert_eq!(g.offset_for(1), 1752.0);
    }

    #[test]
    fn test_with_item_count_keeps_pitch() {
        let g = five().with_item_count(2);
        assert_eq!(g.item_count(), 2);
        assert_eq!(g.item_pitch(), 292.0);
        assert_eq!(g.section_width(), 584.0);
        assert_eq!(g.locate(584.0 + 300.0).unwrap().index, 1);
        assert!(five().with_item_count(0).is_empty());
    }

    #[test]
    fn test_recompute_is_idempotent() {
        assert_eq!(five(), five());
    }

    #[test]
    fn test_empty_list_has_zero_width() {
        let g = Geometry::new(0, 280.0, 12.0).unwrap();
        assert!(g.is_empty());
        assert_eq!(g.section_width(), 0.0);
        assert!(g.locate(100.0).is_none());
    }

    #[test]
    fn test_rejects_degenerate_config() {
        assert_eq!(
            Geometry::new(3, 0.0, 12.0),
            Err(CarouselError::InvalidCardWidth(0.0))
        );
        assert_eq!(
            Geometry::new(3, 280.0, -1.0),
            Err(CarouselError::InvalidGap(-1.0))
        );
        assert!(Geometry::new(3, f64::NAN, 0.0).is_err());
        assert!(Geometry::new(3, f64::MAX, f64::MAX).is_err());
    }

    #[test]
    fn test_locate_middle_section() {
        let pos = five().locate(1752.0).unwrap();
        assert_eq!(pos.section, 1);
        assert_eq!(pos.position_in_section, 292.0);
        assert_eq!(pos.index, 1);
    }

    #[test]
    fn test_locate_rounds_to_nearest_item() {
        let g = five();
        assert_eq!(g.locate(1460.0 + 140.0).unwrap().index, 0);
        assert_eq!(g.locate(1460.0 + 150.0).unwrap().index, 1);
    }

    #[test]
    fn test_locate_wraps_last_half_item() {
        // Past the midpoint of the last item the nearest card is item 0 of the next copy
        let pos = five().locate(1460.0 + 4.0 * 292.0 + 200.0).unwrap();
        assert_eq!(pos.section, 1);
        assert_eq!(pos.index, 0);
    }

    #[test]
    fn test_locate_negative_offset() {
        let pos = five().locate(-10.0).unwrap();
        assert_eq!(pos.section, -1);
        assert_eq!(pos.position_in_section, 1450.0);
    }
}
