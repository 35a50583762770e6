#![forbid(unsafe_code)]

//! Geometric primitives for the measure/render negotiation.

use std::ops::{Add, Div};

/// How narrow and how wide a widget can render at a proposed width.
///
/// `min` is the narrowest width the widget can use without unwanted
/// overflow or loss; `max` is the width it would use if given unlimited
/// space. Both are in terminal cells.
///
/// # Invariants
///
/// `min <= max`. Construction panics otherwise, since ranges are only
/// ever built from internal measurements.
///
/// # Example
///
/// ```
/// use tabula_core::WidthRange;
///
/// let words = WidthRange::new(5, 12);
/// let padded = words + 2;
/// assert_eq!(padded, WidthRange::new(7, 14));
///
/// // A cell spanning two columns contributes half to each.
/// assert_eq!(padded / 2, WidthRange::new(3, 7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WidthRange {
    /// Minimum width without truncation.
    pub min: usize,
    /// Width used when unconstrained.
    pub max: usize,
}

impl WidthRange {
    /// The range of a widget that draws nothing.
    pub const ZERO: Self = Self { min: 0, max: 0 };

    /// Create a new range.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    #[inline]
    #[must_use]
    pub const fn new(min: usize, max: usize) -> Self {
        assert!(min <= max, "range min cannot be larger than max");
        Self { min, max }
    }

    /// A range where `min == max == width`.
    #[inline]
    #[must_use]
    pub const fn exact(width: usize) -> Self {
        Self {
            min: width,
            max: width,
        }
    }

    /// Widen `min` up to `max`, so the widget always takes its full width.
    #[inline]
    #[must_use]
    pub const fn pinned_to_max(self) -> Self {
        Self {
            min: self.max,
            max: self.max,
        }
    }

    /// The componentwise maximum of two ranges.
    ///
    /// This is the range of a vertical stack: the stack needs as much room as
    /// its most demanding child.
    #[inline]
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            min: self.min.max(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Fold an iterator of optional ranges with [`union`](Self::union) and add
    /// `padding` to the result.
    ///
    /// `None` entries are skipped; an empty iterator yields
    /// `WidthRange::exact(padding)`.
    #[must_use]
    pub fn max_of<I>(ranges: I, padding: usize) -> Self
    where
        I: IntoIterator<Item = Option<Self>>,
    {
        ranges
            .into_iter()
            .flatten()
            .fold(Self::ZERO, Self::union)
            + padding
    }

    /// Check whether `width` lies inside the range.
    #[inline]
    #[must_use]
    pub const fn contains(&self, width: usize) -> bool {
        width >= self.min && width <= self.max
    }
}

impl Add<usize> for WidthRange {
    type Output = Self;

    #[inline]
    fn add(self, extra: usize) -> Self {
        Self {
            min: self.min.saturating_add(extra),
            max: self.max.saturating_add(extra),
        }
    }
}

impl Add for WidthRange {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            min: self.min.saturating_add(other.min),
            max: self.max.saturating_add(other.max),
        }
    }
}

impl Div<usize> for WidthRange {
    type Output = Self;

    /// Integer division of both bounds. Dividing by zero yields [`WidthRange::ZERO`].
    #[inline]
    fn div(self, divisor: usize) -> Self {
        match divisor {
            0 => Self::ZERO,
            1 => self,
            d => Self {
                min: self.min / d,
                max: self.max / d,
            },
        }
    }
}

impl std::iter::Sum for WidthRange {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

/// Padding or margin on the four sides of a box, in cells and lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Sides {
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
    pub left: usize,
}

impl Sides {
    /// No padding.
    pub const ZERO: Self = Self::all(0);

    /// Equal values on every side.
    pub const fn all(val: usize) -> Self {
        Self::new(val, val, val, val)
    }

    /// Left and right only.
    pub const fn horizontal(val: usize) -> Self {
        Self::new(0, val, 0, val)
    }

    /// Top and bottom only.
    pub const fn vertical(val: usize) -> Self {
        Self::new(val, 0, val, 0)
    }

    /// Same vertical value on top and bottom, same horizontal value left and right.
    pub const fn symmetric(vertical: usize, horizontal: usize) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    /// Explicit values, in CSS order.
    pub const fn new(top: usize, right: usize, bottom: usize, left: usize) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Sum of left and right.
    #[inline]
    pub const fn horizontal_sum(&self) -> usize {
        self.left.saturating_add(self.right)
    }

    /// Sum of top and bottom.
    #[inline]
    pub const fn vertical_sum(&self) -> usize {
        self.top.saturating_add(self.bottom)
    }

    /// True when every side is zero.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.top == 0 && self.right == 0 && self.bottom == 0 && self.left == 0
    }
}

impl Add for Sides {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            top: self.top.saturating_add(other.top),
            right: self.right.saturating_add(other.right),
            bottom: self.bottom.saturating_add(other.bottom),
            left: self.left.saturating_add(other.left),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ====================================================================
    // WidthRange
    // ====================================================================

    #[test]
    fn zero_range() {
        assert_eq!(WidthRange::ZERO, WidthRange::new(0, 0));
        assert_eq!(WidthRange::default(), WidthRange::ZERO);
    }

    #[test]
    #[should_panic(expected = "range min cannot be larger than max")]
    fn inverted_range_panics() {
        let _ = WidthRange::new(3, 2);
    }

    #[test]
    fn add_scalar_shifts_both_bounds() {
        assert_eq!(WidthRange::new(1, 4) + 3, WidthRange::new(4, 7));
        assert_eq!(WidthRange::new(1, 4) + 0, WidthRange::new(1, 4));
    }

    #[test]
    fn add_range_sums_bounds() {
        let sum = WidthRange::new(1, 4) + WidthRange::new(2, 10);
        assert_eq!(sum, WidthRange::new(3, 14));
    }

    #[test]
    fn div_floors_both_bounds() {
        assert_eq!(WidthRange::new(5, 9) / 2, WidthRange::new(2, 4));
        assert_eq!(WidthRange::new(5, 9) / 1, WidthRange::new(5, 9));
        assert_eq!(WidthRange::new(5, 9) / 0, WidthRange::ZERO);
    }

    #[test]
    fn union_takes_componentwise_max() {
        let u = WidthRange::new(2, 3).union(WidthRange::new(1, 8));
        assert_eq!(u, WidthRange::new(2, 8));
    }

    #[test]
    fn max_of_skips_missing_entries() {
        let ranges = [Some(WidthRange::new(1, 5)), None, Some(WidthRange::new(3, 4))];
        assert_eq!(WidthRange::max_of(ranges, 2), WidthRange::new(5, 7));
        assert_eq!(WidthRange::max_of([None], 2), WidthRange::exact(2));
    }

    #[test]
    fn pinned_to_max() {
        assert_eq!(WidthRange::new(2, 9).pinned_to_max(), WidthRange::exact(9));
    }

    #[test]
    fn sum_of_ranges() {
        let total: WidthRange = [WidthRange::new(1, 2), WidthRange::new(3, 4)]
            .into_iter()
            .sum();
        assert_eq!(total, WidthRange::new(4, 6));
    }

    proptest! {
        #[test]
        fn operations_preserve_min_le_max(
            a in 0usize..1000, b in 0usize..1000,
            c in 0usize..1000, d in 0usize..1000,
            k in 0usize..50,
        ) {
            let r1 = WidthRange::new(a.min(b), a.max(b));
            let r2 = WidthRange::new(c.min(d), c.max(d));
            for r in [r1 + r2, r1 + k, r1 / k, r1.union(r2), r1.pinned_to_max()] {
                prop_assert!(r.min <= r.max);
            }
        }
    }

    // ====================================================================
    // Sides
    // ====================================================================

    #[test]
    fn sides_constructors() {
        assert_eq!(Sides::all(2), Sides::new(2, 2, 2, 2));
        assert_eq!(Sides::horizontal(1), Sides::new(0, 1, 0, 1));
        assert_eq!(Sides::vertical(3), Sides::new(3, 0, 3, 0));
        assert_eq!(Sides::symmetric(1, 2), Sides::new(1, 2, 1, 2));
    }

    #[test]
    fn sides_sums_and_emptiness() {
        let s = Sides::new(1, 2, 3, 4);
        assert_eq!(s.horizontal_sum(), 6);
        assert_eq!(s.vertical_sum(), 4);
        assert!(!s.is_empty());
        assert!(Sides::ZERO.is_empty());
    }

    #[test]
    fn sides_add_componentwise() {
        assert_eq!(
            Sides::new(1, 2, 3, 4) + Sides::all(1),
            Sides::new(2, 3, 4, 5)
        );
    }
}
