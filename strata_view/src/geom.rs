// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integer pixel geometry shared by the mask, world and screen spaces.

use kurbo::{Point, Rect};

/// A pixel coordinate in one of the integer spaces (mask, world or screen).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct IntPoint {
    /// Horizontal coordinate, growing to the right.
    pub x: i32,
    /// Vertical coordinate, growing downwards.
    pub y: i32,
}

impl IntPoint {
    /// The origin `(0, 0)`.
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Creates a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Converts a fractional pointer position into the pixel containing it.
    ///
    /// Coordinates are floored, so `(-0.5, 2.9)` lands on pixel `(-1, 2)`.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "pointer coordinates are far inside the i32 range"
    )]
    pub fn from_point_floor(pt: Point) -> Self {
        let pt = pt.floor();
        Self::new(pt.x as i32, pt.y as i32)
    }

    /// Converts this point into a kurbo point.
    #[must_use]
    pub fn to_point(self) -> Point {
        Point::new(f64::from(self.x), f64::from(self.y))
    }
}

impl From<(i32, i32)> for IntPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// A non-negative pixel extent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct IntSize {
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl IntSize {
    /// The empty size.
    pub const ZERO: Self = Self::new(0, 0);

    /// Creates a new size. Negative extents are clamped to zero.
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self {
            width: if width < 0 { 0 } else { width },
            height: if height < 0 { 0 } else { height },
        }
    }

    /// Returns `true` if either extent is zero.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Number of pixels covered by this size.
    #[must_use]
    pub const fn area(self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Scales both extents by an integer factor.
    #[must_use]
    pub const fn scale(self, factor: i32) -> Self {
        Self::new(self.width * factor, self.height * factor)
    }
}

impl From<(i32, i32)> for IntSize {
    fn from((width, height): (i32, i32)) -> Self {
        Self::new(width, height)
    }
}

/// An axis-aligned pixel rectangle, `x..x + width` by `y..y + height`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct IntRect {
    /// Left edge (inclusive).
    pub x: i32,
    /// Top edge (inclusive).
    pub y: i32,
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl IntRect {
    /// The empty rectangle at the origin.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Creates a rectangle from its origin and extent.
    ///
    /// Negative extents are clamped to zero.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width: if width < 0 { 0 } else { width },
            height: if height < 0 { 0 } else { height },
        }
    }

    /// Creates a rectangle from an origin and a size.
    #[must_use]
    pub const fn from_origin_size(origin: IntPoint, size: IntSize) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// Creates the rectangle spanning `x0..x1` by `y0..y1` (exclusive ends).
    #[must_use]
    pub const fn from_edges(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self::new(x0, y0, x1 - x0, y1 - y0)
    }

    /// Top-left corner.
    #[must_use]
    pub const fn origin(self) -> IntPoint {
        IntPoint::new(self.x, self.y)
    }

    /// Extent of the rectangle.
    #[must_use]
    pub const fn size(self) -> IntSize {
        IntSize::new(self.width, self.height)
    }

    /// Right edge (exclusive).
    #[must_use]
    pub const fn max_x(self) -> i32 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    #[must_use]
    pub const fn max_y(self) -> i32 {
        self.y + self.height
    }

    /// Returns `true` if the rectangle covers no pixels.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns `true` if `pt` lies inside the rectangle.
    #[must_use]
    pub const fn contains(self, pt: IntPoint) -> bool {
        pt.x >= self.x && pt.y >= self.y && pt.x < self.max_x() && pt.y < self.max_y()
    }

    /// Returns `true` if `other` lies entirely inside this rectangle.
    #[must_use]
    pub const fn contains_rect(self, other: Self) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.max_x() <= self.max_x()
            && other.max_y() <= self.max_y()
    }

    /// Intersection of two rectangles; empty if they do not overlap.
    #[must_use]
    pub fn intersect(self, other: Self) -> Self {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = self.max_x().min(other.max_x());
        let y1 = self.max_y().min(other.max_y());
        if x1 <= x0 || y1 <= y0 {
            return Self::new(x0, y0, 0, 0);
        }
        Self::from_edges(x0, y0, x1, y1)
    }

    /// Smallest rectangle containing both; an empty side is ignored.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        if self.is_empty() {
            return other;
        }
        if other.is_empty() {
            return self;
        }
        Self::from_edges(
            self.x.min(other.x),
            self.y.min(other.y),
            self.max_x().max(other.max_x()),
            self.max_y().max(other.max_y()),
        )
    }

    /// Converts this rectangle into a kurbo rectangle.
    #[must_use]
    pub fn to_rect(self) -> Rect {
        Rect::new(
            f64::from(self.x),
            f64::from(self.y),
            f64::from(self.max_x()),
            f64::from(self.max_y()),
        )
    }
}
