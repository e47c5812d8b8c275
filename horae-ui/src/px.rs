//! # Pixel geometry
//!
//! Positions, sizes and rectangles in logical pixels. Layout of the time
//! picker header and the dial works on fractional coordinates (a centered
//! fragment regularly lands on a half pixel), so every type here stores
//! `f32` components.
//!
//! The coordinate system has its origin at the top-left corner, x grows to
//! the right and y grows downwards.

use std::ops::{Add, Sub};

/// A 2D position in pixel space.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PxPosition {
    /// The x coordinate.
    pub x: f32,
    /// The y coordinate.
    pub y: f32,
}

impl PxPosition {
    /// The origin.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a new position.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns this position shifted by the given deltas.
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Euclidean distance between two positions.
    pub fn distance_to(self, other: Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Add for PxPosition {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for PxPosition {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<[f32; 2]> for PxPosition {
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<PxPosition> for [f32; 2] {
    fn from(pos: PxPosition) -> Self {
        [pos.x, pos.y]
    }
}

/// A 2D size in pixel space.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PxSize {
    /// The width.
    pub width: f32,
    /// The height.
    pub height: f32,
}

impl PxSize {
    /// Creates a new size.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// The center point of a rectangle of this size anchored at the origin.
    pub fn center(self) -> PxPosition {
        PxPosition::new(self.width / 2.0, self.height / 2.0)
    }
}

impl From<[f32; 2]> for PxSize {
    fn from([width, height]: [f32; 2]) -> Self {
        Self::new(width, height)
    }
}

/// An axis aligned rectangle in pixel space.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PxRect {
    /// The x coordinate of the left edge.
    pub x: f32,
    /// The y coordinate of the top edge.
    pub y: f32,
    /// The width.
    pub width: f32,
    /// The height.
    pub height: f32,
}

impl PxRect {
    /// Creates a new rectangle.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle from its top-left position and size.
    pub fn from_position_size(position: PxPosition, size: PxSize) -> Self {
        Self::new(position.x, position.y, size.width, size.height)
    }

    /// Top-left corner.
    pub fn position(&self) -> PxPosition {
        PxPosition::new(self.x, self.y)
    }

    /// Width and height.
    pub fn size(&self) -> PxSize {
        PxSize::new(self.width, self.height)
    }

    /// The x coordinate of the right edge.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// The y coordinate of the bottom edge.
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// The center point.
    pub fn center(&self) -> PxPosition {
        PxPosition::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Returns true when the point lies inside the rectangle.
    ///
    /// The left and top edges are inclusive, the right and bottom edges are
    /// exclusive.
    pub fn contains(&self, point: PxPosition) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Grows the rectangle by the given amounts on every side.
    pub fn inflate(&self, dx: f32, dy: f32) -> Self {
        Self::new(
            self.x - dx,
            self.y - dy,
            self.width + dx * 2.0,
            self.height + dy * 2.0,
        )
    }

    /// Clamps a point onto the rectangle.
    pub fn clamp_point(&self, point: PxPosition) -> PxPosition {
        PxPosition::new(
            point.x.clamp(self.x, self.right()),
            point.y.clamp(self.y, self.bottom()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_arithmetic() {
        let a = PxPosition::new(10.0, 20.0);
        let b = PxPosition::new(5.0, 15.0);
        assert_eq!(a + b, PxPosition::new(15.0, 35.0));
        assert_eq!(a - b, PxPosition::new(5.0, 5.0));
        assert_eq!(a.offset(1.0, -1.0), PxPosition::new(11.0, 19.0));
    }

    #[test]
    fn test_distance() {
        let a = PxPosition::new(0.0, 0.0);
        let b = PxPosition::new(3.0, 4.0);
        assert_eq!(a.distance_to(b), 5.0);
        assert_eq!(b.distance_to(a), 5.0);
    }

    #[test]
    fn test_rect_contains_edges() {
        let rect = PxRect::new(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains(PxPosition::new(0.0, 0.0)));
        assert!(rect.contains(PxPosition::new(9.9, 9.9)));
        assert!(!rect.contains(PxPosition::new(10.0, 5.0)));
        assert!(!rect.contains(PxPosition::new(5.0, -0.1)));
    }

    #[test]
    fn test_rect_inflate_and_clamp() {
        let rect = PxRect::new(10.0, 10.0, 20.0, 10.0);
        let grown = rect.inflate(5.0, 2.0);
        assert_eq!(grown, PxRect::new(5.0, 8.0, 30.0, 14.0));
        assert_eq!(
            rect.clamp_point(PxPosition::new(0.0, 50.0)),
            PxPosition::new(10.0, 20.0)
        );
    }
}
