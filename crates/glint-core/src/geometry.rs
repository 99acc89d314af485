//! Geometric primitives for bubble-field layout.
//!
//! This module provides the types the layout engine positions items with:
//!
//! - [`Point`] - A 2D coordinate in field space
//! - [`Size`] - Width and height dimensions
//! - [`Field`] - The bounded rectangle items are laid out within, minus a
//!   uniform edge margin
//!
//! # Coordinate System
//!
//! Glint uses a coordinate system consistent with SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! Origin at the top-left corner, X increasing rightward, Y increasing
//! downward. Item positions are always the *center* of the item's circle.

use log::{debug, warn};
use thiserror::Error;

/// A 2D point representing an item center in field coordinate space.
///
/// # Examples
///
/// ```
/// # use glint_core::geometry::Point;
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(3.0, 4.0);
/// assert_eq!(a.distance(b), 5.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Returns a new point displaced by the given deltas
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Euclidean distance between this point and another.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glint_core::geometry::Point;
    /// let origin = Point::new(0.0, 0.0);
    /// assert_eq!(origin.distance(Point::new(0.0, 7.0)), 7.0);
    /// ```
    pub fn distance(self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Clamps each coordinate into the inclusive range given by `min` and `max`.
    ///
    /// Both bounds are taken per axis; callers guarantee `min <= max` on
    /// each axis.
    pub fn clamp(self, min: Point, max: Point) -> Self {
        Self {
            x: self.x.clamp(min.x, max.x),
            y: self.y.clamp(min.y, max.y),
        }
    }

    /// Checks whether both coordinates are finite (not NaN or infinity)
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Represents the dimensions of a rectangle with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns the smaller of width and height
    pub fn min_side(self) -> f32 {
        self.width.min(self.height)
    }

    /// Returns the area of the rectangle
    pub fn area(self) -> f32 {
        self.width * self.height
    }
}

/// Errors raised when constructing a [`Field`] from invalid dimensions.
#[derive(Debug, Error, PartialEq)]
pub enum FieldError {
    #[error("field dimensions must be positive and finite, got {width}x{height}")]
    InvalidDimensions { width: f32, height: f32 },

    #[error("field margin must be non-negative and finite, got {0}")]
    InvalidMargin(f32),

    #[error("margin {margin} leaves no interior in a {width}x{height} field")]
    EmptyInterior {
        width: f32,
        height: f32,
        margin: f32,
    },
}

/// The bounded rectangular area items are laid out within.
///
/// A field is a rectangle plus a uniform edge margin. Item centers must stay
/// inside the margin-inset interior, further inset by the item's own radius,
/// so the full circle remains visible.
///
/// Construction validates the geometry up front: a zero-area field or a
/// margin that swallows the interior is a [`FieldError`], which keeps every
/// downstream coordinate finite.
///
/// # Examples
///
/// ```
/// # use glint_core::geometry::{Field, Point};
/// let field = Field::new(800.0, 600.0, 20.0).unwrap();
///
/// // Valid center range for a 100px-diameter item
/// let (min, max) = field.center_span(100.0).unwrap();
/// assert_eq!(min, Point::new(70.0, 70.0));
/// assert_eq!(max, Point::new(730.0, 530.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    size: Size,
    margin: f32,
}

impl Field {
    /// Creates a new field with the given dimensions and edge margin.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError`] if the dimensions are not positive and finite,
    /// the margin is negative or non-finite, or the margin leaves no
    /// interior area.
    pub fn new(width: f32, height: f32, margin: f32) -> Result<Self, FieldError> {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            debug!(width = width, height = height; "Rejected field dimensions");
            return Err(FieldError::InvalidDimensions { width, height });
        }
        if !margin.is_finite() || margin < 0.0 {
            debug!(margin = margin; "Rejected field margin");
            return Err(FieldError::InvalidMargin(margin));
        }
        if 2.0 * margin >= width.min(height) {
            debug!(width = width, height = height, margin = margin; "Margin leaves no interior");
            return Err(FieldError::EmptyInterior {
                width,
                height,
                margin,
            });
        }
        Ok(Self {
            size: Size::new(width, height),
            margin,
        })
    }

    /// Returns the field width
    pub fn width(self) -> f32 {
        self.size.width()
    }

    /// Returns the field height
    pub fn height(self) -> f32 {
        self.size.height()
    }

    /// Returns the edge margin
    pub fn margin(self) -> f32 {
        self.margin
    }

    /// Returns the overall field size
    pub fn size(self) -> Size {
        self.size
    }

    /// Returns the area of the margin-inset interior
    pub fn interior_area(self) -> f32 {
        Size::new(
            self.width() - 2.0 * self.margin,
            self.height() - 2.0 * self.margin,
        )
        .area()
    }

    /// Checks whether an item of the given diameter fits inside the interior
    pub fn fits(self, diameter: f32) -> bool {
        diameter.is_finite()
            && diameter > 0.0
            && diameter <= self.size.min_side() - 2.0 * self.margin
    }

    /// The inclusive range of valid center coordinates for an item of the
    /// given diameter, as `(min, max)` corner points.
    ///
    /// Returns `None` if the item cannot fit inside the field interior.
    pub fn center_span(self, diameter: f32) -> Option<(Point, Point)> {
        if !self.fits(diameter) {
            return None;
        }
        let inset = self.margin + diameter / 2.0;
        let min = Point::new(inset, inset);
        let max = Point::new(self.width() - inset, self.height() - inset);
        Some((min, max))
    }

    /// The deterministic fallback position for an item that could not be
    /// placed: the field center.
    pub fn center(self) -> Point {
        Point::new(self.width() / 2.0, self.height() / 2.0)
    }

    /// Clamps a candidate center for an item of the given diameter back into
    /// its valid span.
    ///
    /// An item too large for the interior is pinned to the field center, the
    /// same fallback used when placement gives up.
    pub fn clamp_center(self, point: Point, diameter: f32) -> Point {
        match self.center_span(diameter) {
            Some((min, max)) => point.clamp(min, max),
            None => {
                warn!(diameter = diameter; "Oversized item pinned to field center");
                self.center()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_distance() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(4.0, 6.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(a.distance(a), 0.0);
    }

    #[test]
    fn test_point_offset() {
        let p = Point::new(10.0, 20.0).offset(-3.0, 5.0);
        assert_eq!(p.x(), 7.0);
        assert_eq!(p.y(), 25.0);
    }

    #[test]
    fn test_point_clamp() {
        let min = Point::new(0.0, 0.0);
        let max = Point::new(10.0, 10.0);

        let inside = Point::new(5.0, 5.0).clamp(min, max);
        assert_eq!(inside, Point::new(5.0, 5.0));

        let outside = Point::new(-2.0, 15.0).clamp(min, max);
        assert_eq!(outside, Point::new(0.0, 10.0));
    }

    #[test]
    fn test_point_is_finite() {
        assert!(Point::new(1.0, 2.0).is_finite());
        assert!(!Point::new(f32::NAN, 0.0).is_finite());
        assert!(!Point::new(0.0, f32::INFINITY).is_finite());
    }

    #[test]
    fn test_size_accessors() {
        let size = Size::new(800.0, 600.0);
        assert_eq!(size.width(), 800.0);
        assert_eq!(size.height(), 600.0);
        assert_eq!(size.min_side(), 600.0);
        assert_eq!(size.area(), 480_000.0);
    }

    #[test]
    fn test_field_new_valid() {
        let field = Field::new(800.0, 600.0, 20.0).unwrap();
        assert_eq!(field.width(), 800.0);
        assert_eq!(field.height(), 600.0);
        assert_eq!(field.margin(), 20.0);
        assert_eq!(field.interior_area(), 760.0 * 560.0);
    }

    #[test]
    fn test_field_rejects_degenerate_dimensions() {
        assert_eq!(
            Field::new(0.0, 600.0, 0.0),
            Err(FieldError::InvalidDimensions {
                width: 0.0,
                height: 600.0
            })
        );
        assert!(Field::new(-100.0, 600.0, 0.0).is_err());
        assert!(Field::new(f32::NAN, 600.0, 0.0).is_err());
        assert!(Field::new(800.0, f32::INFINITY, 0.0).is_err());
    }

    #[test]
    fn test_field_rejects_bad_margin() {
        assert_eq!(
            Field::new(800.0, 600.0, -1.0),
            Err(FieldError::InvalidMargin(-1.0))
        );
        assert!(Field::new(800.0, 600.0, f32::NAN).is_err());
        // Margin swallowing the entire interior
        assert!(matches!(
            Field::new(800.0, 600.0, 300.0),
            Err(FieldError::EmptyInterior { .. })
        ));
    }

    #[test]
    fn test_center_span() {
        let field = Field::new(800.0, 600.0, 20.0).unwrap();
        let (min, max) = field.center_span(100.0).unwrap();
        assert_eq!(min, Point::new(70.0, 70.0));
        assert_eq!(max, Point::new(730.0, 530.0));
    }

    #[test]
    fn test_center_span_oversized_item() {
        let field = Field::new(200.0, 200.0, 20.0).unwrap();
        // Interior is 160x160, a 161px item cannot fit
        assert!(field.center_span(161.0).is_none());
        assert!(!field.fits(161.0));
        assert!(field.fits(160.0));
    }

    #[test]
    fn test_center_span_rejects_nonpositive_diameter() {
        let field = Field::new(200.0, 200.0, 0.0).unwrap();
        assert!(field.center_span(0.0).is_none());
        assert!(field.center_span(-5.0).is_none());
        assert!(field.center_span(f32::NAN).is_none());
    }

    #[test]
    fn test_clamp_center_keeps_item_inside() {
        let field = Field::new(800.0, 600.0, 20.0).unwrap();
        let clamped = field.clamp_center(Point::new(-50.0, 1000.0), 100.0);
        assert_eq!(clamped, Point::new(70.0, 530.0));
    }

    #[test]
    fn test_clamp_center_oversized_falls_back_to_center() {
        let field = Field::new(200.0, 100.0, 10.0).unwrap();
        let clamped = field.clamp_center(Point::new(0.0, 0.0), 500.0);
        assert_eq!(clamped, field.center());
    }
}
