//! Geometry helpers shared by the primitive and composite drawing layers.
//!
//! This module provides:
//! - Pixel-space [`Point`] and [`Rect`] types with geometry validation
//! - [`NormalizedPoint`] and the chart mapping into pixel space
//! - Arrowhead triangle geometry
//! - Color name lookup used by the configuration layer

use crate::draw::error::DrawError;
use crate::draw::{Color, color::*};
use serde::{Deserialize, Serialize};

// ============================================================================
// Points and Rectangles
// ============================================================================

/// An integer point in canvas pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns this point shifted by `(dx, dy)`, clamped to the `i32` range.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

/// Axis-aligned rectangle in pixel space with a strictly positive area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle.
    ///
    /// # Errors
    /// Returns [`DrawError::InvalidGeometry`] when width or height is not positive,
    /// or when the right or bottom edge does not fit in an `i32`.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Result<Self, DrawError> {
        if width <= 0 || height <= 0 {
            return Err(DrawError::InvalidGeometry(format!(
                "rectangle at ({x}, {y}) has non-positive size {width}x{height}"
            )));
        }
        if x.checked_add(width).is_none() || y.checked_add(height).is_none() {
            return Err(DrawError::InvalidGeometry(format!(
                "rectangle at ({x}, {y}) with size {width}x{height} overflows pixel space"
            )));
        }
        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }

    /// Builds a rectangle from min/max bounds (inclusive min, exclusive max).
    pub fn from_min_max(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Result<Self, DrawError> {
        match (max_x.checked_sub(min_x), max_y.checked_sub(min_y)) {
            (Some(width), Some(height)) => Self::new(min_x, min_y, width, height),
            _ => Err(DrawError::InvalidGeometry(format!(
                "span ({min_x}, {min_y})..({max_x}, {max_y}) overflows pixel space"
            ))),
        }
    }

    /// Exclusive right edge.
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Returns the smallest rectangle covering both inputs.
    pub fn union(self, other: Rect) -> Rect {
        let min_x = self.x.min(other.x);
        let min_y = self.y.min(other.y);
        let max_x = self.right().max(other.right());
        let max_y = self.bottom().max(other.bottom());
        Rect {
            x: min_x,
            y: min_y,
            width: max_x.saturating_sub(min_x),
            height: max_y.saturating_sub(min_y),
        }
    }

    /// Returns true if `other` lies completely inside this rectangle.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

/// Bounding box of a set of points, padded by `padding` on every side.
pub fn bounding_box_for_points(points: &[Point], padding: i32) -> Option<Rect> {
    let first = points.first()?;
    let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
    for p in &points[1..] {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    let padding = padding.max(1);
    Rect::from_min_max(
        min_x.saturating_sub(padding),
        min_y.saturating_sub(padding),
        max_x.saturating_add(padding),
        max_y.saturating_add(padding),
    )
    .ok()
}

// ============================================================================
// Normalized Coordinates
// ============================================================================

/// A coordinate in `[0,1]×[0,1]`, mapped into a chart's pixel bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPoint {
    pub x: f64,
    pub y: f64,
}

impl NormalizedPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn is_valid(&self) -> bool {
        (0.0..=1.0).contains(&self.x) && (0.0..=1.0).contains(&self.y)
    }
}

/// Maps a normalized point into `bounds`: `origin + floor(normalized * size)` per axis.
///
/// # Errors
/// Returns [`DrawError::InvalidGeometry`] when either coordinate is outside `[0, 1]`
/// (NaN included).
pub fn map_normalized(bounds: Rect, point: NormalizedPoint) -> Result<Point, DrawError> {
    if !point.is_valid() {
        return Err(DrawError::InvalidGeometry(format!(
            "normalized point ({}, {}) is outside [0, 1]",
            point.x, point.y
        )));
    }
    Ok(Point::new(
        bounds.x + (point.x * bounds.width as f64).floor() as i32,
        bounds.y + (point.y * bounds.height as f64).floor() as i32,
    ))
}

// ============================================================================
// Arrowhead Geometry
// ============================================================================

/// Distance from the arrow tip back to the base of the head.
pub const ARROWHEAD_LENGTH: i32 = 14;
/// Distance from the shaft to each base corner of the head.
pub const ARROWHEAD_HALF_WIDTH: i32 = 8;

/// Horizontal direction an arrowhead points in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadDirection {
    Right,
    Left,
}

impl HeadDirection {
    /// Direction for an arrow from `x1` to `x2`. A vertical arrow points right.
    pub fn from_endpoints(x1: i32, x2: i32) -> Self {
        if x2 >= x1 {
            HeadDirection::Right
        } else {
            HeadDirection::Left
        }
    }
}

/// Calculates the filled arrowhead triangle for an arrow from `from` to `to`.
///
/// Only the x-ordering of the endpoints matters: the head is either fully
/// right-pointing or fully left-pointing, never rotated to the shaft angle.
///
/// # Returns
/// `[tip, upper_base, lower_base]`
pub fn arrowhead_triangle(from: Point, to: Point) -> [Point; 3] {
    let back = match HeadDirection::from_endpoints(from.x, to.x) {
        HeadDirection::Right => -ARROWHEAD_LENGTH,
        HeadDirection::Left => ARROWHEAD_LENGTH,
    };
    [
        to,
        to.offset(back, -ARROWHEAD_HALF_WIDTH),
        to.offset(back, ARROWHEAD_HALF_WIDTH),
    ]
}

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system to parse color names from the config file.
/// The status hues resolve to the default theme palette rather than pure RGB.
///
/// # Supported Names (case-insensitive)
/// - "red" (#EF4444), "green" (#16A34A), "blue" (#38BDF8)
/// - "yellow" (#F59E0B), "orange" (#FB923C)
/// - "white", "black"
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_rejects_non_positive_sizes() {
        assert!(Rect::new(0, 0, 0, 10).is_err());
        assert!(Rect::new(0, 0, 10, -1).is_err());
        let rect = Rect::new(56, 180, 280, 260).unwrap();
        assert_eq!((rect.right(), rect.bottom()), (336, 440));
    }

    #[test]
    fn rect_rejects_edges_past_i32_range() {
        let err = Rect::new(i32::MAX - 10, 0, 100, 10);
        assert!(matches!(err, Err(DrawError::InvalidGeometry(_))));
        assert!(Rect::new(0, i32::MAX - 5, 10, 6).is_err());
        assert!(Rect::from_min_max(i32::MIN, 0, i32::MAX, 10).is_err());

        let edge = Rect::new(i32::MAX - 10, 0, 10, 10).unwrap();
        assert_eq!(edge.right(), i32::MAX);
        let canvas = Rect::new(0, 0, 1536, 1024).unwrap();
        assert!(!canvas.contains_rect(&edge));
    }

    #[test]
    fn offsets_and_unions_saturate_near_i32_limits() {
        let p = Point::new(i32::MAX - 3, i32::MIN + 3).offset(10, -10);
        assert_eq!(p, Point::new(i32::MAX, i32::MIN));

        let low = Rect::new(i32::MIN, 0, 10, 10).unwrap();
        let high = Rect::new(i32::MAX - 10, 0, 10, 10).unwrap();
        let u = low.union(high);
        assert_eq!((u.x, u.width), (i32::MIN, i32::MAX));

        let head = arrowhead_triangle(Point::new(0, i32::MAX), Point::new(i32::MIN, i32::MAX));
        assert_eq!(head[1], Point::new(i32::MIN + ARROWHEAD_LENGTH, i32::MAX - 8));
        assert_eq!(head[2], Point::new(i32::MIN + ARROWHEAD_LENGTH, i32::MAX));
        let extent = bounding_box_for_points(&head, 3).unwrap();
        assert_eq!((extent.x, extent.bottom()), (i32::MIN, i32::MAX));
    }

    #[test]
    fn rect_union_and_containment() {
        let a = Rect::new(0, 0, 10, 10).unwrap();
        let b = Rect::new(5, 5, 10, 10).unwrap();
        let u = a.union(b);
        assert_eq!(u, Rect::new(0, 0, 15, 15).unwrap());
        assert!(u.contains_rect(&a));
        assert!(!a.contains_rect(&b));
    }

    #[test]
    fn arrowhead_points_right_for_forward_arrows() {
        let head = arrowhead_triangle(Point::new(336, 310), Point::new(390, 310));
        assert_eq!(
            head,
            [
                Point::new(390, 310),
                Point::new(376, 302),
                Point::new(376, 318)
            ]
        );
    }

    #[test]
    fn arrowhead_points_left_for_backward_arrows() {
        let head = arrowhead_triangle(Point::new(390, 310), Point::new(336, 310));
        assert_eq!(
            head,
            [
                Point::new(336, 310),
                Point::new(350, 302),
                Point::new(350, 318)
            ]
        );
    }

    #[test]
    fn vertical_arrow_counts_as_rightward() {
        assert_eq!(HeadDirection::from_endpoints(100, 100), HeadDirection::Right);
        let head = arrowhead_triangle(Point::new(100, 10), Point::new(100, 90));
        assert_eq!(head[1], Point::new(86, 82));
        assert_eq!(head[2], Point::new(86, 98));
    }

    #[test]
    fn normalized_corners_map_to_bounds_corners() {
        let bounds = Rect::new(10, 20, 300, 200).unwrap();
        let min = map_normalized(bounds, NormalizedPoint::new(0.0, 0.0)).unwrap();
        let max = map_normalized(bounds, NormalizedPoint::new(1.0, 1.0)).unwrap();
        assert_eq!(min, Point::new(10, 20));
        assert_eq!(max, Point::new(310, 220));
    }

    #[test]
    fn normalized_mapping_floors_fractional_pixels() {
        let bounds = Rect::new(92, 560, 1360, 300).unwrap();
        let start = map_normalized(bounds, NormalizedPoint::new(0.05, 0.78)).unwrap();
        let end = map_normalized(bounds, NormalizedPoint::new(0.93, 0.40)).unwrap();
        assert_eq!(start, Point::new(160, 794));
        assert_eq!(end, Point::new(1356, 680));
    }

    #[test]
    fn normalized_mapping_rejects_out_of_range() {
        let bounds = Rect::new(0, 0, 10, 10).unwrap();
        assert!(map_normalized(bounds, NormalizedPoint::new(1.2, 0.5)).is_err());
        assert!(map_normalized(bounds, NormalizedPoint::new(0.5, f64::NAN)).is_err());
    }

    #[test]
    fn points_bounding_box_is_padded() {
        let rect =
            bounding_box_for_points(&[Point::new(10, 20), Point::new(30, 40)], 3).unwrap();
        assert_eq!(rect, Rect::new(7, 17, 26, 26).unwrap());
        assert!(bounding_box_for_points(&[], 3).is_none());
    }

    #[test]
    fn name_color_mapping() {
        assert_eq!(name_to_color("White").unwrap(), WHITE);
        assert!(name_to_color("chartreuse").is_none());
        assert!(name_to_color("pink").is_none());
    }

    #[test]
    fn status_names_resolve_to_theme_palette() {
        let theme = crate::draw::Theme::default();
        assert_eq!(name_to_color("red"), Color::from_hex("#EF4444"));
        assert_eq!(name_to_color("RED").unwrap(), theme.critical);
        assert_eq!(name_to_color("green").unwrap(), theme.ok);
        assert_eq!(name_to_color("blue").unwrap(), theme.info);
        assert_eq!(name_to_color("yellow").unwrap(), theme.caution);
        assert_eq!(name_to_color("orange").unwrap(), theme.elevated);
    }
}
