use crate::point::Point;
use geo::Rect;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An axis-aligned rectangle, boundary included.
///
/// This is a wrapper around `geo::Rect`. Constructors order the corners, so a
/// rectangle built in code always has `xmin <= xmax` and `ymin <= ymax`; a
/// deserialized one may not, which [`Rectangle::is_well_formed`] detects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rectangle {
    rect: Rect<f64>,
}

impl Rectangle {
    /// Create a new rectangle from minimum and maximum coordinates.
    ///
    /// # Examples
    ///
    /// ```
    /// use kdspace_types::rect::Rectangle;
    ///
    /// let lower_left = Rectangle::new(0.0, 0.0, 0.5, 0.5);
    /// assert_eq!(lower_left.xmax(), 0.5);
    /// ```
    pub fn new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Self {
        Self {
            rect: Rect::new(
                geo::coord! { x: xmin, y: ymin },
                geo::coord! { x: xmax, y: ymax },
            ),
        }
    }

    /// The unit square `[0, 1] x [0, 1]`.
    pub fn unit() -> Self {
        Self::new(0.0, 0.0, 1.0, 1.0)
    }

    /// Create a rectangle from a `geo::Rect`.
    pub fn from_rect(rect: Rect<f64>) -> Self {
        Self { rect }
    }

    /// Access the inner `geo::Rect`.
    pub fn inner(&self) -> &Rect<f64> {
        &self.rect
    }

    /// Get the minimum x coordinate.
    pub fn xmin(&self) -> f64 {
        self.rect.min().x
    }

    /// Get the minimum y coordinate.
    pub fn ymin(&self) -> f64 {
        self.rect.min().y
    }

    /// Get the maximum x coordinate.
    pub fn xmax(&self) -> f64 {
        self.rect.max().x
    }

    /// Get the maximum y coordinate.
    pub fn ymax(&self) -> f64 {
        self.rect.max().y
    }

    /// Lower-left corner.
    pub fn min(&self) -> Point {
        Point::new(self.xmin(), self.ymin())
    }

    /// Upper-right corner.
    pub fn max(&self) -> Point {
        Point::new(self.xmax(), self.ymax())
    }

    /// Get the width (x extent).
    pub fn width(&self) -> f64 {
        self.xmax() - self.xmin()
    }

    /// Get the height (y extent).
    pub fn height(&self) -> f64 {
        self.ymax() - self.ymin()
    }

    /// Finite bounds with `xmin <= xmax` and `ymin <= ymax`.
    pub fn is_well_formed(&self) -> bool {
        [self.xmin(), self.ymin(), self.xmax(), self.ymax()]
            .iter()
            .all(|v| v.is_finite())
            && self.xmin() <= self.xmax()
            && self.ymin() <= self.ymax()
    }

    /// Check if a point lies inside this rectangle or on its boundary.
    pub fn contains(&self, point: &Point) -> bool {
        point.x() >= self.xmin()
            && point.x() <= self.xmax()
            && point.y() >= self.ymin()
            && point.y() <= self.ymax()
    }

    /// Check if this rectangle overlaps another. Touching edges count.
    pub fn intersects(&self, other: &Rectangle) -> bool {
        !(self.xmax() < other.xmin()
            || self.xmin() > other.xmax()
            || self.ymax() < other.ymin()
            || self.ymin() > other.ymax())
    }

    /// Squared distance from `point` to the closest point of this rectangle.
    ///
    /// Zero when the point is inside. Each coordinate is clamped into the
    /// rectangle's range and the squared distance to the clamped point is
    /// returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use kdspace_types::{point::Point, rect::Rectangle};
    ///
    /// let r = Rectangle::new(0.0, 0.0, 0.5, 0.5);
    /// assert_eq!(r.squared_distance_to(&Point::new(0.25, 0.25)), 0.0);
    /// assert_eq!(r.squared_distance_to(&Point::new(1.0, 0.5)), 0.25);
    /// ```
    pub fn squared_distance_to(&self, point: &Point) -> f64 {
        let dx = if point.x() < self.xmin() {
            self.xmin() - point.x()
        } else if point.x() > self.xmax() {
            point.x() - self.xmax()
        } else {
            0.0
        };
        let dy = if point.y() < self.ymin() {
            self.ymin() - point.y()
        } else if point.y() > self.ymax() {
            point.y() - self.ymax()
        } else {
            0.0
        };
        dx * dx + dy * dy
    }

    /// Distance from `point` to the closest point of this rectangle.
    pub fn distance_to(&self, point: &Point) -> f64 {
        self.squared_distance_to(point).sqrt()
    }

    /// Copy of this rectangle with `xmin` replaced.
    ///
    /// Goes through [`Rectangle::new`], so a value past the opposite bound
    /// swaps the two: the result stays well formed but no longer lies inside
    /// `self`.
    pub fn with_xmin(&self, xmin: f64) -> Self {
        Self::new(xmin, self.ymin(), self.xmax(), self.ymax())
    }

    /// Copy of this rectangle with `xmax` replaced.
    ///
    /// Goes through [`Rectangle::new`], so a value past the opposite bound
    /// swaps the two: the result stays well formed but no longer lies inside
    /// `self`.
    pub fn with_xmax(&self, xmax: f64) -> Self {
        Self::new(self.xmin(), self.ymin(), xmax, self.ymax())
    }

    /// Copy of this rectangle with `ymin` replaced.
    ///
    /// Goes through [`Rectangle::new`], so a value past the opposite bound
    /// swaps the two: the result stays well formed but no longer lies inside
    /// `self`.
    pub fn with_ymin(&self, ymin: f64) -> Self {
        Self::new(self.xmin(), ymin, self.xmax(), self.ymax())
    }

    /// Copy of this rectangle with `ymax` replaced.
    ///
    /// Goes through [`Rectangle::new`], so a value past the opposite bound
    /// swaps the two: the result stays well formed but no longer lies inside
    /// `self`.
    pub fn with_ymax(&self, ymax: f64) -> Self {
        Self::new(self.xmin(), self.ymin(), self.xmax(), ymax)
    }
}

impl Default for Rectangle {
    fn default() -> Self {
        Self::unit()
    }
}

impl From<Rect<f64>> for Rectangle {
    fn from(rect: Rect<f64>) -> Self {
        Self::from_rect(rect)
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}] x [{}, {}]",
            self.xmin(),
            self.xmax(),
            self.ymin(),
            self.ymax()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_creation() {
        let r = Rectangle::new(0.1, 0.2, 0.6, 0.9);
        assert_eq!(r.xmin(), 0.1);
        assert_eq!(r.ymin(), 0.2);
        assert_eq!(r.xmax(), 0.6);
        assert_eq!(r.ymax(), 0.9);
        assert_eq!(r.min(), Point::new(0.1, 0.2));
        assert_eq!(r.max(), Point::new(0.6, 0.9));
        assert!(r.is_well_formed());
    }

    #[test]
    fn test_rect_orders_corners() {
        let r = Rectangle::new(0.6, 0.9, 0.1, 0.2);
        assert_eq!(r, Rectangle::new(0.1, 0.2, 0.6, 0.9));
    }

    #[test]
    fn test_rect_contains_boundary() {
        let r = Rectangle::new(0.0, 0.0, 0.5, 0.5);
        assert!(r.contains(&Point::new(0.25, 0.25)));
        assert!(r.contains(&Point::new(0.0, 0.0)));
        assert!(r.contains(&Point::new(0.5, 0.5)));
        assert!(r.contains(&Point::new(0.5, 0.1)));
        assert!(!r.contains(&Point::new(0.50001, 0.1)));
        assert!(!r.contains(&Point::new(0.4, 0.7)));
    }

    #[test]
    fn test_rect_intersects() {
        let a = Rectangle::new(0.0, 0.0, 0.5, 0.5);
        let b = Rectangle::new(0.25, 0.25, 0.75, 0.75);
        let touching = Rectangle::new(0.5, 0.0, 1.0, 0.5);
        let apart = Rectangle::new(0.6, 0.6, 1.0, 1.0);

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(a.intersects(&touching));
        assert!(!a.intersects(&apart));
        assert!(!apart.intersects(&a));
    }

    #[test]
    fn test_rect_squared_distance() {
        let r = Rectangle::new(0.0, 0.0, 0.5, 0.5);
        assert_eq!(r.squared_distance_to(&Point::new(0.3, 0.3)), 0.0);
        assert_eq!(r.squared_distance_to(&Point::new(0.5, 0.5)), 0.0);
        assert_eq!(r.squared_distance_to(&Point::new(0.5, 1.0)), 0.25);
        assert_eq!(r.squared_distance_to(&Point::new(-0.5, 0.25)), 0.25);
        // corner region uses both axes
        assert!((r.squared_distance_to(&Point::new(0.8, 0.9)) - 0.25).abs() < 1e-12);
        assert!((r.distance_to(&Point::new(0.8, 0.9)) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_rect_clipping() {
        let unit = Rectangle::unit();
        assert_eq!(unit.with_xmax(0.2), Rectangle::new(0.0, 0.0, 0.2, 1.0));
        assert_eq!(unit.with_xmin(0.2), Rectangle::new(0.2, 0.0, 1.0, 1.0));
        assert_eq!(unit.with_ymax(0.7), Rectangle::new(0.0, 0.0, 1.0, 0.7));
        assert_eq!(unit.with_ymin(0.7), Rectangle::new(0.0, 0.7, 1.0, 1.0));
    }

    #[test]
    fn test_rect_clipping_past_opposite_bound_swaps() {
        let unit = Rectangle::unit();

        let past = unit.with_xmin(1.5);
        assert_eq!(past, Rectangle::new(1.0, 0.0, 1.5, 1.0));
        assert!(past.is_well_formed());
        assert!(!unit.contains(&past.max()));

        let below = unit.with_ymax(-0.5);
        assert_eq!(below, Rectangle::new(0.0, -0.5, 1.0, 0.0));
        assert!(below.is_well_formed());
    }

    #[test]
    fn test_rect_dimensions_and_display() {
        let r = Rectangle::new(0.0, 0.25, 0.5, 1.0);
        assert_eq!(r.width(), 0.5);
        assert_eq!(r.height(), 0.75);
        assert_eq!(r.to_string(), "[0, 0.5] x [0.25, 1]");
        assert_eq!(Rectangle::default(), Rectangle::unit());
    }

    #[test]
    fn test_deserialized_rect_may_be_malformed() {
        let json = r#"{"min":{"x":0.8,"y":0.0},"max":{"x":0.2,"y":1.0}}"#;
        let r: Rectangle = serde_json::from_str(json).unwrap();
        assert!(!r.is_well_formed());

        let encoded = serde_json::to_string(&Rectangle::unit()).unwrap();
        let ok: Rectangle = serde_json::from_str(&encoded).unwrap();
        assert!(ok.is_well_formed());
        assert_eq!(ok, Rectangle::unit());
    }

    #[test]
    fn test_non_finite_rect_is_not_well_formed() {
        let r = Rectangle::from_rect(Rect::new(
            geo::coord! { x: 0.0, y: 0.0 },
            geo::coord! { x: f64::INFINITY, y: 1.0 },
        ));
        assert!(!r.is_well_formed());
    }
}
