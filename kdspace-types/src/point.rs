use serde::{Deserialize, Serialize};
use std::fmt;

/// A point in the plane.
///
/// This wraps `geo::Point` and adds the squared-distance arithmetic the
/// kd-tree uses on its hot path. Two points are equal iff both coordinates
/// compare equal with `==`.
///
/// # Examples
///
/// ```
/// use kdspace_types::point::Point;
///
/// let p = Point::new(0.2, 0.3);
/// assert_eq!(p.x(), 0.2);
/// assert_eq!(p.y(), 0.3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Point {
    inner: geo::Point<f64>,
}

impl Point {
    /// Create a new point from x and y coordinates.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            inner: geo::Point::new(x, y),
        }
    }

    /// Get the x coordinate.
    #[inline]
    pub fn x(&self) -> f64 {
        self.inner.x()
    }

    /// Get the y coordinate.
    #[inline]
    pub fn y(&self) -> f64 {
        self.inner.y()
    }

    /// Access the inner `geo::Point`.
    #[inline]
    pub fn inner(&self) -> &geo::Point<f64> {
        &self.inner
    }

    /// Convert into the inner `geo::Point`.
    #[inline]
    pub fn into_inner(self) -> geo::Point<f64> {
        self.inner
    }

    /// Whether both coordinates are finite (neither NaN nor infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x().is_finite() && self.y().is_finite()
    }

    /// Squared euclidean distance to another point.
    ///
    /// Ordering by squared distance is the same as ordering by distance, so
    /// comparisons never need the square root.
    ///
    /// # Examples
    ///
    /// ```
    /// use kdspace_types::point::Point;
    ///
    /// let a = Point::new(0.0, 0.0);
    /// let b = Point::new(3.0, 4.0);
    /// assert_eq!(a.squared_distance_to(&b), 25.0);
    /// ```
    #[inline]
    pub fn squared_distance_to(&self, other: &Point) -> f64 {
        let dx = self.x() - other.x();
        let dy = self.y() - other.y();
        dx * dx + dy * dy
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance_to(&self, other: &Point) -> f64 {
        self.squared_distance_to(other).sqrt()
    }
}

impl From<geo::Point<f64>> for Point {
    fn from(inner: geo::Point<f64>) -> Self {
        Self { inner }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x(), self.y())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_creation() {
        let p = Point::new(0.4, 0.7);
        assert_eq!(p.x(), 0.4);
        assert_eq!(p.y(), 0.7);
        assert_eq!(p.into_inner(), geo::Point::new(0.4, 0.7));
    }

    #[test]
    fn test_point_equality() {
        assert_eq!(Point::new(0.1, 0.1), Point::new(0.1, 0.1));
        assert_ne!(Point::new(0.1, 0.1), Point::new(0.1, 0.2));
        assert_eq!(Point::new(-0.0, 0.5), Point::new(0.0, 0.5));
        assert_ne!(Point::new(f64::NAN, 0.5), Point::new(f64::NAN, 0.5));
    }

    #[test]
    fn test_squared_distance() {
        let a = Point::new(0.1, 0.1);
        let b = Point::new(0.4, 0.5);
        assert!((a.squared_distance_to(&b) - 0.25).abs() < 1e-12);
        assert!((a.distance_to(&b) - 0.5).abs() < 1e-12);
        assert_eq!(a.squared_distance_to(&a), 0.0);
    }

    #[test]
    fn test_is_finite() {
        assert!(Point::new(0.0, 1.0).is_finite());
        assert!(!Point::new(f64::NAN, 1.0).is_finite());
        assert!(!Point::new(0.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn test_conversions_and_display() {
        let p: Point = (0.5, 0.25).into();
        assert_eq!(p, Point::from(geo::Point::new(0.5, 0.25)));
        assert_eq!(p.to_string(), "(0.5, 0.25)");
    }

    #[test]
    fn test_point_serde() {
        let p = Point::new(0.9, 0.6);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"x":0.9,"y":0.6}"#);
        let back: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
