//! The operation contract shared by every point index.
//!
//! [`SpatialTree`](crate::SpatialTree) answers these queries by pruning on
//! cell geometry; [`LinearIndex`](crate::LinearIndex) answers them by
//! exhaustive scan. Callers see identical results from both, up to the order
//! of `range` output and the choice among exact ties in `nearest`.

use crate::error::Result;
use crate::validation::validate_points;
use kdspace_types::{Point, Rectangle};

/// A set of points in the plane with range and nearest-point queries.
///
/// Every fallible operation returns
/// [`KdError::InvalidArgument`](crate::KdError::InvalidArgument) for a point or
/// rectangle with a non-finite coordinate (and for an inverted rectangle),
/// before reading or changing the index.
pub trait PointIndex {
    /// Add a point. Returns `true` if it was not already present; inserting a
    /// present point is a no-op.
    fn insert(&mut self, point: Point) -> Result<bool>;

    /// Whether a point equal to `point` has been inserted.
    fn contains(&self, point: &Point) -> Result<bool>;

    /// Number of distinct points.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All points inside `rect` or on its boundary. Order is unspecified.
    fn range(&self, rect: &Rectangle) -> Result<Vec<Point>>;

    /// A point closest to `query`, or `None` when the index is empty.
    fn nearest(&self, query: &Point) -> Result<Option<Point>>;

    /// Insert many points. All points are validated before the first insert,
    /// so an invalid point leaves the index untouched.
    ///
    /// Returns the number of points that were newly added.
    fn insert_all<I>(&mut self, points: I) -> Result<usize>
    where
        I: IntoIterator<Item = Point>,
        Self: Sized,
    {
        let points: Vec<Point> = points.into_iter().collect();
        validate_points(&points)?;

        let mut added = 0;
        for point in points {
            if self.insert(point)? {
                added += 1;
            }
        }
        Ok(added)
    }
}
