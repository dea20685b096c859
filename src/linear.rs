//! Brute-force point index.
//!
//! Every query scans every stored point. It answers the same contract as
//! [`SpatialTree`](crate::SpatialTree) with no geometry beyond the primitives,
//! which makes it a trustworthy reference for checking the tree's results.

use crate::error::Result;
use crate::index::PointIndex;
use crate::validation::{validate_point, validate_rectangle};
use kdspace_types::{Point, Rectangle};

/// Point index that keeps its points in a plain vector.
#[derive(Debug, Clone, Default)]
pub struct LinearIndex {
    points: Vec<Point>,
}

impl LinearIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored points in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Remove every point.
    pub fn clear(&mut self) {
        self.points.clear();
    }
}

impl PointIndex for LinearIndex {
    fn insert(&mut self, point: Point) -> Result<bool> {
        validate_point(&point)?;

        if self.points.contains(&point) {
            return Ok(false);
        }
        self.points.push(point);
        Ok(true)
    }

    fn contains(&self, point: &Point) -> Result<bool> {
        validate_point(point)?;
        Ok(self.points.contains(point))
    }

    fn len(&self) -> usize {
        self.points.len()
    }

    fn range(&self, rect: &Rectangle) -> Result<Vec<Point>> {
        validate_rectangle(rect)?;
        Ok(self
            .points
            .iter()
            .filter(|p| rect.contains(p))
            .copied()
            .collect())
    }

    fn nearest(&self, query: &Point) -> Result<Option<Point>> {
        validate_point(query)?;

        let mut best: Option<(Point, f64)> = None;
        for point in &self.points {
            let dist = point.squared_distance_to(query);
            match best {
                Some((_, best_dist)) if best_dist <= dist => {}
                _ => best = Some((*point, dist)),
            }
        }
        Ok(best.map(|(point, _)| point))
    }
}

impl<'a> IntoIterator for &'a LinearIndex {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
