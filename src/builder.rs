//! Builder for trees with a custom domain or an initial point set.

use crate::config::TreeConfig;
use crate::error::Result;
use crate::index::PointIndex;
use crate::tree::SpatialTree;
use kdspace_types::{Point, Rectangle};

/// Builder for a [`SpatialTree`].
///
/// Points are inserted in the order given, which fixes the tree's shape.
///
/// # Examples
///
/// ```
/// use kdspace::{Point, PointIndex, Rectangle, TreeBuilder};
///
/// let tree = TreeBuilder::new()
///     .domain(Rectangle::new(0.0, 0.0, 100.0, 100.0))
///     .points([Point::new(10.0, 20.0), Point::new(75.0, 5.0)])
///     .build()?;
/// assert_eq!(tree.len(), 2);
/// # Ok::<(), kdspace::KdError>(())
/// ```
#[derive(Debug, Default)]
pub struct TreeBuilder {
    config: TreeConfig,
    points: Vec<Point>,
}

impl TreeBuilder {
    /// Create a new builder over the unit square with no points.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the whole configuration.
    pub fn config(mut self, config: TreeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the root cell.
    pub fn domain(mut self, domain: Rectangle) -> Self {
        self.config = self.config.with_domain(domain);
        self
    }

    /// Queue points for insertion, after any already queued.
    pub fn points<I>(mut self, points: I) -> Self
    where
        I: IntoIterator<Item = Point>,
    {
        self.points.extend(points);
        self
    }

    /// Build the tree. Fails without inserting anything if the configuration
    /// or any queued point is invalid.
    pub fn build(self) -> Result<SpatialTree> {
        let mut tree = SpatialTree::with_config(self.config)?;
        tree.insert_all(self.points)?;
        Ok(tree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KdError;

    #[test]
    fn test_builder_default() {
        let tree = TreeBuilder::new().build().unwrap();
        assert!(tree.is_empty());
        assert_eq!(tree.domain(), &Rectangle::unit());
    }

    #[test]
    fn test_builder_with_points() {
        let tree = TreeBuilder::new()
            .points([Point::new(0.5, 0.5), Point::new(0.25, 0.75)])
            .points([Point::new(0.5, 0.5)])
            .build()
            .unwrap();
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.iter().next(), Some(Point::new(0.5, 0.5)));
    }

    #[test]
    fn test_builder_rejects_bad_point() {
        let err = TreeBuilder::new()
            .points([Point::new(0.5, 0.5), Point::new(0.1, f64::NAN)])
            .build()
            .unwrap_err();
        assert!(matches!(err, KdError::InvalidArgument(_)));
    }

    #[test]
    fn test_builder_rejects_bad_domain() {
        let config: TreeConfig = serde_json::from_str(
            r#"{ "domain": { "min": { "x": 0.0, "y": 1.0 }, "max": { "x": 1.0, "y": 0.0 } } }"#,
        )
        .unwrap();
        let err = TreeBuilder::new().config(config).build().unwrap_err();
        assert!(matches!(err, KdError::InvalidConfig(_)));
    }
}
