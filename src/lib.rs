//! In-memory 2D point index with rectangle range search and nearest-point
//! queries.
//!
//! [`SpatialTree`] is a 2D tree whose nodes alternate between splitting on x
//! and on y, each carrying the rectangle its subtree lives in. Queries skip
//! every subtree whose rectangle cannot hold an answer. [`LinearIndex`]
//! implements the same [`PointIndex`] contract by brute force and serves as a
//! reference for checking the tree.
//!
//! ```rust
//! use kdspace::{Point, PointIndex, Rectangle, SpatialTree};
//!
//! let mut tree = SpatialTree::new();
//! tree.insert(Point::new(0.2, 0.3))?;
//! tree.insert(Point::new(0.9, 0.6))?;
//!
//! let hits = tree.range(&Rectangle::new(0.0, 0.0, 0.5, 0.5))?;
//! assert_eq!(hits, vec![Point::new(0.2, 0.3)]);
//!
//! let closest = tree.nearest(&Point::new(1.0, 1.0))?;
//! assert_eq!(closest, Some(Point::new(0.9, 0.6)));
//! # Ok::<(), kdspace::KdError>(())
//! ```
//!
//! The tree is not rebalanced, and it is not synchronized: callers that share
//! one across threads must provide their own locking.

pub mod builder;
pub mod config;
pub mod error;
pub mod index;
pub mod linear;
pub mod tree;
pub mod validation;

pub use builder::TreeBuilder;
pub use config::TreeConfig;
pub use error::{KdError, Result};
pub use index::PointIndex;
pub use linear::LinearIndex;
pub use tree::{Axis, Partition, SpatialTree, TreeStats, axis_order};

pub use kdspace_types::{Point, Rectangle};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{KdError, Result};

    pub use crate::{LinearIndex, PointIndex, SpatialTree, TreeBuilder, TreeConfig};

    pub use crate::{Point, Rectangle};
}
