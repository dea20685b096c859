//! # kdspace-types
//!
//! Planar geometry primitives for the kdspace point index.
//!
//! - **Point**: an immutable 2D coordinate with squared-distance support
//! - **Rectangle**: an axis-aligned region with containment, overlap and
//!   point-distance tests
//!
//! Both types are serializable with Serde and wrap the `geo` crate's
//! geometric primitives.
//!
//! ## Examples
//!
//! ```rust
//! use kdspace_types::point::Point;
//! use kdspace_types::rect::Rectangle;
//!
//! let p = Point::new(0.25, 0.75);
//! let unit = Rectangle::unit();
//! assert!(unit.contains(&p));
//! assert_eq!(unit.squared_distance_to(&p), 0.0);
//! ```

pub mod point;
pub mod rect;

pub use point::Point;
pub use rect::Rectangle;
