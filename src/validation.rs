//! Argument checks shared by every index.
//!
//! Both [`SpatialTree`](crate::SpatialTree) and [`LinearIndex`](crate::LinearIndex)
//! run these before touching their contents, so a rejected call never leaves
//! an index partially updated.

use crate::error::{KdError, Result};
use kdspace_types::{Point, Rectangle};

/// Validates that a point has finite coordinates.
///
/// # Examples
///
/// ```
/// use kdspace::validation::validate_point;
/// use kdspace::Point;
///
/// assert!(validate_point(&Point::new(0.5, 0.5)).is_ok());
/// assert!(validate_point(&Point::new(f64::NAN, 0.5)).is_err());
/// ```
pub fn validate_point(point: &Point) -> Result<()> {
    if !point.x().is_finite() {
        log::warn!("Rejecting point with non-finite x coordinate: {}", point.x());
        return Err(KdError::InvalidArgument(format!(
            "x coordinate must be finite, got: {}",
            point.x()
        )));
    }

    if !point.y().is_finite() {
        log::warn!("Rejecting point with non-finite y coordinate: {}", point.y());
        return Err(KdError::InvalidArgument(format!(
            "y coordinate must be finite, got: {}",
            point.y()
        )));
    }

    Ok(())
}

/// Validates that a rectangle has finite, correctly ordered bounds.
///
/// Rectangles built with [`Rectangle::new`] always pass the ordering check;
/// deserialized ones may not.
pub fn validate_rectangle(rect: &Rectangle) -> Result<()> {
    check_bounds(rect.xmin(), rect.ymin(), rect.xmax(), rect.ymax())
}

/// Build a rectangle, rejecting inverted or non-finite bounds.
///
/// [`Rectangle::new`] silently orders its corners; use this when bounds come
/// from an untrusted source and an inverted range should be an error.
///
/// # Examples
///
/// ```
/// use kdspace::validation::rectangle;
///
/// assert!(rectangle(0.0, 0.0, 0.5, 0.5).is_ok());
/// assert!(rectangle(0.5, 0.0, 0.0, 0.5).is_err());
/// ```
pub fn rectangle(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Result<Rectangle> {
    check_bounds(xmin, ymin, xmax, ymax)?;
    Ok(Rectangle::new(xmin, ymin, xmax, ymax))
}

fn check_bounds(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Result<()> {
    if ![xmin, ymin, xmax, ymax].iter().all(|v| v.is_finite()) {
        log::warn!(
            "Rejecting rectangle with non-finite bounds: ({}, {}, {}, {})",
            xmin,
            ymin,
            xmax,
            ymax
        );
        return Err(KdError::InvalidArgument(format!(
            "rectangle bounds must be finite, got: ({}, {}, {}, {})",
            xmin, ymin, xmax, ymax
        )));
    }

    if xmin > xmax {
        log::warn!("Rejecting rectangle with xmin {} > xmax {}", xmin, xmax);
        return Err(KdError::InvalidArgument(format!(
            "xmin ({}) must be <= xmax ({})",
            xmin, xmax
        )));
    }

    if ymin > ymax {
        log::warn!("Rejecting rectangle with ymin {} > ymax {}", ymin, ymax);
        return Err(KdError::InvalidArgument(format!(
            "ymin ({}) must be <= ymax ({})",
            ymin, ymax
        )));
    }

    Ok(())
}

/// Validates multiple points, reporting the index of the first bad one.
pub fn validate_points(points: &[Point]) -> Result<()> {
    for (i, point) in points.iter().enumerate() {
        validate_point(point).map_err(|e| match e {
            KdError::InvalidArgument(msg) => {
                KdError::InvalidArgument(format!("point {}: {}", i, msg))
            }
            other => other,
        })?;
    }
    Ok(())
}
