use itertools::Itertools;
use tracing::debug;

use crate::errors::{Error, Result};
use crate::geometry::{BoundingBox, Point};
use crate::types::fstr;

/// Fewest points which make a polygon
pub const MIN_POLYGON_POINTS: usize = 3;

/// Rescale path-space points into 0..=100 percentage-space relative to
/// their bounding box, preserving order.
pub fn normalize(points: &[Point]) -> Result<Vec<Point>> {
    if points.len() < MIN_POLYGON_POINTS {
        return Err(Error::Polygon(points.len()));
    }
    if let Some(p) = points.iter().find(|p| !(p.x.is_finite() && p.y.is_finite())) {
        return Err(Error::Geometry(format!(
            "point ({}, {}) is not a finite coordinate",
            p.x, p.y
        )));
    }
    let bbox = BoundingBox::from_points(points).ok_or(Error::Polygon(0))?;
    if !(bbox.width().is_finite() && bbox.height().is_finite()) {
        return Err(Error::Geometry(format!(
            "path extent {} x {} is too large",
            bbox.width(),
            bbox.height()
        )));
    }
    debug!(
        width = bbox.width(),
        height = bbox.height(),
        points = points.len(),
        "normalizing polygon"
    );
    Ok(points.iter().map(|p| bbox.to_percent(*p)).collect())
}

/// Comma separated `"x% y%"` pairs, two decimal places, in traversal order.
pub fn polygon_list(points: &[Point]) -> Result<String> {
    Ok(normalize(points)?
        .iter()
        .map(|p| format!("{}% {}%", fstr(p.x), fstr(p.y)))
        .join(", "))
}
