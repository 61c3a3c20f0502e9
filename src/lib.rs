//! ## svgclip - convert SVG path data into CSS clip-path shapes
//!
//! Given the value of an SVG path `d` attribute, `svgclip` produces two
//! independent CSS `clip-path` declarations:
//!
//! - [`to_clip_path`] wraps the (trimmed) path data unchanged in a `path()`
//!   function, after a shallow check that it contains path commands.
//! - [`to_polygon`] parses the path data, flattens curves and arcs into
//!   straight segments, and rescales the resulting outline to a `polygon()`
//!   of percentage coordinates.
//!
//! The two conversions share no state; a failure in one never prevents the
//! other from succeeding. [`convert`] runs both and reports each result.
//!
//! Errors are reported via `svgclip::Result`; the `Display` form of each
//! error is an English sentence suitable for end-users.
//!
//! ## Example
//!
//! ```
//! let cfg = svgclip::PolygonConfig::default();
//!
//! let input = "M 10 10 L 90 10 L 90 90 L 10 90 Z";
//! let output = svgclip::to_polygon(input, &cfg).unwrap();
//!
//! assert_eq!(
//!     output,
//!     "clip-path: polygon(0% 0%, 100% 0%, 100% 100%, 0% 100%, 0% 0%);"
//! );
//! ```

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

use tracing::debug;

#[cfg(feature = "cli")]
pub mod cli;
mod clip;
pub mod document;
pub mod errors;
pub mod geometry;
#[cfg(feature = "json")]
pub mod json_api;
pub mod path;
mod polygon;
mod quality;
#[cfg(feature = "server")]
pub mod server;
mod types;

pub use errors::{Error, Result};
pub use geometry::Point;
pub use path::{flatten_path, tokenize, Command, Token};
pub use quality::{PolygonConfig, Quality, MAX_SEGMENTS};

// Allow users of this as a library to easily retrieve the version of svgclip being used
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Wrap path data in a CSS `clip-path: path(...)` declaration.
///
/// The trimmed input is embedded unchanged as a CSS string (quotes,
/// backslashes and line breaks escaped); it is not parsed, only checked to
/// be non-empty and to contain at least one path command letter.
pub fn to_clip_path(raw: &str) -> Result<String> {
    let data = clip::validate_path_data(raw)?;
    debug!(len = data.len(), "clip-path passthrough");
    Ok(format!("clip-path: path('{}');", clip::css_string(data)))
}

/// The comma-separated `"x% y%"` point list approximating the path outline.
pub fn polygon_points(raw: &str, config: &PolygonConfig) -> Result<String> {
    debug!(
        curve_segments = config.curve_segments,
        arc_segments = config.arc_segments,
        "polygon conversion"
    );
    let points = flatten_path(raw, config)?;
    polygon::polygon_list(&points)
}

/// Convert path data to a CSS `clip-path: polygon(...)` declaration.
///
/// Fails with the most specific error from tokenizing, interpreting, or
/// building the polygon (which needs at least three points).
pub fn to_polygon(raw: &str, config: &PolygonConfig) -> Result<String> {
    Ok(format!(
        "clip-path: polygon({});",
        polygon_points(raw, config)?
    ))
}

/// Convert path data to a polygon declaration using default (medium) quality.
pub fn to_polygon_default(raw: &str) -> Result<String> {
    to_polygon(raw, &PolygonConfig::default())
}

/// Results of both conversions of a single input.
#[derive(Debug)]
pub struct Conversion {
    pub clip_path: Result<String>,
    pub polygon: Result<String>,
}

impl Conversion {
    pub fn is_ok(&self) -> bool {
        self.clip_path.is_ok() && self.polygon.is_ok()
    }
}

/// Run both conversions independently on the same input.
pub fn convert(raw: &str, config: &PolygonConfig) -> Conversion {
    Conversion {
        clip_path: to_clip_path(raw),
        polygon: to_polygon(raw, config),
    }
}

/// Browser entry point for the `path()` conversion.
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub fn clip_path_string(input: String) -> core::result::Result<String, String> {
    to_clip_path(&input).map_err(|e| e.to_string())
}

/// Browser entry point for the `polygon()` conversion; `quality` is one of
/// "low", "medium" or "high".
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub fn polygon_string(input: String, quality: String) -> core::result::Result<String, String> {
    let quality: Quality = quality.parse().map_err(|e: Error| e.to_string())?;
    to_polygon(&input, &quality.into()).map_err(|e| e.to_string())
}
