mod command;
mod flatten;
mod interpret;
mod syntax;

pub use command::Command;
pub use flatten::Arc;
pub use interpret::{interpret, PathInterpreter};
pub use syntax::{tokenize, tokenize_indexed, SvgPathSyntax, Token};

use crate::errors::Result;
use crate::geometry::Point;
use crate::quality::PolygonConfig;

/// Tokenize and interpret path data, returning absolute path-space points
/// in traversal order. Never empty on success.
pub fn flatten_path(data: &str, config: &PolygonConfig) -> Result<Vec<Point>> {
    config.validate()?;
    interpret(tokenize_indexed(data)?, config)
}
