use std::fmt;
use std::str::FromStr;

use crate::errors::{Error, Result};

/// Named flattening presets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "json",
    derive(serde_derive::Deserialize, serde_derive::Serialize)
)]
#[cfg_attr(feature = "json", serde(rename_all = "lowercase"))]
pub enum Quality {
    Low,
    #[default]
    Medium,
    High,
}

impl Quality {
    pub const ALL: [Quality; 3] = [Quality::Low, Quality::Medium, Quality::High];

    /// (curve segments, arc segments) for this preset
    pub const fn segments(&self) -> (u32, u32) {
        match self {
            Quality::Low => (4, 8),
            Quality::Medium => (8, 16),
            Quality::High => (16, 32),
        }
    }
}

impl FromStr for Quality {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(Error::InvalidValue(
                "quality (available: low, medium, high)".to_string(),
                s.to_string(),
            )),
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Quality::Low => "low",
            Quality::Medium => "medium",
            Quality::High => "high",
        };
        write!(f, "{name}")
    }
}

/// Upper bound on segments per curve or arc; counts may come from remote
/// requests, so each command's output stays bounded.
pub const MAX_SEGMENTS: u32 = 1024;

/// Flattening density used when converting a path to a polygon.
///
/// Affects only how many points approximate each curve, never the shape
/// being approximated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PolygonConfig {
    /// Segments per cubic or quadratic Bézier curve (default 8)
    pub curve_segments: u32,
    /// Segments per elliptical arc (default 16)
    pub arc_segments: u32,
}

impl Default for PolygonConfig {
    fn default() -> Self {
        Self::from_quality(Quality::default())
    }
}

impl From<Quality> for PolygonConfig {
    fn from(quality: Quality) -> Self {
        Self::from_quality(quality)
    }
}

impl PolygonConfig {
    pub const fn from_quality(quality: Quality) -> Self {
        let (curve_segments, arc_segments) = quality.segments();
        Self {
            curve_segments,
            arc_segments,
        }
    }

    /// A quality preset with optional explicit segment counts taking
    /// precedence over it.
    pub const fn with_overrides(
        quality: Quality,
        curve_segments: Option<u32>,
        arc_segments: Option<u32>,
    ) -> Self {
        let (preset_curve, preset_arc) = quality.segments();
        Self {
            curve_segments: match curve_segments {
                Some(n) => n,
                None => preset_curve,
            },
            arc_segments: match arc_segments {
                Some(n) => n,
                None => preset_arc,
            },
        }
    }

    /// Both segment counts must be in `1..=MAX_SEGMENTS`.
    pub fn validate(&self) -> Result<()> {
        for (what, count) in [
            ("curve segment count", self.curve_segments),
            ("arc segment count", self.arc_segments),
        ] {
            if !(1..=MAX_SEGMENTS).contains(&count) {
                return Err(Error::InvalidValue(
                    format!("{what} (must be 1 to {MAX_SEGMENTS})"),
                    count.to_string(),
                ));
            }
        }
        Ok(())
    }
}
