//! JSON request/response types shared by the server and other front-ends.

use serde_derive::{Deserialize, Serialize};

use crate::{convert, Conversion, PolygonConfig, Quality, Result};

pub const JSON_API_VERSION: u32 = 1;

fn default_version() -> u32 {
    JSON_API_VERSION
}

#[derive(Debug, Deserialize)]
pub struct ConvertRequest {
    #[serde(default = "default_version")]
    pub version: u32,
    pub input: String,
    #[serde(default)]
    pub quality: Quality,
    /// Overrides the quality preset if given
    pub curve_segments: Option<u32>,
    /// Overrides the quality preset if given
    pub arc_segments: Option<u32>,
}

impl ConvertRequest {
    pub fn config(&self) -> PolygonConfig {
        PolygonConfig::with_overrides(self.quality, self.curve_segments, self.arc_segments)
    }
}

/// Result of one conversion: exactly one of `output` or `error` is set.
#[derive(Debug, Default, PartialEq, Serialize)]
pub struct Outcome {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<Result<String>> for Outcome {
    fn from(result: Result<String>) -> Self {
        match result {
            Ok(output) => Self {
                output: Some(output),
                error: None,
            },
            Err(e) => Self {
                output: None,
                error: Some(e.to_string()),
            },
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct ConvertResponse {
    pub version: u32,
    pub clip_path: Outcome,
    pub polygon: Outcome,
    /// Request-level failure (bad JSON, unsupported version); when set,
    /// neither conversion was attempted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ConvertResponse {
    pub fn error(message: String) -> Self {
        Self {
            version: JSON_API_VERSION,
            error: Some(message),
            ..Default::default()
        }
    }
}

impl From<Conversion> for ConvertResponse {
    fn from(conversion: Conversion) -> Self {
        Self {
            version: JSON_API_VERSION,
            clip_path: conversion.clip_path.into(),
            polygon: conversion.polygon.into(),
            error: None,
        }
    }
}

#[derive(Debug, PartialEq, Serialize)]
pub struct Preset {
    pub quality: Quality,
    pub curve_segments: u32,
    pub arc_segments: u32,
}

/// The quality preset table.
pub fn presets() -> Vec<Preset> {
    Quality::ALL
        .into_iter()
        .map(|quality| {
            let (curve_segments, arc_segments) = quality.segments();
            Preset {
                quality,
                curve_segments,
                arc_segments,
            }
        })
        .collect()
}

/// Handle a JSON-encoded `ConvertRequest`, running both conversions.
pub fn convert_json(body: &str) -> ConvertResponse {
    match serde_json::from_str::<ConvertRequest>(body) {
        Ok(request) => {
            if request.version != JSON_API_VERSION {
                ConvertResponse::error(format!(
                    "Unsupported API version: {} (expected {})",
                    request.version, JSON_API_VERSION
                ))
            } else {
                convert(&request.input, &request.config()).into()
            }
        }
        Err(e) => ConvertResponse::error(format!("Invalid JSON request: {e}")),
    }
}
