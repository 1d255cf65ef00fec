use std::fs;
use std::path::Path;

use meshup_grid::PointGrid;
use serde::{Deserialize, Serialize};

use crate::error::IoError;

/// The geometry document schema.
///
/// Only the fields the pipeline reads and writes are declared; the
/// document is validated against this schema once, at the boundary,
/// instead of being traversed dynamically.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename = "GeometryFile")]
struct GeometryFile {
    #[serde(rename = "GeometryDefinition")]
    definition: GeometryDefinition,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct GeometryDefinition {
    #[serde(rename = "X-FlatParameters")]
    x_flat: FlatParameters,
    #[serde(rename = "Y-FlatParameters")]
    y_flat: FlatParameters,
}

/// A flattened coordinate list, stored as space-separated text content.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct FlatParameters {
    #[serde(rename = "$text")]
    values: String,
}

impl FlatParameters {
    fn parse(&self) -> Result<Vec<f64>, IoError> {
        self.values
            .split_ascii_whitespace()
            .map(|token| {
                token.parse::<f64>().map_err(|source| IoError::InvalidNumber {
                    token: token.to_string(),
                    source,
                })
            })
            .collect()
    }

    fn from_values(values: &[f64]) -> Self {
        let values = values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        Self { values }
    }
}

/// Read a geometry XML document into a displacement grid.
///
/// Parses the `X-FlatParameters` and `Y-FlatParameters` coordinate lists
/// and reshapes them row-major into a square grid.
///
/// # Arguments
///
/// * `file_path` - The path to the geometry XML file.
///
/// # Returns
///
/// The displacement grid described by the document.
///
/// # Errors
///
/// Fails if the file is missing or unreadable, the document does not
/// match the schema, a coordinate token is not a number, or the
/// coordinate lists cannot form a square grid.
pub fn read_geometry(file_path: impl AsRef<Path>) -> Result<PointGrid, IoError> {
    let file_path = file_path.as_ref();
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let text = fs::read_to_string(file_path)?;
    let document: GeometryFile = quick_xml::de::from_str(&text)?;

    let xs = document.definition.x_flat.parse()?;
    let ys = document.definition.y_flat.parse()?;

    Ok(PointGrid::from_flat_points(&xs, &ys)?)
}

/// Write a displacement grid as a geometry XML document.
///
/// The inverse of [`read_geometry`]: the grid is flattened row-major into
/// the two coordinate lists of the schema.
///
/// # Arguments
///
/// * `file_path` - The path to the geometry XML file to create.
/// * `grid` - The displacement grid to serialize.
///
/// # Errors
///
/// Fails if the document cannot be serialized or the file cannot be
/// written.
pub fn write_geometry(file_path: impl AsRef<Path>, grid: &PointGrid) -> Result<(), IoError> {
    let (xs, ys) = grid.to_flat_points();

    let document = GeometryFile {
        definition: GeometryDefinition {
            x_flat: FlatParameters::from_values(&xs),
            y_flat: FlatParameters::from_values(&ys),
        },
    };

    let body = quick_xml::se::to_string(&document)?;
    fs::write(file_path, format!("{}\n{}", r#"<?xml version="1.0"?>"#, body))?;

    Ok(())
}
