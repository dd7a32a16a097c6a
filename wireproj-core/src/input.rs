//! JSON input: the wireframe model plus render parameters
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use nalgebra::Point3;
use serde::Deserialize;
use thiserror::Error;

use crate::geometry::{Edge, Model3D};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed input: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("edge {edge} references vertex {index}, but the model has {vertex_count} vertices")]
    EdgeOutOfRange {
        edge: usize,
        index: usize,
        vertex_count: usize,
    },
    #[error("resolution must be positive")]
    ZeroResolution,
}

/// Output size and the world-space window mapped onto it
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RenderParameters {
    #[serde(rename = "Resolution", alias = "resolution")]
    pub resolution: u32,
    #[serde(rename = "XMin", alias = "x_min")]
    pub x_min: f32,
    #[serde(rename = "XMax", alias = "x_max")]
    pub x_max: f32,
    #[serde(rename = "YMin", alias = "y_min")]
    pub y_min: f32,
    #[serde(rename = "YMax", alias = "y_max")]
    pub y_max: f32,
}

impl RenderParameters {
    pub fn new(resolution: u32, x_min: f32, x_max: f32, y_min: f32, y_max: f32) -> Self {
        Self {
            resolution,
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    pub fn width(&self) -> f32 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f32 {
        self.y_max - self.y_min
    }

    /// True when either span is zero (or NaN). Such a viewport is accepted;
    /// pixel coordinates come out infinite or NaN.
    pub fn is_degenerate(&self) -> bool {
        !(self.width().abs() > 0.0 && self.height().abs() > 0.0)
    }

    /// True when a bound pair is swapped. The mapping stays finite but the
    /// image is mirrored along that axis.
    pub fn is_inverted(&self) -> bool {
        self.width() < 0.0 || self.height() < 0.0
    }
}

#[derive(Debug, Deserialize)]
struct ModelRecord {
    #[serde(rename = "VertexTable", alias = "vertices", alias = "vertex_table")]
    vertex_table: Vec<[f32; 3]>,
    #[serde(rename = "EdgeTable", alias = "edges", alias = "edge_table")]
    edge_table: Vec<Edge>,
}

#[derive(Debug, Deserialize)]
struct InputRecord {
    #[serde(rename = "Model", alias = "model")]
    model: ModelRecord,
    #[serde(rename = "Parameters", alias = "parameters", alias = "params")]
    parameters: RenderParameters,
}

/// Everything the program reads from its input file
#[derive(Debug, Clone, PartialEq)]
pub struct InputData {
    pub model: Model3D,
    pub parameters: RenderParameters,
}

impl InputData {
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        let record: InputRecord = serde_json::from_str(json)?;
        Self::from_record(record)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        let record: InputRecord = serde_json::from_reader(reader)?;
        Self::from_record(record)
    }

    #[tracing::instrument(fields(path = %path.as_ref().display()), skip(path))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let file = File::open(path.as_ref())?;
        let data = Self::from_reader(BufReader::new(file))?;
        tracing::info!(
            vertices = data.model.vertex_count(),
            edges = data.model.edge_count(),
            resolution = data.parameters.resolution,
            "loaded input"
        );
        Ok(data)
    }

    fn from_record(record: InputRecord) -> Result<Self, LoadError> {
        let vertices = record
            .model
            .vertex_table
            .into_iter()
            .map(|[x, y, z]| Point3::new(x, y, z))
            .collect();
        let model = Model3D::new(vertices, record.model.edge_table);
        model.validate()?;

        let parameters = record.parameters;
        if parameters.resolution == 0 {
            return Err(LoadError::ZeroResolution);
        }
        if parameters.is_degenerate() {
            tracing::warn!(
                x_min = parameters.x_min,
                x_max = parameters.x_max,
                y_min = parameters.y_min,
                y_max = parameters.y_max,
                "degenerate viewport, pixel coordinates will not be finite"
            );
        } else if parameters.is_inverted() {
            tracing::warn!(
                x_min = parameters.x_min,
                x_max = parameters.x_max,
                y_min = parameters.y_min,
                y_max = parameters.y_max,
                "inverted viewport, image will be mirrored"
            );
        }

        Ok(Self { model, parameters })
    }
}
