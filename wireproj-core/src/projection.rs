//! Perspective projection of wireframe models onto the picture plane
use nalgebra::{Point2, Point3};

use crate::geometry::{Model3D, Shape2D};

/// Observer distance used by the program
pub const DEFAULT_DISTANCE: f32 = 5.0;

/// Dürer-style projector: x and y are scaled by `distance / (distance + z)`.
///
/// There is no guard for a vertex at `z == -distance`; the division yields
/// infinite or NaN coordinates and those are passed through unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projector {
    pub distance: f32,
}

impl Projector {
    pub fn new(distance: f32) -> Self {
        Self { distance }
    }

    /// Project a single vertex
    pub fn project_point(&self, point: &Point3<f32>) -> Point2<f32> {
        let factor = self.distance / (self.distance + point.z);
        Point2::new(point.x * factor, point.y * factor)
    }

    /// Project every vertex of the model, keeping the edge table as is
    pub fn project(&self, model: &Model3D) -> Shape2D {
        let points = model
            .vertices
            .iter()
            .map(|vertex| self.project_point(vertex))
            .collect();

        Shape2D::new(points, model.edges.clone())
    }
}

impl Default for Projector {
    fn default() -> Self {
        Self::new(DEFAULT_DISTANCE)
    }
}

/// Project a model with the default observer distance
#[tracing::instrument(skip_all, fields(vertices = model.vertex_count(), edges = model.edge_count()))]
pub fn project_shape(model: &Model3D) -> Shape2D {
    let shape = Projector::default().project(model);
    tracing::info!("projected model");
    shape
}
