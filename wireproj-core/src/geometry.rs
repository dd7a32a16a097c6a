//! Geometry primitives for wireframe models
use nalgebra::{Point2, Point3};

use crate::input::LoadError;

/// An edge references two vertices by their index in the vertex table
pub type Edge = [usize; 2];

/// A 3D wireframe: vertex table plus edge table
#[derive(Debug, Clone, PartialEq)]
pub struct Model3D {
    pub vertices: Vec<Point3<f32>>,
    pub edges: Vec<Edge>,
}

impl Model3D {
    pub fn new(vertices: Vec<Point3<f32>>, edges: Vec<Edge>) -> Self {
        Self { vertices, edges }
    }

    pub fn empty() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Check that every edge references an existing vertex
    pub fn validate(&self) -> Result<(), LoadError> {
        let vertex_count = self.vertices.len();
        for (edge, pair) in self.edges.iter().enumerate() {
            if let Some(&index) = pair.iter().find(|&&index| index >= vertex_count) {
                return Err(LoadError::EdgeOutOfRange {
                    edge,
                    index,
                    vertex_count,
                });
            }
        }
        Ok(())
    }

    /// Create a wireframe cube centred on the origin
    pub fn cube(size: f32) -> Self {
        let half = size / 2.0;
        let vertices = vec![
            // Front face (z = -half, nearest to the observer)
            Point3::new(-half, -half, -half),
            Point3::new(half, -half, -half),
            Point3::new(half, half, -half),
            Point3::new(-half, half, -half),
            // Back face
            Point3::new(-half, -half, half),
            Point3::new(half, -half, half),
            Point3::new(half, half, half),
            Point3::new(-half, half, half),
        ];
        let edges = vec![
            [0, 1],
            [1, 2],
            [2, 3],
            [3, 0],
            [4, 5],
            [5, 6],
            [6, 7],
            [7, 4],
            [0, 4],
            [1, 5],
            [2, 6],
            [3, 7],
        ];

        Self { vertices, edges }
    }
}

impl Default for Model3D {
    fn default() -> Self {
        Self::empty()
    }
}

/// A projected wireframe. Points keep the indexing of the source vertex table.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape2D {
    pub points: Vec<Point2<f32>>,
    pub lines: Vec<Edge>,
}

impl Shape2D {
    pub fn new(points: Vec<Point2<f32>>, lines: Vec<Edge>) -> Self {
        Self { points, lines }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.lines.is_empty()
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Both endpoints of a line, or `None` if the line or one of its
    /// indices does not exist
    pub fn line_endpoints(&self, line: usize) -> Option<(Point2<f32>, Point2<f32>)> {
        let [a, b] = *self.lines.get(line)?;
        Some((*self.points.get(a)?, *self.points.get(b)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_topology() {
        let cube = Model3D::cube(2.0);
        assert_eq!(cube.vertex_count(), 8);
        assert_eq!(cube.edge_count(), 12);
        assert!(cube.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_dangling_edge() {
        let model = Model3D::new(
            vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)],
            vec![[0, 1], [1, 2]],
        );

        match model.validate() {
            Err(LoadError::EdgeOutOfRange {
                edge,
                index,
                vertex_count,
            }) => {
                assert_eq!(edge, 1);
                assert_eq!(index, 2);
                assert_eq!(vertex_count, 2);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_empty_model_is_valid() {
        assert!(Model3D::empty().validate().is_ok());
    }

    #[test]
    fn test_line_endpoints() {
        let shape = Shape2D::new(
            vec![Point2::new(0.0, 0.0), Point2::new(1.0, 2.0)],
            vec![[1, 0], [0, 5]],
        );

        let (a, b) = shape.line_endpoints(0).unwrap();
        assert_eq!(a, Point2::new(1.0, 2.0));
        assert_eq!(b, Point2::new(0.0, 0.0));
        assert!(shape.line_endpoints(1).is_none());
        assert!(shape.line_endpoints(2).is_none());
    }
}
