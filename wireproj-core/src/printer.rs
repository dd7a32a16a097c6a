//! Text dump of a projected shape
use std::fmt;

use crate::geometry::Shape2D;

impl fmt::Display for Shape2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Points:")?;
        for (i, point) in self.points.iter().enumerate() {
            writeln!(f, "  [{}] ({:.4}, {:.4})", i, point.x, point.y)?;
        }

        writeln!(f, "Lines:")?;
        for (i, [a, b]) in self.lines.iter().enumerate() {
            writeln!(f, "  [{}] {} -> {}", i, a, b)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::{Point2, Point3};

    use crate::geometry::Model3D;
    use crate::projection::project_shape;

    use super::*;

    #[test]
    fn test_print_keeps_storage_order() {
        let shape = Shape2D::new(
            vec![Point2::new(1.0, -0.5), Point2::new(0.25, 3.0)],
            vec![[1, 0], [0, 1]],
        );

        let expected = "\
Points:
  [0] (1.0000, -0.5000)
  [1] (0.2500, 3.0000)
Lines:
  [0] 1 -> 0
  [1] 0 -> 1
";
        assert_eq!(shape.to_string(), expected);
    }

    #[test]
    fn test_print_empty_shape() {
        let shape = Shape2D::new(Vec::new(), Vec::new());
        assert_eq!(shape.to_string(), "Points:\nLines:\n");
    }

    #[test]
    fn test_print_projected_vertex() {
        let model = Model3D::new(vec![Point3::new(1.0, 1.0, 1.0)], Vec::new());
        let text = project_shape(&model).to_string();
        assert!(text.contains("[0] (0.8333, 0.8333)"));
    }

    #[test]
    fn test_print_non_finite() {
        let shape = Shape2D::new(vec![Point2::new(f32::INFINITY, f32::NAN)], Vec::new());
        assert!(shape.to_string().contains("(inf, NaN)"));
    }
}
