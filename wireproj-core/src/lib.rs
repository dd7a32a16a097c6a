//! Wireproj Core Library - wireframe geometry and projection
//!
//! This library provides the stateless part of the pipeline: loading a
//! wireframe model with its render parameters from JSON, projecting it onto
//! the picture plane, and printing the projected shape.

pub mod geometry;
pub mod input;
pub mod printer;
pub mod projection;

// Re-export commonly used types
pub use geometry::{Edge, Model3D, Shape2D};
pub use input::{InputData, LoadError, RenderParameters};
pub use projection::{project_shape, Projector, DEFAULT_DISTANCE};
