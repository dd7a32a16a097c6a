//! Raster output for projected wireframes
//!
//! Maps a projected shape from world coordinates into pixel space, draws its
//! lines and vertex markers onto an in-memory surface, and encodes the result
//! as JPEG.

pub mod canvas;
pub mod rasterizer;

pub use canvas::Canvas;
pub use rasterizer::{encode_jpeg, render, render_to_file, RenderError, Viewport};
