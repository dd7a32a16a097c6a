//! Example: project and render the built-in wireframe cube
//!
//! Usage: cargo run --example render_cube -- [output.jpg]

use std::env;

use anyhow::Result;
use wireproj_core::{project_shape, Model3D, RenderParameters};
use wireproj_render::render_to_file;

fn main() -> Result<()> {
    let output = env::args().nth(1).unwrap_or_else(|| "cube.jpg".to_string());

    let cube = Model3D::cube(2.0);
    let shape = project_shape(&cube);
    print!("{shape}");

    let parameters = RenderParameters::new(500, -2.0, 2.0, -2.0, 2.0);
    render_to_file(&shape, &parameters, &output)?;

    println!("Wrote {}", output);
    Ok(())
}
