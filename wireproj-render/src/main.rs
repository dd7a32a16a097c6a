//! Wireproj - project a wireframe model and render it to JPEG
//!
//! Reads the model and render parameters from `input.json`, prints the
//! projected shape and writes the image to `output.jpg`. Both paths can be
//! overridden on the command line.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use wireproj_core::{project_shape, InputData};
use wireproj_render::render_to_file;

#[derive(Debug, Parser)]
#[command(name = "wireproj")]
#[command(about = "Perspective-project a 3D wireframe and render it to a JPEG image.")]
struct Cli {
    /// JSON file with the model and render parameters
    #[arg(long, default_value = "input.json")]
    input: PathBuf,
    /// Destination image, overwritten if it exists
    #[arg(long, default_value = "output.jpg")]
    output: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let data = InputData::load(&cli.input)
        .with_context(|| format!("load input: {:?}", cli.input))?;
    let shape = project_shape(&data.model);
    print!("{shape}");

    render_to_file(&shape, &data.parameters, &cli.output)
        .with_context(|| format!("render image: {:?}", cli.output))?;
    println!("Image generated successfully: {}", cli.output.display());

    Ok(())
}
