//! Rasterize projected shapes and write them out as JPEG
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::RgbImage;
use nalgebra::Point2;
use thiserror::Error;
use wireproj_core::{RenderParameters, Shape2D};

use crate::canvas::{Canvas, BLACK};

/// Border kept free on every side of the image, in pixels
pub const MARGIN: u32 = 50;
pub const STROKE_WIDTH: f32 = 3.0;
pub const MARKER_RADIUS: f32 = 5.0;
pub const JPEG_QUALITY: u8 = 100;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
    #[error("line {line} references a point that does not exist")]
    EdgeOutOfRange { line: usize },
}

/// Maps world coordinates onto the square output image, leaving
/// [`MARGIN`] pixels free on each side. Screen Y grows downwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub resolution: f32,
    pub margin: f32,
    pub x_min: f32,
    pub y_min: f32,
    pub scale_x: f32,
    pub scale_y: f32,
}

impl Viewport {
    pub fn new(parameters: &RenderParameters) -> Self {
        let resolution = parameters.resolution as f32;
        let margin = MARGIN as f32;
        let draw_area = resolution - 2.0 * margin;

        Self {
            resolution,
            margin,
            x_min: parameters.x_min,
            y_min: parameters.y_min,
            scale_x: draw_area / parameters.width(),
            scale_y: draw_area / parameters.height(),
        }
    }

    pub fn to_pixel(&self, world: &Point2<f32>) -> Point2<f32> {
        let x = (world.x - self.x_min) * self.scale_x + self.margin;
        let y = (world.y - self.y_min) * self.scale_y + self.margin;
        Point2::new(x, self.resolution - y)
    }
}

/// Draw every line of the shape, then a marker on every point
#[tracing::instrument(skip_all, fields(points = shape.point_count(), lines = shape.line_count()))]
pub fn render(shape: &Shape2D, parameters: &RenderParameters) -> Result<RgbImage, RenderError> {
    let viewport = Viewport::new(parameters);
    let mut canvas = Canvas::new(parameters.resolution, parameters.resolution);

    for line in 0..shape.line_count() {
        let (start, end) = shape
            .line_endpoints(line)
            .ok_or(RenderError::EdgeOutOfRange { line })?;
        canvas.stroke_line(
            viewport.to_pixel(&start),
            viewport.to_pixel(&end),
            STROKE_WIDTH,
            BLACK,
        );
    }

    for point in &shape.points {
        canvas.fill_circle(viewport.to_pixel(point), MARKER_RADIUS, BLACK);
    }

    tracing::info!("rendered shape");
    Ok(canvas.into_image())
}

pub fn encode_jpeg<W: Write>(image: &RgbImage, writer: W) -> Result<(), RenderError> {
    let mut encoder = JpegEncoder::new_with_quality(writer, JPEG_QUALITY);
    encoder.encode_image(image)?;
    Ok(())
}

/// Render the shape and write it to `path`, replacing any existing file
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn render_to_file(
    shape: &Shape2D,
    parameters: &RenderParameters,
    path: impl AsRef<Path>,
) -> Result<(), RenderError> {
    let image = render(shape, parameters)?;

    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    encode_jpeg(&image, &mut writer)?;
    writer.flush()?;

    tracing::info!("wrote image");
    Ok(())
}
