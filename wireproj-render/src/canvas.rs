//! Anti-aliased drawing surface over an RGB pixel buffer
use image::{Rgb, RgbImage};
use nalgebra::Point2;

pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Drawing surface. Coordinates are in pixels with the origin at the top-left
/// corner; pixel `(x, y)` covers `[x, x + 1) x [y, y + 1)`.
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    /// Create a surface filled with white
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, WHITE),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgb<u8> {
        *self.image.get_pixel(x, y)
    }

    /// Stroke a straight line with butt caps
    pub fn stroke_line(&mut self, from: Point2<f32>, to: Point2<f32>, width: f32, color: Rgb<u8>) {
        if !is_finite(&from) || !is_finite(&to) {
            tracing::debug!(?from, ?to, "skipping line with non-finite endpoint");
            return;
        }
        if from == to {
            return;
        }

        // Stroking is symmetric; a fixed endpoint order keeps the result
        // independent of edge direction.
        let (from, to) = if (from.x, from.y) <= (to.x, to.y) {
            (from, to)
        } else {
            (to, from)
        };

        let half_width = f64::from(width) / 2.0;
        let pad = half_width + 2.0;
        let Some((start, end)) = self.clip_segment(from.cast(), to.cast(), pad) else {
            return;
        };

        let direction = end - start;
        let length = direction.norm();
        if length == 0.0 {
            return;
        }
        let unit = direction / length;

        let min = Point2::new(start.x.min(end.x) as f32, start.y.min(end.y) as f32);
        let max = Point2::new(start.x.max(end.x) as f32, start.y.max(end.y) as f32);
        self.shade(min, max, half_width as f32 + 1.0, color, |p| {
            let offset = p.cast::<f64>() - start;
            let along = offset.dot(&unit);
            let across = (offset.x * unit.y - offset.y * unit.x).abs();

            let across_coverage = half_width + 0.5 - across;
            let along_coverage = along.min(length - along) + 0.5;
            (across_coverage.clamp(0.0, 1.0) * along_coverage.clamp(0.0, 1.0)) as f32
        });
    }

    /// Fill a disc
    pub fn fill_circle(&mut self, center: Point2<f32>, radius: f32, color: Rgb<u8>) {
        if !is_finite(&center) {
            tracing::debug!(?center, "skipping circle with non-finite centre");
            return;
        }

        self.shade(center, center, radius + 1.0, color, |p| {
            (radius + 0.5 - nalgebra::distance(&p, &center)).clamp(0.0, 1.0)
        });
    }

    /// Release the pixel buffer
    pub fn into_image(self) -> RgbImage {
        self.image
    }

    /// Blend `color` into every pixel of the box `[min - pad, max + pad]`
    /// clipped to the surface, weighted by the coverage of its centre.
    fn shade<F>(&mut self, min: Point2<f32>, max: Point2<f32>, pad: f32, color: Rgb<u8>, coverage: F)
    where
        F: Fn(Point2<f32>) -> f32,
    {
        let (width, height) = self.image.dimensions();
        if width == 0 || height == 0 {
            return;
        }

        // Clip to screen bounds
        let min_x = (min.x - pad).floor().max(0.0);
        let min_y = (min.y - pad).floor().max(0.0);
        let max_x = (max.x + pad).ceil().min(width as f32 - 1.0);
        let max_y = (max.y + pad).ceil().min(height as f32 - 1.0);
        if min_x > max_x || min_y > max_y {
            return;
        }

        for y in min_y as u32..=max_y as u32 {
            for x in min_x as u32..=max_x as u32 {
                let center = Point2::new(x as f32 + 0.5, y as f32 + 0.5);
                let alpha = coverage(center);
                if alpha > 0.0 {
                    blend(self.image.get_pixel_mut(x, y), color, alpha);
                }
            }
        }
    }

    /// Clip a segment to the surface grown by `pad` on every side
    /// (Liang-Barsky). Ends cut by the clip lie at least `pad` outside the
    /// surface, so no cap is drawn there.
    fn clip_segment(
        &self,
        from: Point2<f64>,
        to: Point2<f64>,
        pad: f64,
    ) -> Option<(Point2<f64>, Point2<f64>)> {
        let (width, height) = self.image.dimensions();
        let delta = to - from;
        let bounds = [
            (-delta.x, from.x + pad),
            (delta.x, f64::from(width) + pad - from.x),
            (-delta.y, from.y + pad),
            (delta.y, f64::from(height) + pad - from.y),
        ];

        let (mut t0, mut t1) = (0.0_f64, 1.0_f64);
        for (p, q) in bounds {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
                continue;
            }
            let t = q / p;
            if p < 0.0 {
                t0 = t0.max(t);
            } else {
                t1 = t1.min(t);
            }
            if t0 > t1 {
                return None;
            }
        }

        Some((from + delta * t0, from + delta * t1))
    }
}

fn is_finite(point: &Point2<f32>) -> bool {
    point.x.is_finite() && point.y.is_finite()
}

fn blend(pixel: &mut Rgb<u8>, color: Rgb<u8>, alpha: f32) {
    for (dst, src) in pixel.0.iter_mut().zip(color.0) {
        let mixed = *dst as f32 + (src as f32 - *dst as f32) * alpha;
        *dst = mixed.round().clamp(0.0, 255.0) as u8;
    }
}
