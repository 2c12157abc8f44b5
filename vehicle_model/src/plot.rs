//! Trajectory plot rendering
//!
//! Renders recorded poses, points and waypoint polylines into a PNG image.
//! The world-to-pixel mapping auto-scales to the bounding box of the
//! recorded content with equal axis scaling, so the rendered frame matches
//! whatever trajectory was driven.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use image::{Rgb, RgbImage};
use log::debug;
use nalgebra::Vector2;
use thiserror::Error;

// Internal
use crate::Pose;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Colour scheme for the trajectory plot.
#[derive(Debug, Clone)]
pub struct PlotColourScheme {
    /// Image background
    pub background: Rgb<u8>,

    /// Metric grid lines
    pub grid: Rgb<u8>,

    /// Initial pose arrow
    pub start: Rgb<u8>,

    /// Goal pose arrow
    pub goal: Rgb<u8>,

    /// Periodic pose sample arrows and dots
    pub sample: Rgb<u8>,

    /// Waypoint polylines
    pub track: Rgb<u8>,
}

/// Configuration for the trajectory plot.
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// Length of the longest image side in pixels.
    pub img_size_px: u32,

    /// Padding between the content bounding box and the image edge.
    pub padding_px: f64,

    /// Margin added around the content bounding box.
    ///
    /// Units: meters
    pub margin_m: f64,

    /// Length of a pose arrow.
    ///
    /// Units: meters
    pub arrow_len_m: f64,

    /// Spacing of the background grid lines.
    ///
    /// Units: meters
    pub grid_spacing_m: f64,

    /// Colour scheme
    pub colours: PlotColourScheme,
}

/// A trajectory plot accumulating world-space shapes for rendering.
#[derive(Debug, Clone, Default)]
pub struct TrajPlot {
    config: PlotConfig,
    shapes: Vec<Shape>,
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Possible errors during plot rendering.
#[derive(Debug, Error)]
pub enum PlotError {
    /// The plot has no recorded content so no bounding box can be derived.
    #[error("Cannot render an empty plot")]
    NoContent,

    #[error("Could not write the image: {0}")]
    ImageError(#[from] image::ImageError),
}

/// A recorded world-space shape.
#[derive(Debug, Clone)]
enum Shape {
    Arrow { pose: Pose, colour: Rgb<u8> },
    Point { pos: Vector2<f64>, colour: Rgb<u8> },
    Polyline { points: Vec<Vector2<f64>>, colour: Rgb<u8> },
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Default for PlotColourScheme {
    fn default() -> Self {
        Self {
            background: Rgb([255, 255, 255]),
            grid: Rgb([220, 220, 220]),
            start: Rgb([200, 30, 30]),
            goal: Rgb([30, 30, 200]),
            sample: Rgb([30, 160, 30]),
            track: Rgb([0, 0, 0]),
        }
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            img_size_px: 800,
            padding_px: 40.0,
            margin_m: 0.5,
            arrow_len_m: 0.3,
            grid_spacing_m: 1.0,
            colours: PlotColourScheme::default(),
        }
    }
}

impl TrajPlot {
    /// Create a new empty plot with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: PlotConfig) -> Self {
        Self {
            config,
            shapes: Vec::new(),
        }
    }

    /// Get the plot's colour scheme, for callers picking shape colours.
    pub fn colours(&self) -> PlotColourScheme {
        self.config.colours.clone()
    }

    /// Record a pose arrow.
    pub fn add_arrow(&mut self, pose: &Pose, colour: Rgb<u8>) {
        self.shapes.push(Shape::Arrow {
            pose: *pose,
            colour,
        });
    }

    /// Record a position dot.
    pub fn add_point(&mut self, pos: &Vector2<f64>, colour: Rgb<u8>) {
        self.shapes.push(Shape::Point { pos: *pos, colour });
    }

    /// Record a polyline through the given positions, with a dot at each one.
    pub fn add_polyline(&mut self, points: &[Vector2<f64>], colour: Rgb<u8>) {
        self.shapes.push(Shape::Polyline {
            points: points.to_vec(),
            colour,
        });
    }

    /// Render the plot into an image.
    pub fn render(&self) -> Result<RgbImage, PlotError> {
        // Get the bounding box of the recorded content
        let (min, max) = match self.bounds() {
            Some(b) => b,
            None => return Err(PlotError::NoContent),
        };

        let width_m = (max[0] - min[0]).max(1e-6);
        let height_m = (max[1] - min[1]).max(1e-6);

        // Equal axis scaling, sized so the longest side fits the image
        let scale = (self.config.img_size_px as f64 - 2.0 * self.config.padding_px)
            / width_m.max(height_m);

        let img_width = (width_m * scale + 2.0 * self.config.padding_px).ceil() as u32;
        let img_height = (height_m * scale + 2.0 * self.config.padding_px).ceil() as u32;

        let mut img = RgbImage::from_pixel(img_width, img_height, self.config.colours.background);

        // World to pixel mapping, with the image Y axis flipped so world Y+
        // points up the image.
        let to_px = |p: &Vector2<f64>| -> (f64, f64) {
            (
                self.config.padding_px + (p[0] - min[0]) * scale,
                img_height as f64 - self.config.padding_px - (p[1] - min[1]) * scale,
            )
        };

        self.draw_grid(&mut img, &min, &max, &to_px);

        for shape in &self.shapes {
            match shape {
                Shape::Point { pos, colour } => {
                    draw_marker(&mut img, to_px(pos), *colour);
                }
                Shape::Polyline { points, colour } => {
                    for pair in points.windows(2) {
                        draw_line(&mut img, to_px(&pair[0]), to_px(&pair[1]), *colour);
                    }
                    for p in points {
                        draw_marker(&mut img, to_px(p), *colour);
                    }
                }
                Shape::Arrow { pose, colour } => {
                    let tip = pose.position_m + pose.forward2() * self.config.arrow_len_m;

                    draw_line(&mut img, to_px(&pose.position_m), to_px(&tip), *colour);

                    // Barbs at 150 degrees either side of the heading
                    let barb_len = 0.3 * self.config.arrow_len_m;
                    for barb_rad in &[2.618, -2.618] {
                        let angle = pose.heading_rad + barb_rad;
                        let barb =
                            tip + Vector2::new(angle.cos(), angle.sin()) * barb_len;
                        draw_line(&mut img, to_px(&tip), to_px(&barb), *colour);
                    }
                }
            }
        }

        Ok(img)
    }

    /// Render the plot and save it as a PNG at the given path.
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), PlotError> {
        let img = self.render()?;

        debug!(
            "Rendered {} shapes into a {}x{} px image",
            self.shapes.len(),
            img.width(),
            img.height()
        );

        img.save(path)?;
        Ok(())
    }

    /// Get the bounding box of all recorded content, including the margin.
    ///
    /// `None` is returned if nothing has been recorded.
    fn bounds(&self) -> Option<(Vector2<f64>, Vector2<f64>)> {
        let mut min = Vector2::new(f64::INFINITY, f64::INFINITY);
        let mut max = Vector2::new(f64::NEG_INFINITY, f64::NEG_INFINITY);

        let mut extend = |p: &Vector2<f64>| {
            min[0] = min[0].min(p[0]);
            min[1] = min[1].min(p[1]);
            max[0] = max[0].max(p[0]);
            max[1] = max[1].max(p[1]);
        };

        for shape in &self.shapes {
            match shape {
                Shape::Arrow { pose, .. } => extend(&pose.position_m),
                Shape::Point { pos, .. } => extend(pos),
                Shape::Polyline { points, .. } => {
                    for p in points {
                        extend(p)
                    }
                }
            }
        }

        if min[0].is_finite() {
            let margin = Vector2::new(self.config.margin_m, self.config.margin_m);
            Some((min - margin, max + margin))
        } else {
            None
        }
    }

    /// Draw the metric grid lines into the image.
    fn draw_grid<F>(&self, img: &mut RgbImage, min: &Vector2<f64>, max: &Vector2<f64>, to_px: &F)
    where
        F: Fn(&Vector2<f64>) -> (f64, f64),
    {
        let spacing = self.config.grid_spacing_m;
        let colour = self.config.colours.grid;

        let mut x = (min[0] / spacing).ceil() * spacing;
        while x <= max[0] {
            draw_line(
                img,
                to_px(&Vector2::new(x, min[1])),
                to_px(&Vector2::new(x, max[1])),
                colour,
            );
            x += spacing;
        }

        let mut y = (min[1] / spacing).ceil() * spacing;
        while y <= max[1] {
            draw_line(
                img,
                to_px(&Vector2::new(min[0], y)),
                to_px(&Vector2::new(max[0], y)),
                colour,
            );
            y += spacing;
        }
    }
}

// ---------------------------------------------------------------------------
// PRIVATE FUNCTIONS
// ---------------------------------------------------------------------------

/// Draw a line between two pixel-space points by sampling along its length.
fn draw_line(img: &mut RgbImage, from: (f64, f64), to: (f64, f64), colour: Rgb<u8>) {
    let dx = to.0 - from.0;
    let dy = to.1 - from.1;
    let num_samples = dx.abs().max(dy.abs()).ceil().max(1.0) as usize;

    for i in 0..=num_samples {
        let t = i as f64 / num_samples as f64;
        put_pixel_checked(
            img,
            (from.0 + t * dx).round() as i64,
            (from.1 + t * dy).round() as i64,
            colour,
        );
    }
}

/// Draw a small square marker centred on the given pixel-space point.
fn draw_marker(img: &mut RgbImage, at: (f64, f64), colour: Rgb<u8>) {
    let cx = at.0.round() as i64;
    let cy = at.1.round() as i64;

    for x in (cx - 1)..=(cx + 1) {
        for y in (cy - 1)..=(cy + 1) {
            put_pixel_checked(img, x, y, colour);
        }
    }
}

/// Set a pixel if it lies within the image.
fn put_pixel_checked(img: &mut RgbImage, x: i64, y: i64, colour: Rgb<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, colour);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_render_empty_plot() {
        let plot = TrajPlot::new();
        assert!(matches!(plot.render(), Err(PlotError::NoContent)));
    }

    #[test]
    fn test_render_scaling() {
        let mut plot = TrajPlot::new();
        plot.add_point(&Vector2::new(0.0, 0.0), plot.colours().sample);
        plot.add_point(&Vector2::new(4.0, 2.0), plot.colours().sample);

        let img = plot.render().unwrap();

        // The longest (x) side should fill the configured image size, the
        // shorter side scales down with the equal-axis mapping
        let config = PlotConfig::default();
        assert_eq!(img.width(), config.img_size_px);
        assert!(img.height() < img.width());

        // Corner pixel is background (no content at the corner)
        assert_eq!(*img.get_pixel(0, 0), config.colours.background);
    }

    #[test]
    fn test_marker_rendered_at_content() {
        let mut plot = TrajPlot::new();
        let colour = plot.colours().track;
        plot.add_point(&Vector2::new(0.0, 0.0), colour);
        plot.add_point(&Vector2::new(1.0, 1.0), colour);

        let img = plot.render().unwrap();

        // At least some pixels should carry the marker colour
        let num_marked = img.pixels().filter(|p| **p == colour).count();
        assert!(num_marked >= 9);
    }
}
