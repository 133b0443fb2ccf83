//! SVG output for turtle paths.
//!
//! Every path is fitted into the window together, mapped to screen
//! coordinates with a [`Scaler`], and drawn as one polyline. Screen Y already
//! points down after [`Scaler::to_screen`], so no transform is set on the
//! document.

use std::fmt::Write as _;

use svg::{
    Document,
    node::element::{Polyline, Rectangle},
};

use crate::{
    error::ViewError,
    turtle::{path::PointPath, point::Point2},
    view::{Scaler, ViewConfig},
};

const BACKGROUND: &str = "#101010";
const STROKE_COLOURS: [&str; 6] = ["#f0f0f0", "#ff6b6b", "#4ecdc4", "#ffe66d", "#a29bfe", "#55efc4"];
const STROKE_WIDTH: f64 = 1.5;

/// Renders `paths` into an SVG document sized to the configured window.
///
/// # Errors
/// Any [`ViewError`] from fitting the paths to the window.
///
/// # Example
/// ```
/// use turtle_logo::{parse, render::to_svg, turtle::path::build_path, view::ViewConfig};
///
/// let program = parse("{ FD 20 RT 90 FD 20 }").unwrap();
/// let path = build_path(&program.instructions);
/// let document = to_svg(&[path], &ViewConfig::default()).unwrap();
///
/// assert!(document.to_string().contains("<polyline"));
/// ```
pub fn to_svg(paths: &[PointPath<Point2>], config: &ViewConfig) -> Result<Document, ViewError> {
    let scaler = Scaler::fit_all(paths, config)?;
    Ok(to_svg_with(paths, &scaler, config))
}

/// Renders `paths` with an already fitted (and possibly zoomed or rotated)
/// scaler.
#[must_use]
pub fn to_svg_with(paths: &[PointPath<Point2>], scaler: &Scaler, config: &ViewConfig) -> Document {
    let background = Rectangle::new().set("x", 0)
                                     .set("y", 0)
                                     .set("width", config.width)
                                     .set("height", config.height)
                                     .set("fill", BACKGROUND);

    let mut document = Document::new().set("xmlns", "http://www.w3.org/2000/svg")
                                      .set("viewBox",
                                           format!("0 0 {} {}", config.width, config.height))
                                      .set("width", config.width)
                                      .set("height", config.height)
                                      .add(background);

    for (index, path) in paths.iter().enumerate() {
        let colour = STROKE_COLOURS[index % STROKE_COLOURS.len()];
        let line = Polyline::new().set("points", points_attribute(&scaler.project(path)))
                                  .set("fill", "none")
                                  .set("stroke", colour)
                                  .set("stroke-width", STROKE_WIDTH)
                                  .set("stroke-linejoin", "round");
        document = document.add(line);
    }

    document
}

fn points_attribute(path: &PointPath<Point2>) -> String {
    let mut points = String::new();
    for point in path {
        if !points.is_empty() {
            points.push(' ');
        }
        let _ = write!(points, "{:.3},{:.3}", point.x, point.y);
    }
    points
}
