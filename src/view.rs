use std::f64::consts::TAU;

use log::debug;
use ordered_float::OrderedFloat;

use crate::{
    error::ViewError,
    turtle::{
        heading::{degrees_to_radians, normalize},
        path::PointPath,
        point::Point2,
    },
};

/// Window and scaling settings for drawing a path.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewConfig {
    /// Window width in pixels.
    pub width:                u32,
    /// Window height in pixels.
    pub height:               u32,
    /// Share of the window the path spans when first fitted, in `(0, 1]`.
    pub fill_fraction:        f64,
    /// Scale each axis on its own instead of keeping the aspect ratio.
    pub stretch_to_fit:       bool,
    /// Relative change of scale per zoom step.
    pub zoom_sensitivity:     f64,
    /// Fraction of a full turn per rotation step.
    pub rotation_sensitivity: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self { width:                900,
               height:               660,
               fill_fraction:        0.9,
               stretch_to_fit:       false,
               zoom_sensitivity:     0.05,
               rotation_sensitivity: 0.01, }
    }
}

impl ViewConfig {
    /// Checks that the window has an area and the fill fraction is usable.
    pub fn validate(&self) -> Result<(), ViewError> {
        if self.width == 0 || self.height == 0 {
            return Err(ViewError::InvalidWindow { width:  self.width,
                                                  height: self.height, });
        }
        if !(self.fill_fraction > 0.0 && self.fill_fraction <= 1.0) {
            return Err(ViewError::InvalidFillFraction { fraction: self.fill_fraction });
        }
        Ok(())
    }

    fn window(&self) -> Point2 {
        Point2::new(f64::from(self.width), f64::from(self.height))
    }
}

/// Axis-aligned bounding box of a set of points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Point2,
    pub max: Point2,
}

impl Bounds {
    /// Smallest box holding every point, or `None` for no points.
    #[must_use]
    pub fn of<'a, I>(points: I) -> Option<Self>
        where I: IntoIterator<Item = &'a Point2>
    {
        let mut points = points.into_iter().peekable();
        points.peek()?;

        let (mut min_x, mut min_y) = (OrderedFloat(f64::INFINITY), OrderedFloat(f64::INFINITY));
        let (mut max_x, mut max_y) =
            (OrderedFloat(f64::NEG_INFINITY), OrderedFloat(f64::NEG_INFINITY));
        for point in points {
            min_x = min_x.min(OrderedFloat(point.x));
            min_y = min_y.min(OrderedFloat(point.y));
            max_x = max_x.max(OrderedFloat(point.x));
            max_y = max_y.max(OrderedFloat(point.y));
        }

        Some(Self { min: Point2::new(min_x.0, min_y.0),
                    max: Point2::new(max_x.0, max_y.0), })
    }

    #[must_use]
    pub fn span(&self) -> Point2 {
        Point2::new(self.max.x - self.min.x, self.max.y - self.min.y)
    }

    #[must_use]
    pub fn centre(&self) -> Point2 {
        Point2::new(f64::midpoint(self.min.x, self.max.x), f64::midpoint(self.min.y, self.max.y))
    }
}

/// Maps path coordinates to window pixels.
///
/// A scaler centres the path's bounding box on the window and scales it to
/// fill the configured share of the window. Zooming and rotating adjust the
/// mapping afterwards without refitting. Screen Y grows downward, so turtle
/// +Y is drawn upward.
#[derive(Debug, Clone, PartialEq)]
pub struct Scaler {
    scale:                Point2,
    path_centre:          Point2,
    window_centre:        Point2,
    rotation:             f64,
    zoom_sensitivity:     f64,
    rotation_sensitivity: f64,
}

impl Scaler {
    /// Fits the scaler to `path` in the window described by `config`.
    ///
    /// An axis along which the path has no extent borrows the other axis'
    /// scale; a path that is a single point gets a scale of 1.
    ///
    /// # Parameters
    /// - `path`: The points to fit.
    /// - `config`: Window size and scaling preferences.
    ///
    /// # Returns
    /// A scaler placing every point inside the window.
    ///
    /// # Errors
    /// - [`ViewError::InvalidWindow`] or [`ViewError::InvalidFillFraction`]
    ///   if `config` is unusable.
    /// - [`ViewError::EmptyPath`] if `path` holds no points.
    pub fn fit(path: &PointPath<Point2>, config: &ViewConfig) -> Result<Self, ViewError> {
        Self::fit_points(path.points(), config)
    }

    /// Fits the scaler to every point of several paths at once.
    pub fn fit_all(paths: &[PointPath<Point2>], config: &ViewConfig) -> Result<Self, ViewError> {
        let points: Vec<Point2> = paths.iter().flat_map(PointPath::iter).copied().collect();
        Self::fit_points(&points, config)
    }

    fn fit_points(points: &[Point2], config: &ViewConfig) -> Result<Self, ViewError> {
        config.validate()?;
        let bounds = Bounds::of(points).ok_or(ViewError::EmptyPath)?;
        let window = config.window();
        let span = bounds.span();

        let axis_scale = |window: f64, span: f64| {
            (span > 0.0).then(|| config.fill_fraction * window / span)
        };
        let (scale_x, scale_y) = match (axis_scale(window.x, span.x), axis_scale(window.y, span.y)) {
            (Some(x), Some(y)) if config.stretch_to_fit => (x, y),
            (Some(x), Some(y)) => {
                let smaller = x.min(y);
                (smaller, smaller)
            },
            (Some(x), None) => (x, x),
            (None, Some(y)) => (y, y),
            (None, None) => (1.0, 1.0),
        };
        debug!("fitted {} points: span {span}, scale ({scale_x}, {scale_y})", points.len());

        Ok(Self { scale:                Point2::new(scale_x, scale_y),
                  path_centre:          bounds.centre(),
                  window_centre:        Point2::new(window.x / 2.0, window.y / 2.0),
                  rotation:             0.0,
                  zoom_sensitivity:     config.zoom_sensitivity,
                  rotation_sensitivity: config.rotation_sensitivity, })
    }

    /// Pixels per path unit along each axis.
    #[must_use]
    pub const fn scale(&self) -> Point2 {
        self.scale
    }

    /// Clockwise rotation of the drawing in radians, in `[0, 2π)`.
    #[must_use]
    pub const fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Grows or shrinks the scale by one zoom step.
    pub fn zoom(&mut self, zoom_in: bool) {
        let factor = if zoom_in {
            1.0 + self.zoom_sensitivity
        } else {
            1.0 - self.zoom_sensitivity
        };
        self.scale.x *= factor;
        self.scale.y *= factor;
    }

    /// Zooms `steps` times; negative steps zoom out.
    pub fn zoom_by(&mut self, steps: i64) {
        let zoom_in = steps > 0;
        for _ in 0..steps.unsigned_abs() {
            self.zoom(zoom_in);
        }
    }

    /// Turns the drawing by one rotation step.
    pub fn rotate(&mut self, clockwise: bool) {
        let step = TAU * self.rotation_sensitivity;
        let delta = if clockwise { step } else { -step };
        self.rotation = normalize(self.rotation + delta);
    }

    /// Turns the drawing clockwise by `degrees`.
    pub fn rotate_degrees(&mut self, degrees: f64) {
        self.rotation = normalize(self.rotation + degrees_to_radians(degrees));
    }

    /// Maps a path point to window coordinates.
    #[must_use]
    pub fn to_screen(&self, point: Point2) -> Point2 {
        let dx = (point.x - self.path_centre.x) * self.scale.x;
        let dy = (point.y - self.path_centre.y) * self.scale.y;
        let (sin, cos) = self.rotation.sin_cos();

        let x = cos.mul_add(dx, sin * dy);
        let y = cos.mul_add(dy, -sin * dx);
        Point2::new(self.window_centre.x + x, self.window_centre.y - y)
    }

    /// Maps every point of `path` to window coordinates.
    #[must_use]
    pub fn project(&self, path: &PointPath<Point2>) -> PointPath<Point2> {
        path.iter().map(|&point| self.to_screen(point)).collect()
    }
}
