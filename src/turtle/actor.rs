use std::{f64::consts::FRAC_PI_2, fmt};

use crate::{
    ast::Instruction,
    turtle::{
        heading::{degrees_to_radians, normalize},
        point::{Point2, Point3},
    },
};

/// A position-and-heading actor that instructions drive.
pub trait Turtle {
    /// The kind of point the turtle's position is.
    type Point: Copy + fmt::Display;

    /// Where the turtle is.
    fn position(&self) -> Self::Point;

    /// Moves `distance` units along the current heading.
    fn forward(&mut self, distance: f64);

    /// Turns by `radians`; positive turns right.
    fn turn(&mut self, radians: f64);

    /// Carries out one instruction.
    ///
    /// Returns `true` if the turtle moved, which is when a path builder takes
    /// a sample.
    fn execute(&mut self, instruction: &Instruction) -> bool {
        match *instruction {
            Instruction::Forward(distance) => {
                self.forward(distance);
                true
            },
            Instruction::TurnRight(degrees) => {
                self.turn(degrees_to_radians(degrees));
                false
            },
            Instruction::TurnLeft(degrees) => {
                self.turn(-degrees_to_radians(degrees));
                false
            },
        }
    }
}

/// A turtle in the plane.
///
/// The heading is the angle from the positive X axis, kept in `[0, 2π)`.
/// Turning right makes it grow.
#[derive(Debug, Clone, PartialEq)]
pub struct Turtle2 {
    position:  Point2,
    heading:   f64,
    direction: Point2,
}

impl Default for Turtle2 {
    fn default() -> Self {
        Self::new()
    }
}

impl Turtle2 {
    /// A turtle at the origin facing along +X.
    #[must_use]
    pub fn new() -> Self {
        Self::with_heading(0.0)
    }

    /// A turtle at the origin with the given heading in radians.
    #[must_use]
    pub fn with_heading(heading: f64) -> Self {
        let heading = normalize(heading);
        Self { position: Point2::ORIGIN,
               heading,
               direction: Self::direction_of(heading) }
    }

    #[must_use]
    pub const fn heading(&self) -> f64 {
        self.heading
    }

    /// Unit vector pointing where the turtle faces.
    #[must_use]
    pub const fn direction(&self) -> Point2 {
        self.direction
    }

    fn direction_of(heading: f64) -> Point2 {
        Point2::new(heading.cos(), heading.sin())
    }
}

impl Turtle for Turtle2 {
    type Point = Point2;

    fn position(&self) -> Point2 {
        self.position
    }

    fn forward(&mut self, distance: f64) {
        self.position.x += distance * self.direction.x;
        self.position.y += distance * self.direction.y;
    }

    fn turn(&mut self, radians: f64) {
        self.heading = normalize(self.heading + radians);
        self.direction = Self::direction_of(self.heading);
    }
}

/// A turtle in space.
///
/// `theta` is the azimuth in the XY plane and `phi` the polar angle from +Z,
/// both kept in `[0, 2π)`. It starts with `theta = 0` and `phi = π/2`, so it
/// faces +X in the XY plane. Left and right turns change `theta`;
/// [`Turtle3::pitch`] changes `phi`.
#[derive(Debug, Clone, PartialEq)]
pub struct Turtle3 {
    position:  Point3,
    theta:     f64,
    phi:       f64,
    direction: Point3,
}

impl Default for Turtle3 {
    fn default() -> Self {
        Self::new()
    }
}

impl Turtle3 {
    #[must_use]
    pub fn new() -> Self {
        Self { position:  Point3::ORIGIN,
               theta:     0.0,
               phi:       FRAC_PI_2,
               direction: Self::direction_of(0.0, FRAC_PI_2), }
    }

    #[must_use]
    pub const fn theta(&self) -> f64 {
        self.theta
    }

    #[must_use]
    pub const fn phi(&self) -> f64 {
        self.phi
    }

    #[must_use]
    pub const fn direction(&self) -> Point3 {
        self.direction
    }

    /// Tilts the heading by `radians`; positive tilts down, away from +Z.
    pub fn pitch(&mut self, radians: f64) {
        self.phi = normalize(self.phi + radians);
        self.direction = Self::direction_of(self.theta, self.phi);
    }

    fn direction_of(theta: f64, phi: f64) -> Point3 {
        Point3::new(phi.sin() * theta.cos(), phi.sin() * theta.sin(), phi.cos())
    }
}

impl Turtle for Turtle3 {
    type Point = Point3;

    fn position(&self) -> Point3 {
        self.position
    }

    fn forward(&mut self, distance: f64) {
        self.position.x += distance * self.direction.x;
        self.position.y += distance * self.direction.y;
        self.position.z += distance * self.direction.z;
    }

    fn turn(&mut self, radians: f64) {
        self.theta = normalize(self.theta + radians);
        self.direction = Self::direction_of(self.theta, self.phi);
    }
}
