use std::f64::consts::TAU;

use log::trace;

use crate::{
    ast::InstructionList,
    turtle::{
        actor::{Turtle, Turtle2, Turtle3},
        point::{Point2, Point3},
    },
    util::num::usize_to_f64,
    view::Bounds,
};

/// The ordered positions a turtle visited.
///
/// The first point is where the turtle started; every later point follows a
/// forward move. A path built from `n` forward instructions therefore holds
/// `n + 1` points.
#[derive(Debug, Clone, PartialEq)]
pub struct PointPath<P> {
    points: Vec<P>,
}

impl<P: Copy> PointPath<P> {
    #[must_use]
    pub const fn new() -> Self {
        Self { points: Vec::new() }
    }

    pub fn push(&mut self, point: P) {
        self.points.push(point);
    }

    #[must_use]
    pub fn points(&self) -> &[P] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<P> {
        self.points.first().copied()
    }

    #[must_use]
    pub fn last(&self) -> Option<P> {
        self.points.last().copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, P> {
        self.points.iter()
    }
}

impl<P: Copy> Default for PointPath<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl PointPath<Point2> {
    /// Bounding box of the path, or `None` if it has no points.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::of(&self.points)
    }
}

impl PointPath<Point3> {
    /// Drops the Z coordinate of every point.
    #[must_use]
    pub fn project_xy(&self) -> PointPath<Point2> {
        self.points.iter().map(|point| point.project_xy()).collect()
    }
}

impl<P> From<Vec<P>> for PointPath<P> {
    fn from(points: Vec<P>) -> Self {
        Self { points }
    }
}

impl<P> FromIterator<P> for PointPath<P> {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self { points: iter.into_iter().collect() }
    }
}

impl<P> IntoIterator for PointPath<P> {
    type IntoIter = std::vec::IntoIter<P>;
    type Item = P;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a, P> IntoIterator for &'a PointPath<P> {
    type IntoIter = std::slice::Iter<'a, P>;
    type Item = &'a P;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Replays `instructions` on `turtle` and samples its position.
///
/// The starting position is sampled first, then the position after each
/// forward move. Turns change the heading without adding a sample.
pub fn walk<T: Turtle>(mut turtle: T, instructions: &InstructionList) -> PointPath<T::Point> {
    let mut path = PointPath::new();
    path.push(turtle.position());

    for instruction in instructions {
        if turtle.execute(instruction) {
            let point = turtle.position();
            trace!("{instruction} -> {point}");
            path.push(point);
        }
    }

    path
}

/// Builds the planar path of a single turtle starting at the origin facing
/// +X.
///
/// # Example
/// ```
/// use turtle_logo::{
///     ast::{Instruction, InstructionList},
///     turtle::{path::build_path, point::Point2},
/// };
///
/// let instructions: InstructionList = vec![Instruction::Forward(20.0),
///                                          Instruction::TurnRight(90.0),
///                                          Instruction::Forward(20.0)].into();
/// let path = build_path(&instructions);
///
/// assert_eq!(path.len(), 3);
/// assert!(path.last().unwrap().distance_max(Point2::new(20.0, 20.0)) < 0.001);
/// ```
#[must_use]
pub fn build_path(instructions: &InstructionList) -> PointPath<Point2> {
    walk(Turtle2::new(), instructions)
}

/// Builds one planar path per turtle for `count` turtles.
///
/// Turtle `i` starts at the origin with heading `i / count` of a full turn,
/// so the paths fan out evenly. A count of zero yields no paths.
#[must_use]
pub fn build_fan(instructions: &InstructionList, count: usize) -> Vec<PointPath<Point2>> {
    let total = usize_to_f64(count);
    (0..count).map(|i| {
                  let heading = usize_to_f64(i) / total * TAU;
                  walk(Turtle2::with_heading(heading), instructions)
              })
              .collect()
}

/// Builds the spatial path of a single turtle.
///
/// Left and right turns rotate the azimuth, so a program without pitch
/// changes traces the same shape as [`build_path`] in the plane `z = 0`.
#[must_use]
pub fn build_path_3d(instructions: &InstructionList) -> PointPath<Point3> {
    walk(Turtle3::new(), instructions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Instruction;

    const EPSILON: f64 = 0.001;

    fn square_program() -> InstructionList {
        vec![Instruction::Forward(20.0),
             Instruction::TurnRight(90.0),
             Instruction::Forward(20.0),
             Instruction::TurnLeft(90.0),
             Instruction::Forward(20.0),
             Instruction::TurnRight(180.0),
             Instruction::Forward(40.0),
             Instruction::TurnRight(90.0),
             Instruction::Forward(20.0)].into()
    }

    fn assert_path(path: &PointPath<Point2>, expected: &[(f64, f64)]) {
        assert_eq!(path.len(), expected.len(), "path was {path:?}");
        for (point, &(x, y)) in path.iter().zip(expected) {
            assert!(point.distance_max(Point2::new(x, y)) < EPSILON,
                    "expected ({x}, {y}), got {point}");
        }
    }

    #[test]
    fn square_path() {
        let path = build_path(&square_program());
        assert_path(&path,
                    &[(0.0, 0.0), (20.0, 0.0), (20.0, 20.0), (40.0, 20.0), (0.0, 20.0), (0.0, 0.0)]);
    }

    #[test]
    fn one_point_per_forward_plus_start() {
        let program = square_program();
        assert_eq!(build_path(&program).len(), program.forward_count() + 1);
    }

    #[test]
    fn square_bounds() {
        let bounds = build_path(&square_program()).bounds().unwrap();
        assert!(bounds.min.distance_max(Point2::ORIGIN) < EPSILON);
        assert!(bounds.max.distance_max(Point2::new(40.0, 20.0)) < EPSILON);
    }

    #[test]
    fn empty_program_is_single_point() {
        let path = build_path(&InstructionList::new());
        assert_path(&path, &[(0.0, 0.0)]);
    }

    #[test]
    fn turns_alone_do_not_sample() {
        let program: InstructionList =
            vec![Instruction::TurnRight(45.0), Instruction::TurnLeft(10.0)].into();
        assert_eq!(build_path(&program).len(), 1);
    }

    #[test]
    fn fan_spreads_headings() {
        let program: InstructionList = vec![Instruction::Forward(10.0)].into();
        let paths = build_fan(&program, 4);

        assert_eq!(paths.len(), 4);
        let ends: Vec<Point2> = paths.iter().filter_map(PointPath::last).collect();
        assert!(ends[0].distance_max(Point2::new(10.0, 0.0)) < EPSILON);
        assert!(ends[1].distance_max(Point2::new(0.0, 10.0)) < EPSILON);
        assert!(ends[2].distance_max(Point2::new(-10.0, 0.0)) < EPSILON);
        assert!(ends[3].distance_max(Point2::new(0.0, -10.0)) < EPSILON);
    }

    #[test]
    fn fan_of_zero_is_empty() {
        assert!(build_fan(&square_program(), 0).is_empty());
    }

    #[test]
    fn spatial_path_matches_planar() {
        let program = square_program();
        let flat = build_path(&program);
        let projected = build_path_3d(&program).project_xy();

        assert_eq!(flat.len(), projected.len());
        for (a, b) in flat.iter().zip(&projected) {
            assert!(a.distance_max(*b) < EPSILON);
        }
    }
}
