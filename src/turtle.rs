/// The simulated actors.
///
/// A planar turtle with one heading angle and a spatial turtle with an
/// azimuth and a polar angle, both behind the [`actor::Turtle`] trait.
pub mod actor;
/// Angle helpers.
///
/// Degree/radian conversion and normalisation into `[0, 2π)`.
pub mod heading;
/// Path building.
///
/// Replays an instruction list on one or more turtles and samples their
/// positions into point paths.
pub mod path;
/// Points in two and three dimensions.
pub mod point;
