//! Plane-geometry value objects: [Point] and [Circle].
//!
//! These types are independent of the bookkeeping half of the crate. They
//! demonstrate arithmetic through the standard operator traits, structural
//! equality, and a handful of derived measurements.

use std::{
    fmt::Display,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign},
};

/// A 2D Cartesian coordinate.
///
/// Coordinates are plain public fields and may be mutated in place. The
/// by-value operators (`+`, `-`, `*`, `/`) each produce a new point; the
/// compound-assignment operators (`+=` and friends) mutate the receiver.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// The horizontal coordinate.
    pub x: f64,
    /// The vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Create a point at the given coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Divide both coordinates by `n`, flooring the results.
    ///
    /// There is no floor-division operator to overload, so this lives
    /// alongside the `/` operator as a named method.
    pub fn floor_div(self, n: f64) -> Self {
        Self {
            x: (self.x / n).floor(),
            y: (self.y / n).floor(),
        }
    }

    /// The Euclidean distance between this point and the origin.
    pub fn distance_from_origin(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, other: Point) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, other: Point) {
        self.x -= other.x;
        self.y -= other.y;
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, n: f64) -> Point {
        Point::new(self.x * n, self.y * n)
    }
}

impl MulAssign<f64> for Point {
    fn mul_assign(&mut self, n: f64) {
        self.x *= n;
        self.y *= n;
    }
}

impl Div<f64> for Point {
    type Output = Point;

    fn div(self, n: f64) -> Point {
        Point::new(self.x / n, self.y / n)
    }
}

impl DivAssign<f64> for Point {
    fn div_assign(&mut self, n: f64) {
        self.x /= n;
        self.y /= n;
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A circle positioned on the plane.
///
/// A circle holds its centre [Point] by composition rather than subtyping:
/// arithmetic stays a point capability, reachable through
/// [Circle::center], while the circle adds the radius and the measurements
/// derived from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// The radius of the circle.
    pub radius: f64,
    /// The centre of the circle.
    pub center: Point,
}

impl Circle {
    /// Create a circle with `radius` centred at (`x`, `y`).
    pub fn new(radius: f64, x: f64, y: f64) -> Self {
        Self {
            radius,
            center: Point::new(x, y),
        }
    }

    /// The area enclosed by the circle.
    pub fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }

    /// The length of the circle's boundary.
    pub fn circumference(&self) -> f64 {
        2.0 * std::f64::consts::PI * self.radius
    }

    /// The distance between the circle's edge and the origin.
    ///
    /// Zero when the boundary passes through the origin, regardless of
    /// whether the origin lies inside or outside the circle.
    pub fn edge_distance_from_origin(&self) -> f64 {
        (self.center.distance_from_origin() - self.radius).abs()
    }
}

impl Display for Circle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Circle({}, {}, {})", self.radius, self.center.x, self.center.y)
    }
}

#[cfg(test)]
mod point_tests {
    use super::Point;

    #[test]
    fn add_and_sub_are_inverses() {
        let p = Point::new(1.5, -3.0);
        let q = Point::new(2.0, 4.25);

        assert_eq!((p + q) - q, p);
    }

    #[test]
    fn add_is_component_wise() {
        assert_eq!(Point::new(1.0, 3.0) + Point::new(2.0, 4.0), Point::new(3.0, 7.0));
    }

    #[test]
    fn sub_is_component_wise() {
        assert_eq!(Point::new(5.0, 6.0) - Point::new(2.0, 4.0), Point::new(3.0, 2.0));
    }

    #[test]
    fn mul_scales_both_coordinates() {
        assert_eq!(Point::new(1.0, 3.0) * 2.0, Point::new(2.0, 6.0));
    }

    #[test]
    fn div_divides_both_coordinates() {
        assert_eq!(Point::new(4.0, 6.0) / 2.0, Point::new(2.0, 3.0));
    }

    #[test]
    fn floor_div_floors_both_coordinates() {
        assert_eq!(Point::new(5.0, 7.0).floor_div(2.0), Point::new(2.0, 3.0));
    }

    #[test]
    fn compound_assignment_mutates_in_place() {
        let mut p = Point::new(2.0, 4.0);

        p += Point::new(1.0, 3.0);
        assert_eq!(p, Point::new(3.0, 7.0));

        p -= Point::new(3.0, 7.0);
        assert_eq!(p, Point::new(0.0, 0.0));

        let mut q = Point::new(4.0, 6.0);
        q *= 3.0;
        assert_eq!(q, Point::new(12.0, 18.0));

        q /= 2.0;
        assert_eq!(q, Point::new(6.0, 9.0));
    }

    #[test]
    fn distance_from_origin_is_the_euclidean_norm() {
        assert_eq!(Point::new(3.0, 4.0).distance_from_origin(), 5.0);
        assert_eq!(Point::default().distance_from_origin(), 0.0);
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(Point::new(3.0, 4.0), Point::new(3.0, 4.0));
        assert_ne!(Point::new(3.0, 4.0), Point::new(4.0, 3.0));
    }

    #[test]
    fn display_shows_the_coordinate_pair() {
        assert_eq!(Point::new(12.0, 0.0).to_string(), "(12, 0)");
        assert_eq!(Point::new(2.5, 3.0).to_string(), "(2.5, 3)");
    }
}
