use std::cmp::Ordering;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::math::{FloatComparator, Matrix, DEFAULT_TOLERANCE};

use super::args;
use super::{Geometry, Shape, ShapeTag, Vector2};

const NAME: &str = "point";

/// A location in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The origin.
    pub const EMPTY: Self = Self::new(0.0, 0.0);

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn from_array([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }

    #[must_use]
    pub const fn to_array(&self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Builds a point from an untyped argument list.
    ///
    /// Accepted forms: no arguments (origin), a `[x, y]` array, an `{x, y}`
    /// object (optionally tagged `"name": "point"`), or two numbers.
    ///
    /// # Errors
    ///
    /// Returns `ConstructionError::IllegalParameters` for any other shape
    /// of arguments.
    pub fn from_args(values: &[Value]) -> Result<Self> {
        match values {
            [] => Ok(Self::EMPTY),
            [single] => args::numeric_array::<2>(single)
                .map(Self::from_array)
                .or_else(|| args::point_like(single))
                .ok_or_else(|| args::illegal(NAME, "expected `[x, y]` or an `{x, y}` object")),
            _ => args::numbers::<2>(values)
                .map(Self::from_array)
                .ok_or_else(|| args::illegal(NAME, format!("cannot build from {} arguments", values.len()))),
        }
    }

    /// Parses a `{"name": "point", ...}` record.
    ///
    /// # Errors
    ///
    /// Returns a construction error if the record is malformed or names
    /// another shape.
    pub fn from_record(record: &Value) -> Result<Self> {
        match Geometry::from_named_record(NAME, record)? {
            Geometry::Point(p) => Ok(p),
            other => Err(other.mismatch(NAME).into()),
        }
    }

    /// Both coordinates are exactly zero.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_empty(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    #[must_use]
    pub fn vertices(&self) -> [Point; 1] {
        [*self]
    }

    #[must_use]
    pub fn equal_to(&self, other: &Point) -> bool {
        self.equal_to_with(other, &FloatComparator::DEFAULT)
    }

    #[must_use]
    pub fn equal_to_with(&self, other: &Point, cmp: &FloatComparator) -> bool {
        cmp.equals(self.x, other.x) && cmp.equals(self.y, other.y)
    }

    /// Orders by `y` first, then by `x`, within tolerance.
    #[must_use]
    pub fn less_than(&self, other: &Point) -> bool {
        self.less_than_with(other, &FloatComparator::DEFAULT)
    }

    #[must_use]
    pub fn less_than_with(&self, other: &Point, cmp: &FloatComparator) -> bool {
        cmp.less_than(self.y, other.y)
            || (cmp.equals(self.y, other.y) && cmp.less_than(self.x, other.x))
    }

    /// Exact total order by `y` then `x`, for use with `sort_by`.
    ///
    /// Unlike [`Point::less_than`] this ignores the tolerance, so points
    /// within epsilon of each other still get a definite order.
    #[must_use]
    pub fn ordering(&self, other: &Point) -> Ordering {
        self.y
            .total_cmp(&other.y)
            .then_with(|| self.x.total_cmp(&other.x))
    }

    /// Rounds both coordinates to the nearest integer, i.e. snaps to a unit grid.
    #[must_use]
    pub fn round(&self) -> Point {
        self.snap_to_grid(1.0)
    }

    /// Rounds both coordinates to the nearest multiple of `grid`.
    #[must_use]
    pub fn snap_to_grid(&self, grid: f64) -> Point {
        self.snap_to_grid_xy(grid, grid)
    }

    /// Rounds each coordinate to the nearest multiple of its own grid size.
    #[must_use]
    pub fn snap_to_grid_xy(&self, x_grid: f64, y_grid: f64) -> Point {
        Point::new(
            (self.x / x_grid).round() * x_grid,
            (self.y / y_grid).round() * y_grid,
        )
    }

    /// Tests whether this point lies on `shape`.
    ///
    /// # Errors
    ///
    /// Propagates the containment error of shapes that do not define one.
    pub fn on(&self, shape: &Geometry) -> Result<bool> {
        match shape {
            Geometry::Point(p) => Ok(self.equal_to(p)),
            other => other.contains(&Geometry::Point(*self)),
        }
    }

    #[must_use]
    pub fn distance_to(&self, other: &Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

impl Shape for Point {
    fn tag(&self) -> ShapeTag {
        ShapeTag::Point
    }

    fn name(&self) -> &'static str {
        NAME
    }

    fn center(&self) -> Result<Point> {
        Ok(*self)
    }

    /// A point contains only itself.
    fn contains(&self, other: &Geometry) -> Result<bool> {
        Ok(match other {
            Geometry::Point(p) => self.equal_to(p),
            _ => false,
        })
    }

    fn transform(&self, matrix: &Matrix) -> Result<Self> {
        Ok(matrix.transform_point(self))
    }

    fn to_geometry(&self) -> Geometry {
        Geometry::Point(*self)
    }
}

impl From<[f64; 2]> for Point {
    fn from(array: [f64; 2]) -> Self {
        Self::from_array(array)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl TryFrom<&[f64]> for Point {
    type Error = crate::error::KernelError;

    fn try_from(slice: &[f64]) -> Result<Self> {
        args::exact::<2>(NAME, slice).map(Self::from_array)
    }
}

/// Displacement from `rhs` to `self`.
impl Sub for Point {
    type Output = Vector2;

    fn sub(self, rhs: Self) -> Vector2 {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Add<Vector2> for Point {
    type Output = Point;

    fn add(self, rhs: Vector2) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl approx::AbsDiffEq for Point {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        DEFAULT_TOLERANCE
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        approx::AbsDiffEq::abs_diff_eq(&self.x, &other.x, epsilon)
            && approx::AbsDiffEq::abs_diff_eq(&self.y, &other.y, epsilon)
    }
}
