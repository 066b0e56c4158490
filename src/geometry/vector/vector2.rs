use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{KernelError, Result, UnsupportedError};
use crate::geometry::{args, Geometry, Point, Shape, ShapeTag};
use crate::math::{FloatComparator, Matrix};

use super::Vector;

const NAME: &str = "vector2";
const ARITY: usize = <Vector2 as Vector>::DIMENSION;

/// A two-component vector.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl_vector_ops!(Vector2 { x, y });

impl Vector2 {
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

    /// Point on the unit circle at `angle` radians: `(cos, sin)`.
    #[must_use]
    pub fn from_angle(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(cos, sin)
    }

    /// Displacement from `from` to `to`.
    #[must_use]
    pub fn between(from: &Point, to: &Point) -> Self {
        *to - *from
    }

    /// Builds a vector from an untyped argument list.
    ///
    /// Accepted forms: no arguments (zero), a 2-number array, a `vector2`
    /// record, a single angle, two numbers, or two point objects (the
    /// displacement from the first to the second).
    ///
    /// # Errors
    ///
    /// Returns `ConstructionError::IllegalParameters` for any other shape
    /// of arguments.
    pub fn from_args(values: &[Value]) -> Result<Self> {
        match values {
            [] => Ok(Self::ZERO),
            [single] => {
                if let Some(components) = args::numeric_array::<ARITY>(single) {
                    Ok(Self::from_array(components))
                } else if args::record_name(single) == Some(NAME) {
                    Self::from_record(single)
                } else if let Some(angle) = single.as_f64() {
                    Ok(Self::from_angle(angle))
                } else {
                    Err(args::illegal(NAME, "expected an array, a `vector2` record or an angle"))
                }
            }
            [first, second] => {
                if let Some(components) = args::numbers::<ARITY>(values) {
                    return Ok(Self::from_array(components));
                }
                match (args::point_like(first), args::point_like(second)) {
                    (Some(from), Some(to)) => Ok(Self::between(&from, &to)),
                    _ => Err(args::illegal(NAME, "expected two numbers or two points")),
                }
            }
            _ => Err(args::illegal(
                NAME,
                format!("cannot build from {} arguments", values.len()),
            )),
        }
    }

    /// Parses a `{"name": "vector2", ...}` record.
    ///
    /// # Errors
    ///
    /// Returns a construction error if the record is malformed or names
    /// another shape.
    pub fn from_record(record: &Value) -> Result<Self> {
        match Geometry::from_named_record(NAME, record)? {
            Geometry::Vector2(v) => Ok(v),
            other => Err(other.mismatch(NAME).into()),
        }
    }
}

impl Vector for Vector2 {
    const DIMENSION: usize = 2;
    const ZERO: Self = Self::new(0.0, 0.0);

    type Cross = f64;

    fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Signed area of the parallelogram spanned by `self` and `other`.
    fn cross(&self, other: &Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    fn equal_to_with(&self, other: &Self, cmp: &FloatComparator) -> bool {
        cmp.equals(self.x, other.x) && cmp.equals(self.y, other.y)
    }
}

impl Shape for Vector2 {
    fn tag(&self) -> ShapeTag {
        ShapeTag::Vector
    }

    fn name(&self) -> &'static str {
        NAME
    }

    /// Midpoint of the vector drawn from the origin.
    fn center(&self) -> Result<Point> {
        Ok(Point::new(self.x / 2.0, self.y / 2.0))
    }

    fn contains(&self, _other: &Geometry) -> Result<bool> {
        Err(UnsupportedError::not_implemented(NAME, "contains").into())
    }

    /// Maps the vector as a position, translation included.
    fn transform(&self, matrix: &Matrix) -> Result<Self> {
        let (x, y) = matrix.transform(self.x, self.y);
        Ok(Self::new(x, y))
    }

    fn to_geometry(&self) -> Geometry {
        Geometry::Vector2(*self)
    }
}

impl From<[f64; 2]> for Vector2 {
    fn from(array: [f64; 2]) -> Self {
        Self::from_array(array)
    }
}

impl TryFrom<&[f64]> for Vector2 {
    type Error = KernelError;

    fn try_from(slice: &[f64]) -> Result<Self> {
        args::exact::<ARITY>(NAME, slice).map(Self::from_array)
    }
}
