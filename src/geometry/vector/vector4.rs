use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{KernelError, Result, UnsupportedError};
use crate::geometry::{args, Geometry, Point, Shape, ShapeTag};
use crate::math::{FloatComparator, Matrix};

use super::Vector;

const NAME: &str = "vector4";
const ARITY: usize = <Vector4 as Vector>::DIMENSION;

/// A four-component vector.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector4 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl_vector_ops!(Vector4 { x, y, z, w });

impl Vector4 {
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    #[must_use]
    pub fn from_array([x, y, z, w]: [f64; 4]) -> Self {
        Self::new(x, y, z, w)
    }

    #[must_use]
    pub const fn to_array(&self) -> [f64; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Unit circle in the `xz` plane: `(cos, 0, sin, 0)`.
    #[must_use]
    pub fn from_angle(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(cos, 0.0, sin, 0.0)
    }

    /// Builds a vector from an untyped argument list.
    ///
    /// Accepted forms: no arguments (zero), a 4-number array, a `vector4`
    /// record, a single angle, or four numbers.
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
                    Err(args::illegal(NAME, "expected an array, a `vector4` record or an angle"))
                }
            }
            _ => args::numbers::<ARITY>(values).map(Self::from_array).ok_or_else(|| {
                args::illegal(NAME, format!("cannot build from {} arguments", values.len()))
            }),
        }
    }

    /// Parses a `{"name": "vector4", ...}` record.
    ///
    /// # Errors
    ///
    /// Returns a construction error if the record is malformed or names
    /// another shape.
    pub fn from_record(record: &Value) -> Result<Self> {
        match Geometry::from_named_record(NAME, record)? {
            Geometry::Vector4(v) => Ok(v),
            other => Err(other.mismatch(NAME).into()),
        }
    }
}

impl Vector for Vector4 {
    const DIMENSION: usize = 4;
    const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    type Cross = Vector4;

    fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// 3D cross product of the `xyz` parts; `w` of the result is always 0.
    fn cross(&self, other: &Self) -> Vector4 {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
            0.0,
        )
    }

    fn equal_to_with(&self, other: &Self, cmp: &FloatComparator) -> bool {
        cmp.equals(self.x, other.x)
            && cmp.equals(self.y, other.y)
            && cmp.equals(self.z, other.z)
            && cmp.equals(self.w, other.w)
    }
}

impl Shape for Vector4 {
    fn tag(&self) -> ShapeTag {
        ShapeTag::Vector
    }

    fn name(&self) -> &'static str {
        NAME
    }

    fn center(&self) -> Result<Point> {
        Err(UnsupportedError::not_implemented(NAME, "center").into())
    }

    fn contains(&self, _other: &Geometry) -> Result<bool> {
        Err(UnsupportedError::not_implemented(NAME, "contains").into())
    }

    fn transform(&self, _matrix: &Matrix) -> Result<Self> {
        Err(UnsupportedError::not_implemented(NAME, "transform").into())
    }

    fn to_geometry(&self) -> Geometry {
        Geometry::Vector4(*self)
    }
}

impl From<[f64; 4]> for Vector4 {
    fn from(array: [f64; 4]) -> Self {
        Self::from_array(array)
    }
}

impl TryFrom<&[f64]> for Vector4 {
    type Error = KernelError;

    fn try_from(slice: &[f64]) -> Result<Self> {
        args::exact::<ARITY>(NAME, slice).map(Self::from_array)
    }
}
