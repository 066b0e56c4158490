use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConstructionError, Result};
use crate::math::Matrix;

use super::{Point, Vector2, Vector3, Vector4};

/// Discriminator shared by every concrete shape variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeTag {
    Point,
    Vector,
}

/// Common capability of every geometric value in the kernel.
///
/// Implementors supply [`Shape::transform`]; translation, rotation and
/// scaling are derived from it by building the elementary [`Matrix`].
pub trait Shape: Clone {
    fn tag(&self) -> ShapeTag;

    /// Canonical lowercase name, also used as the record discriminator.
    fn name(&self) -> &'static str;

    /// Returns the center point of the shape.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedError::NotImplemented` for shapes without a
    /// defined center.
    fn center(&self) -> Result<Point>;

    /// Tests whether `other` lies in this shape.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedError::NotImplemented` for shapes without a
    /// containment test.
    fn contains(&self, other: &Geometry) -> Result<bool>;

    /// Applies an affine transform, returning a new shape.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedError::NotImplemented` for shapes that have no
    /// 2D affine image.
    fn transform(&self, matrix: &Matrix) -> Result<Self>;

    /// Wraps a copy of this shape in the tagged union.
    fn to_geometry(&self) -> Geometry;

    /// # Errors
    ///
    /// Propagates [`Shape::transform`] errors.
    fn translate(&self, x: f64, y: f64) -> Result<Self> {
        self.transform(&Matrix::IDENTITY.translate(x, y))
    }

    /// Counter-clockwise rotation about the origin.
    ///
    /// # Errors
    ///
    /// Propagates [`Shape::transform`] errors.
    fn rotate(&self, angle: f64) -> Result<Self> {
        self.transform(&Matrix::IDENTITY.rotate(angle))
    }

    /// Counter-clockwise rotation about `(cx, cy)`.
    ///
    /// # Errors
    ///
    /// Propagates [`Shape::transform`] errors.
    fn rotate_about(&self, angle: f64, cx: f64, cy: f64) -> Result<Self> {
        self.transform(&Matrix::IDENTITY.rotate_about(angle, cx, cy))
    }

    /// # Errors
    ///
    /// Propagates [`Shape::transform`] errors.
    fn scale(&self, sx: f64, sy: f64) -> Result<Self> {
        self.transform(&Matrix::IDENTITY.scale(sx, sy))
    }

    /// # Errors
    ///
    /// Propagates [`Shape::transform`] errors.
    fn scale_uniform(&self, s: f64) -> Result<Self> {
        self.scale(s, s)
    }

    /// Name-tagged plain-field snapshot, e.g. `{"name":"point","x":1.0,"y":2.0}`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn to_json(&self) -> Result<Value> {
        Ok(serde_json::to_value(self.to_geometry())?)
    }
}

/// Tagged union over every concrete shape.
///
/// Serialized internally tagged on `name`, which makes it the record format
/// accepted by the `from_record` constructors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "lowercase")]
pub enum Geometry {
    Point(Point),
    Vector2(Vector2),
    Vector3(Vector3),
    Vector4(Vector4),
}

impl Geometry {
    /// Parses a name-tagged record.
    ///
    /// # Errors
    ///
    /// Returns `ConstructionError::IllegalParameters` if the record has an
    /// unknown name or is missing a component.
    pub fn from_record(record: &Value) -> Result<Self> {
        Self::deserialize(record)
            .map_err(|e| super::args::illegal("shape", format!("malformed record: {e}")))
    }

    /// Parses a record on behalf of the typed `from_record` constructors.
    ///
    /// A record that carries `expected` as its name but fails to parse is
    /// reported against `expected` rather than the generic `shape`.
    pub(crate) fn from_named_record(expected: &'static str, record: &Value) -> Result<Self> {
        if super::args::record_name(record) == Some(expected) {
            Self::deserialize(record)
                .map_err(|e| super::args::illegal(expected, format!("malformed record: {e}")))
        } else {
            Self::from_record(record)
        }
    }

    /// Error for a typed `from_record` that parsed a different variant.
    pub(crate) fn mismatch(&self, expected: &'static str) -> ConstructionError {
        ConstructionError::NameMismatch {
            expected,
            found: self.name(),
        }
    }
}

impl Shape for Geometry {
    fn tag(&self) -> ShapeTag {
        match self {
            Geometry::Point(p) => p.tag(),
            Geometry::Vector2(v) => v.tag(),
            Geometry::Vector3(v) => v.tag(),
            Geometry::Vector4(v) => v.tag(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Geometry::Point(p) => p.name(),
            Geometry::Vector2(v) => v.name(),
            Geometry::Vector3(v) => v.name(),
            Geometry::Vector4(v) => v.name(),
        }
    }

    fn center(&self) -> Result<Point> {
        match self {
            Geometry::Point(p) => p.center(),
            Geometry::Vector2(v) => v.center(),
            Geometry::Vector3(v) => v.center(),
            Geometry::Vector4(v) => v.center(),
        }
    }

    fn contains(&self, other: &Geometry) -> Result<bool> {
        match self {
            Geometry::Point(p) => p.contains(other),
            Geometry::Vector2(v) => v.contains(other),
            Geometry::Vector3(v) => v.contains(other),
            Geometry::Vector4(v) => v.contains(other),
        }
    }

    fn transform(&self, matrix: &Matrix) -> Result<Self> {
        Ok(match self {
            Geometry::Point(p) => Geometry::Point(p.transform(matrix)?),
            Geometry::Vector2(v) => Geometry::Vector2(v.transform(matrix)?),
            Geometry::Vector3(v) => Geometry::Vector3(v.transform(matrix)?),
            Geometry::Vector4(v) => Geometry::Vector4(v.transform(matrix)?),
        })
    }

    fn to_geometry(&self) -> Geometry {
        *self
    }
}

impl From<Point> for Geometry {
    fn from(p: Point) -> Self {
        Geometry::Point(p)
    }
}

impl From<Vector2> for Geometry {
    fn from(v: Vector2) -> Self {
        Geometry::Vector2(v)
    }
}

impl From<Vector3> for Geometry {
    fn from(v: Vector3) -> Self {
        Geometry::Vector3(v)
    }
}

impl From<Vector4> for Geometry {
    fn from(v: Vector4) -> Self {
        Geometry::Vector4(v)
    }
}
