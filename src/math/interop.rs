//! Lossless conversions to and from `nalgebra` types.

use crate::error::{KernelError, Result};
use crate::geometry::{Point, Vector2, Vector3, Vector4};

use super::Matrix;

impl From<Point> for nalgebra::Point2<f64> {
    fn from(p: Point) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<nalgebra::Point2<f64>> for Point {
    fn from(p: nalgebra::Point2<f64>) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Vector2> for nalgebra::Vector2<f64> {
    fn from(v: Vector2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<nalgebra::Vector2<f64>> for Vector2 {
    fn from(v: nalgebra::Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector3> for nalgebra::Vector3<f64> {
    fn from(v: Vector3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<nalgebra::Vector3<f64>> for Vector3 {
    fn from(v: nalgebra::Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector4> for nalgebra::Vector4<f64> {
    fn from(v: Vector4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl From<nalgebra::Vector4<f64>> for Vector4 {
    fn from(v: nalgebra::Vector4<f64>) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl From<Matrix> for nalgebra::Matrix3<f64> {
    fn from(m: Matrix) -> Self {
        m.to_homogeneous()
    }
}

/// Accepts only matrices whose last row is exactly `[0, 0, 1]`.
impl TryFrom<nalgebra::Matrix3<f64>> for Matrix {
    type Error = KernelError;

    #[allow(clippy::float_cmp)]
    fn try_from(m: nalgebra::Matrix3<f64>) -> Result<Self> {
        if m[(2, 0)] != 0.0 || m[(2, 1)] != 0.0 || m[(2, 2)] != 1.0 {
            return Err(crate::geometry::args::illegal(
                "matrix",
                "bottom row of an affine matrix must be [0, 0, 1]",
            ));
        }
        Ok(Self::new(
            m[(0, 0)],
            m[(1, 0)],
            m[(0, 1)],
            m[(1, 1)],
            m[(0, 2)],
            m[(1, 2)],
        ))
    }
}
