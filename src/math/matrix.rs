use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{NumericError, Result};
use crate::geometry::Point;

use super::FloatComparator;

/// A 2D affine transformation stored as six coefficients.
///
/// ```text
///     [ a  c  tx ]
/// M = [ b  d  ty ]
///     [ 0  0  1  ]
/// ```
///
/// The map is `(x, y) -> (a*x + c*y + tx, b*x + d*y + ty)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Matrix {
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);

    /// All-zero sentinel. Not invertible.
    pub const EMPTY: Self = Self::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(a: f64, b: f64, c: f64, d: f64, tx: f64, ty: f64) -> Self {
        Self { a, b, c, d, tx, ty }
    }

    /// Builds the frame matrix of an object placed at `(x, y)` with the given
    /// rotation and uniform scale, in screen space (y axis pointing down).
    #[must_use]
    pub fn from_transform(x: f64, y: f64, rotation: f64, scale: f64) -> Self {
        let (sin, cos) = rotation.sin_cos();
        Self::new(scale * cos, scale * sin, -scale * sin, -scale * cos, x, y)
    }

    /// Pure translation by `(x, y)`.
    #[must_use]
    pub const fn translation(x: f64, y: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, x, y)
    }

    /// Counter-clockwise rotation about the origin, in radians.
    #[must_use]
    pub fn rotation(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(cos, sin, -sin, cos, 0.0, 0.0)
    }

    /// Axis-aligned scaling about the origin.
    #[must_use]
    pub const fn scaling(sx: f64, sy: f64) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    #[must_use]
    pub fn determinant(&self) -> f64 {
        self.a * self.d - self.b * self.c
    }

    /// Returns `true` if every coefficient is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        [self.a, self.b, self.c, self.d, self.tx, self.ty]
            .iter()
            .all(|v| v.is_finite())
    }

    /// Returns the inverse transform.
    ///
    /// A zero determinant is not reported: the result then holds non-finite
    /// coefficients. Check [`Matrix::is_finite`] or use
    /// [`Matrix::try_invert`] before trusting the result.
    #[must_use]
    pub fn invert(&self) -> Self {
        let mut inverse = *self;
        inverse.invert_mut();
        inverse
    }

    /// Inverts this matrix in place. See [`Matrix::invert`].
    pub fn invert_mut(&mut self) -> &mut Self {
        let Self { a, b, c, d, tx, ty } = *self;
        let det = self.determinant();

        self.a = d / det;
        self.b = -b / det;
        self.c = -c / det;
        self.d = a / det;
        self.tx = (c * ty - d * tx) / det;
        self.ty = (b * tx - a * ty) / det;
        self
    }

    /// Returns the inverse transform, or an error when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`NumericError::SingularMatrix`] if the inversion produces a
    /// non-finite coefficient.
    pub fn try_invert(&self) -> Result<Self> {
        let inverse = self.invert();
        if inverse.is_finite() {
            Ok(inverse)
        } else {
            let determinant = self.determinant();
            debug!(determinant, "matrix inversion produced non-finite coefficients");
            Err(NumericError::SingularMatrix { determinant }.into())
        }
    }

    /// Composes `self ∘ other`: the result applies `other` first, then `self`.
    #[must_use]
    pub fn multiply(&self, other: &Self) -> Self {
        let mut product = *self;
        product.multiply_mut(other);
        product
    }

    /// In-place form of [`Matrix::multiply`].
    pub fn multiply_mut(&mut self, other: &Self) -> &mut Self {
        let Self { a, b, c, d, tx, ty } = *self;

        self.a = a * other.a + c * other.b;
        self.b = b * other.a + d * other.b;
        self.c = a * other.c + c * other.d;
        self.d = b * other.c + d * other.d;
        self.tx = a * other.tx + c * other.ty + tx;
        self.ty = b * other.tx + d * other.ty + ty;
        self
    }

    /// Applies the affine map to `(x, y)`.
    #[must_use]
    pub fn transform(&self, x: f64, y: f64) -> (f64, f64) {
        (
            x * self.a + y * self.c + self.tx,
            x * self.b + y * self.d + self.ty,
        )
    }

    #[must_use]
    pub fn transform_point(&self, point: &Point) -> Point {
        let (x, y) = self.transform(point.x, point.y);
        Point::new(x, y)
    }

    /// Overwrites `point` with its image under this transform.
    pub fn transform_in_place(&self, point: &mut Point) {
        *point = self.transform_point(point);
    }

    /// `self` composed with a translation by `(x, y)`.
    #[must_use]
    pub fn translate(&self, x: f64, y: f64) -> Self {
        self.multiply(&Self::translation(x, y))
    }

    /// `self` composed with a counter-clockwise rotation about the origin.
    #[must_use]
    pub fn rotate(&self, angle: f64) -> Self {
        self.rotate_about(angle, 0.0, 0.0)
    }

    /// `self` composed with a counter-clockwise rotation about `(cx, cy)`.
    ///
    /// Built as translate-to-center, rotate, translate-back.
    #[must_use]
    pub fn rotate_about(&self, angle: f64, cx: f64, cy: f64) -> Self {
        self.translate(cx, cy)
            .multiply(&Self::rotation(angle))
            .translate(-cx, -cy)
    }

    #[must_use]
    pub fn scale(&self, sx: f64, sy: f64) -> Self {
        self.multiply(&Self::scaling(sx, sy))
    }

    #[must_use]
    pub fn scale_uniform(&self, s: f64) -> Self {
        self.scale(s, s)
    }

    /// Coefficient-wise equality within the default tolerance.
    #[must_use]
    pub fn equal_to(&self, other: &Self) -> bool {
        self.equal_to_with(other, &FloatComparator::DEFAULT)
    }

    #[must_use]
    pub fn equal_to_with(&self, other: &Self, cmp: &FloatComparator) -> bool {
        cmp.equals(self.tx, other.tx)
            && cmp.equals(self.ty, other.ty)
            && cmp.equals(self.a, other.a)
            && cmp.equals(self.b, other.b)
            && cmp.equals(self.c, other.c)
            && cmp.equals(self.d, other.d)
    }

    /// Exact comparison against [`Matrix::IDENTITY`].
    ///
    /// Unlike [`Matrix::equal_to`] this ignores the tolerance: a matrix
    /// obtained by composing a rotation with its inverse is usually
    /// `equal_to(&Matrix::IDENTITY)` but not `is_identity()`.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Returns the full 3x3 homogeneous matrix.
    #[must_use]
    pub fn to_homogeneous(&self) -> nalgebra::Matrix3<f64> {
        #[rustfmt::skip]
        let m = nalgebra::Matrix3::new(
            self.a, self.c, self.tx,
            self.b, self.d, self.ty,
            0.0,    0.0,    1.0,
        );
        m
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl std::ops::Mul for Matrix {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl approx::AbsDiffEq for Matrix {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        super::DEFAULT_TOLERANCE
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        approx::AbsDiffEq::abs_diff_eq(&self.a, &other.a, epsilon)
            && approx::AbsDiffEq::abs_diff_eq(&self.b, &other.b, epsilon)
            && approx::AbsDiffEq::abs_diff_eq(&self.c, &other.c, epsilon)
            && approx::AbsDiffEq::abs_diff_eq(&self.d, &other.d, epsilon)
            && approx::AbsDiffEq::abs_diff_eq(&self.tx, &other.tx, epsilon)
            && approx::AbsDiffEq::abs_diff_eq(&self.ty, &other.ty, epsilon)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_3};

    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::error::KernelError;

    fn sample() -> Matrix {
        Matrix::new(2.0, 0.5, -1.0, 3.0, 4.0, -7.0)
    }

    #[test]
    fn identity_transform_is_exact() {
        assert_eq!(Matrix::IDENTITY.transform(3.25, -9.5), (3.25, -9.5));
        assert_eq!(Matrix::default(), Matrix::IDENTITY);
    }

    #[test]
    fn rotate_quarter_turn() {
        let (x, y) = Matrix::IDENTITY.rotate(FRAC_PI_2).transform(1.0, 0.0);
        assert_abs_diff_eq!(x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn rotate_about_center_keeps_center_fixed() {
        let m = Matrix::IDENTITY.rotate_about(FRAC_PI_3, 2.0, 5.0);
        let (x, y) = m.transform(2.0, 5.0);
        assert_abs_diff_eq!(x, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(y, 5.0, epsilon = 1e-12);

        let (x, y) = Matrix::IDENTITY.rotate_about(FRAC_PI_2, 1.0, 1.0).transform(2.0, 1.0);
        assert_abs_diff_eq!(x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(y, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn translate_and_scale() {
        let m = Matrix::IDENTITY.translate(10.0, 20.0).scale(2.0, 3.0);
        // Scale applies first, then translation.
        assert_eq!(m.transform(1.0, 1.0), (12.0, 23.0));
        assert_eq!(Matrix::IDENTITY.scale_uniform(4.0).transform(1.0, -2.0), (4.0, -8.0));
    }

    #[test]
    fn multiply_applies_right_operand_first() {
        let a = Matrix::translation(1.0, 0.0);
        let b = Matrix::scaling(2.0, 2.0);
        let (x, y) = a.multiply(&b).transform(1.0, 1.0);
        assert_eq!((x, y), (3.0, 2.0));
        let (bx, by) = b.transform(1.0, 1.0);
        assert_eq!(a.transform(bx, by), (x, y));
        assert_eq!(a * b, a.multiply(&b));
    }

    #[test]
    fn inverse_composes_to_identity() {
        let m = sample();
        assert!(m.multiply(&m.invert()).equal_to(&Matrix::IDENTITY));
        assert!(m.invert().multiply(&m).equal_to(&Matrix::IDENTITY));
        assert_abs_diff_eq!(m.invert().invert(), m, epsilon = 1e-9);
    }

    #[test]
    fn inverse_matches_nalgebra() {
        let m = sample();
        let expected = m.to_homogeneous().try_inverse().unwrap();
        let actual = m.invert().to_homogeneous();
        assert_abs_diff_eq!(actual, expected, epsilon = 1e-12);
    }

    #[test]
    fn invert_mut_matches_invert() {
        let mut m = sample();
        m.invert_mut();
        assert_eq!(m, sample().invert());
    }

    #[test]
    fn singular_matrix_inverts_to_non_finite() {
        let inverse = Matrix::EMPTY.invert();
        assert!(!inverse.is_finite());
        assert!(!inverse.a.is_finite());

        let collapsed = Matrix::new(1.0, 2.0, 2.0, 4.0, 0.0, 0.0);
        assert!(!collapsed.invert().is_finite());
    }

    #[test]
    fn try_invert_reports_singular_matrix() {
        let err = Matrix::EMPTY.try_invert().unwrap_err();
        assert!(matches!(
            err,
            KernelError::Numeric(NumericError::SingularMatrix { .. })
        ));
        assert!(sample().try_invert().is_ok());
    }

    #[test]
    fn is_identity_is_exact_but_equal_to_is_tolerant() {
        let nearly = Matrix::new(1.0 + 1e-9, 0.0, 0.0, 1.0, 0.0, 0.0);
        assert!(!nearly.is_identity());
        assert!(nearly.equal_to(&Matrix::IDENTITY));
        assert!(Matrix::IDENTITY.is_identity());

        let tight = FloatComparator::new(1e-12).unwrap();
        assert!(!nearly.equal_to_with(&Matrix::IDENTITY, &tight));
    }

    #[test]
    fn transform_in_place_reads_original_coordinates() {
        let m = Matrix::rotation(FRAC_PI_2);
        let mut p = Point::new(1.0, 0.0);
        m.transform_in_place(&mut p);
        assert_abs_diff_eq!(p, Point::new(0.0, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn from_transform_places_and_flips() {
        let m = Matrix::from_transform(5.0, 6.0, 0.0, 2.0);
        assert_eq!(m, Matrix::new(2.0, 0.0, 0.0, -2.0, 5.0, 6.0));
        assert_eq!(m.transform(1.0, 1.0), (7.0, 4.0));
    }

    #[test]
    fn determinant_of_elementary_transforms() {
        assert_abs_diff_eq!(Matrix::rotation(1.234).determinant(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(Matrix::scaling(2.0, 3.0).determinant(), 6.0);
        assert_abs_diff_eq!(Matrix::EMPTY.determinant(), 0.0);
    }

    #[test]
    fn serializes_plain_coefficients() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "a": 2.0, "b": 0.5, "c": -1.0, "d": 3.0, "tx": 4.0, "ty": -7.0 })
        );
        let back: Matrix = serde_json::from_value(json).unwrap();
        assert_eq!(back, sample());
    }
}
