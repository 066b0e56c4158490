//! Property-based tests for the geometry kernel using the `proptest` crate.

use std::f64::consts::{FRAC_PI_2, PI};

use approx::{abs_diff_eq, assert_abs_diff_eq};
use proptest::prelude::*;
use serde_json::json;

use cfx_geometry::{FloatComparator, Matrix, Point, Shape, Vector, Vector2, Vector3, Vector4};

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

fn arb_coord() -> impl Strategy<Value = f64> {
    -1000.0f64..1000.0
}

fn arb_angle() -> impl Strategy<Value = f64> {
    -PI..PI
}

/// Scale factors kept away from zero so the frame stays well conditioned.
fn arb_scale() -> impl Strategy<Value = f64> {
    prop_oneof![0.25f64..8.0, -8.0f64..-0.25]
}

/// A placement frame: translation, rotation and non-degenerate scale.
fn arb_frame() -> impl Strategy<Value = Matrix> {
    (arb_coord(), arb_coord(), arb_angle(), arb_scale())
        .prop_map(|(x, y, rotation, scale)| Matrix::from_transform(x, y, rotation, scale))
}

/// Any affine matrix with bounded coefficients, singular ones included.
fn arb_matrix() -> impl Strategy<Value = Matrix> {
    (
        -10.0f64..10.0,
        -10.0f64..10.0,
        -10.0f64..10.0,
        -10.0f64..10.0,
        arb_coord(),
        arb_coord(),
    )
        .prop_map(|(a, b, c, d, tx, ty)| Matrix::new(a, b, c, d, tx, ty))
}

fn arb_point() -> impl Strategy<Value = Point> {
    (arb_coord(), arb_coord()).prop_map(|(x, y)| Point::new(x, y))
}

fn arb_vector2() -> impl Strategy<Value = Vector2> {
    (arb_coord(), arb_coord()).prop_map(|(x, y)| Vector2::new(x, y))
}

fn arb_vector3() -> impl Strategy<Value = Vector3> {
    (arb_coord(), arb_coord(), arb_coord()).prop_map(|(x, y, z)| Vector3::new(x, y, z))
}

fn arb_vector4() -> impl Strategy<Value = Vector4> {
    (arb_coord(), arb_coord(), arb_coord(), arb_coord())
        .prop_map(|(x, y, z, w)| Vector4::new(x, y, z, w))
}

// ---------------------------------------------------------------------------
// Laws shared by every vector arity
// ---------------------------------------------------------------------------

fn check_scale_round_trip<V>(v: V, s: f64) -> Result<(), TestCaseError>
where
    V: Vector + approx::AbsDiffEq<Epsilon = f64> + std::fmt::Debug,
{
    let restored = v * s / s;
    prop_assert!(
        abs_diff_eq!(restored, v, epsilon = 1e-9),
        "{}-component: {restored:?} != {v:?}",
        V::DIMENSION
    );
    Ok(())
}

fn check_normalize<V>(v: V) -> Result<(), TestCaseError>
where
    V: Vector + PartialEq + std::fmt::Debug,
{
    prop_assert_eq!(V::ZERO.normalize(), V::ZERO);
    if v.length() > TOL {
        let length = v.normalize().length();
        prop_assert!(
            (length - 1.0).abs() < 1e-12,
            "{}-component: normalized length {length}",
            V::DIMENSION
        );
    }
    Ok(())
}

const TOL: f64 = 1e-6;

// ---------------------------------------------------------------------------
// Matrix laws
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn frame_times_inverse_is_identity(m in arb_frame()) {
        let inverse = m.invert();
        prop_assert!(m.multiply(&inverse).equal_to(&Matrix::IDENTITY));
        prop_assert!(inverse.multiply(&m).equal_to(&Matrix::IDENTITY));
    }

    #[test]
    fn double_inverse_restores_frame(m in arb_frame()) {
        let restored = m.invert().invert();
        prop_assert!(abs_diff_eq!(restored, m, epsilon = 1e-6), "{restored:?} != {m:?}");
    }

    #[test]
    fn try_invert_matches_invert_when_regular(m in arb_frame()) {
        prop_assert_eq!(m.try_invert().ok(), Some(m.invert()));
    }

    #[test]
    fn multiply_composes_transforms(a in arb_matrix(), b in arb_matrix(), p in arb_point()) {
        let (cx, cy) = a.multiply(&b).transform(p.x, p.y);
        let (bx, by) = b.transform(p.x, p.y);
        let (ex, ey) = a.transform(bx, by);
        let scale = 1.0 + ex.abs().max(ey.abs());
        prop_assert!((cx - ex).abs() <= 1e-9 * scale, "x: {cx} vs {ex}");
        prop_assert!((cy - ey).abs() <= 1e-9 * scale, "y: {cy} vs {ey}");
    }

    #[test]
    fn identity_transform_is_exact(p in arb_point()) {
        prop_assert_eq!(Matrix::IDENTITY.transform(p.x, p.y), (p.x, p.y));
        prop_assert_eq!(Matrix::IDENTITY.transform_point(&p), p);
    }

    #[test]
    fn rotate_about_fixes_its_center(angle in arb_angle(), c in arb_point()) {
        let moved = Matrix::IDENTITY.rotate_about(angle, c.x, c.y).transform_point(&c);
        prop_assert!(moved.equal_to(&c), "{moved:?} moved away from {c:?}");
    }

    #[test]
    fn determinant_is_multiplicative(a in arb_matrix(), b in arb_matrix()) {
        let product = a.multiply(&b).determinant();
        let expected = a.determinant() * b.determinant();
        prop_assert!((product - expected).abs() <= 1e-9 * (1.0 + expected.abs()));
    }
}

// ---------------------------------------------------------------------------
// Vector laws
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn scaling_then_dividing_restores_vector2(v in arb_vector2(), s in arb_scale()) {
        check_scale_round_trip(v, s)?;
    }

    #[test]
    fn scaling_then_dividing_restores_vector3(v in arb_vector3(), s in arb_scale()) {
        check_scale_round_trip(v, s)?;
    }

    #[test]
    fn scaling_then_dividing_restores_vector4(v in arb_vector4(), s in arb_scale()) {
        check_scale_round_trip(v, s)?;
    }

    #[test]
    fn normalized_vector2_has_unit_length(v in arb_vector2()) {
        check_normalize(v)?;
    }

    #[test]
    fn normalized_vector3_has_unit_length(v in arb_vector3()) {
        check_normalize(v)?;
    }

    #[test]
    fn normalized_vector4_has_unit_length(v in arb_vector4()) {
        check_normalize(v)?;
    }

    #[test]
    fn vector4_cross_zeroes_w(a in arb_vector4(), b in arb_vector4()) {
        let c = a.cross(&b);
        prop_assert_eq!(c.w.to_bits(), 0.0f64.to_bits());
        let xyz = Vector3::new(a.x, a.y, a.z).cross(&Vector3::new(b.x, b.y, b.z));
        prop_assert_eq!((c.x, c.y, c.z), (xyz.x, xyz.y, xyz.z));
    }

    #[test]
    fn vector4_length_includes_w(v in arb_vector4()) {
        let xyz = Vector3::new(v.x, v.y, v.z).length_squared();
        prop_assert!((v.length_squared() - (xyz + v.w * v.w)).abs() <= 1e-9 * (1.0 + xyz));
    }

    #[test]
    fn cross_is_anticommutative(a in arb_vector3(), b in arb_vector3()) {
        prop_assert!(abs_diff_eq!(a.cross(&b), -b.cross(&a), epsilon = 1e-9));
    }

    #[test]
    fn distance_is_symmetric(a in arb_vector3(), b in arb_vector3()) {
        prop_assert!((a.distance(&b) - b.distance(&a)).abs() < TOL);
    }

    #[test]
    fn vector3_record_round_trip(v in arb_vector3()) {
        let record = v.to_json().map_err(|e| TestCaseError::fail(e.to_string()))?;
        let parsed = Vector3::from_record(&record).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(parsed, v);
    }

    #[test]
    fn vector3_array_round_trip(v in arb_vector3()) {
        prop_assert_eq!(Vector3::from(<[f64; 3]>::from(v)), v);
    }
}

// ---------------------------------------------------------------------------
// Tolerance
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn wider_tolerance_accepts_more(
        x in arb_coord(),
        delta in -1e-3f64..1e-3,
        narrow in 0.0f64..1e-4,
        widen in 0.0f64..1e-3,
    ) {
        let tight = FloatComparator::new(narrow).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let loose = FloatComparator::new(narrow + widen)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        if tight.equals(x, x + delta) {
            prop_assert!(loose.equals(x, x + delta));
        }
    }

    #[test]
    fn comparisons_partition_the_line(x in arb_coord(), y in arb_coord()) {
        let cmp = FloatComparator::DEFAULT;
        let outcomes = [cmp.less_than(x, y), cmp.equals(x, y), cmp.greater_than(x, y)];
        prop_assert_eq!(outcomes.iter().filter(|&&hit| hit).count(), 1);
    }
}

// ---------------------------------------------------------------------------
// Concrete scenarios
// ---------------------------------------------------------------------------

#[test]
fn quarter_turn_maps_x_axis_to_y_axis() {
    let (x, y) = Matrix::IDENTITY.rotate(FRAC_PI_2).transform(1.0, 0.0);
    assert_abs_diff_eq!(x, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(y, 1.0, epsilon = 1e-12);
}

#[test]
fn three_four_five() {
    assert_abs_diff_eq!(Vector2::new(3.0, 4.0).length(), 5.0);
}

#[test]
fn planar_cross_sign() {
    assert_abs_diff_eq!(Vector2::new(1.0, 0.0).cross(&Vector2::new(0.0, 1.0)), 1.0);
    assert_abs_diff_eq!(Vector2::new(0.0, 1.0).cross(&Vector2::new(1.0, 0.0)), -1.0);
}

#[test]
fn points_within_default_tolerance_are_equal() {
    assert!(Point::new(1.000_000_01, 2.0).equal_to(&Point::new(1.0, 2.0)));
}

#[test]
fn inverting_zero_matrix_is_not_finite() {
    let inverse = Matrix::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0).invert();
    assert!(!inverse.is_finite());
}

#[test]
fn snap_to_grid_of_five() {
    assert_eq!(Point::new(7.0, 7.0).snap_to_grid(5.0), Point::new(5.0, 5.0));
}

#[test]
fn vector_from_two_point_records() {
    let v = Vector2::from_args(&[json!({ "x": 1, "y": 1 }), json!({ "x": 4, "y": 5 })]);
    assert!(matches!(v, Ok(v) if v == Vector2::new(3.0, 4.0)));
}
