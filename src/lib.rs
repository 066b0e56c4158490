//! Affine geometry value kernel.
//!
//! Plain value types for 2D affine transforms ([`Matrix`]), points and
//! 2-, 3- and 4-component vectors, unified under the [`Shape`] capability.
//! Tolerant comparisons go through an explicit [`FloatComparator`].
//!
//! ```
//! use cfx_geometry::{Matrix, Shape, Vector, Vector2};
//!
//! let v = Vector2::new(1.0, 0.0).rotate(std::f64::consts::FRAC_PI_2)?;
//! assert!(v.equal_to(&Vector2::new(0.0, 1.0)));
//!
//! let m = Matrix::IDENTITY.translate(3.0, 4.0).scale(2.0, 2.0);
//! assert!(m.multiply(&m.invert()).equal_to(&Matrix::IDENTITY));
//! # Ok::<(), cfx_geometry::KernelError>(())
//! ```

pub mod error;
pub mod geometry;
pub mod math;

pub use error::{KernelError, Result};
pub use geometry::{Geometry, Point, Shape, ShapeTag, Vector, Vector2, Vector3, Vector4};
pub use math::{FloatComparator, Matrix, ToleranceConfig};
