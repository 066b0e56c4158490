mod comparator;
mod interop;
mod matrix;

pub use comparator::{
    are_approximately_equal, is_approximately_zero, is_definitely_greater, is_definitely_less,
    is_greater_or_approx_equal, is_less_or_approx_equal, FloatComparator, ToleranceConfig,
    DEFAULT_TOLERANCE,
};
pub use matrix::Matrix;
