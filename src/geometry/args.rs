//! Helpers for building values from untyped argument lists.

use serde_json::Value;
use tracing::debug;

use crate::error::{ConstructionError, KernelError};

use super::Point;

/// Logs and builds an `IllegalParameters` error.
pub(crate) fn illegal(shape: &'static str, reason: impl Into<String>) -> KernelError {
    let reason = reason.into();
    debug!(shape, %reason, "illegal construction parameters");
    ConstructionError::illegal(shape, reason).into()
}

/// Reads exactly `N` numbers from a JSON array.
pub(crate) fn numeric_array<const N: usize>(value: &Value) -> Option<[f64; N]> {
    match value {
        Value::Array(items) if items.len() == N => numbers(items),
        _ => None,
    }
}

/// Reads exactly `N` numbers from an argument list.
pub(crate) fn numbers<const N: usize>(args: &[Value]) -> Option<[f64; N]> {
    if args.len() != N {
        return None;
    }
    let mut out = [0.0; N];
    for (slot, arg) in out.iter_mut().zip(args) {
        *slot = arg.as_f64()?;
    }
    Some(out)
}

/// The `name` discriminator of an object argument, if any.
pub(crate) fn record_name(value: &Value) -> Option<&str> {
    value.as_object()?.get("name")?.as_str()
}

/// An `{x, y}` object, optionally tagged `"name": "point"`.
pub(crate) fn point_like(value: &Value) -> Option<Point> {
    let object = value.as_object()?;
    match object.get("name") {
        None => {}
        Some(name) if name.as_str() == Some("point") => {}
        Some(_) => return None,
    }
    let x = object.get("x")?.as_f64()?;
    let y = object.get("y")?.as_f64()?;
    Some(Point::new(x, y))
}

/// Copies a slice into a fixed-size array when the lengths match.
pub(crate) fn exact<const N: usize>(shape: &'static str, slice: &[f64]) -> Result<[f64; N], KernelError> {
    <[f64; N]>::try_from(slice)
        .map_err(|_| illegal(shape, format!("expected {N} components, got {}", slice.len())))
}
