//! Walks through the geometry kernel and logs each result.
//!
//! Usage:
//! ```text
//! cargo run --example kernel_tour
//! RUST_LOG=cfx_geometry=debug cargo run --example kernel_tour
//! ```

use std::f64::consts::FRAC_PI_2;

use cfx_geometry::{Geometry, KernelError, Matrix, Point, Shape, ToleranceConfig, Vector, Vector2, Vector3};
use serde_json::json;
use tracing::{info, warn};

fn main() -> Result<(), KernelError> {
    // Default: WARN for everything, INFO for the tour and the kernel.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("kernel_tour=info".parse().unwrap_or_default())
        .add_directive("cfx_geometry=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cmp = ToleranceConfig::from_json(r#"{ "tolerance": 1e-9 }"#)?.comparator()?;
    info!(tolerance = cmp.tolerance(), "loaded comparator");

    // Frame of a sprite at (100, 50), turned a quarter and doubled.
    let frame = Matrix::from_transform(100.0, 50.0, FRAC_PI_2, 2.0);
    let local = Point::new(1.0, 0.0);
    let world = local.transform(&frame)?;
    let back = world.transform(&frame.try_invert()?)?;
    info!(?world, ?back, round_trip = back.equal_to_with(&local, &cmp), "frame round trip");

    let degenerate = Matrix::EMPTY;
    if let Err(err) = degenerate.try_invert() {
        warn!(%err, "skipping degenerate frame");
    }

    let velocity = Vector2::from_args(&[json!({ "x": 0, "y": 0 }), json!({ "x": 3, "y": 4 })])?;
    info!(
        speed = velocity.length(),
        heading = ?velocity.normalize(),
        "velocity from two points"
    );

    let up = Vector3::new(0.0, 1.0, 0.0);
    let right = Vector3::from([1.0, 0.0, 0.0]);
    info!(forward = ?right.cross(&up), "right-handed basis");

    let record = json!({ "name": "point", "x": 7.4, "y": 12.6 });
    let shape = Geometry::from_record(&record)?;
    let snapped = Point::from_record(&record)?.snap_to_grid(5.0);
    info!(
        name = shape.name(),
        ?snapped,
        on_self = snapped.on(&snapped.to_geometry())?,
        "parsed record"
    );

    let moved = shape.rotate_about(FRAC_PI_2, 10.0, 10.0)?;
    info!(json = %moved.to_json()?, "rotated about (10, 10)");

    Ok(())
}
