//! Angle smoke test: prints `angle(v, v)` and `angle(v, -v)` for a fixed vector
//! in several numeric representations.
//!
//! Usage:
//! ```text
//! cargo run --example angle
//! RUST_LOG=angle=debug cargo run --example angle
//! ```

use std::f64::consts::PI;

use numeral::{Number, NumeralError, Vector2};

// The angles are compared exactly: atan2 is exact at these inputs.
#[allow(clippy::float_cmp)]
fn main() -> Result<(), NumeralError> {
    // Default: WARN for everything, INFO for this demo.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("angle=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let v = Vector2::new(-9.37, 5.892)?;
    let opposite = v.negate()?;
    tracing::info!(%v, %opposite, "double precision");

    let same = v.angle(&v)?;
    let reversed = v.angle(&opposite)?;
    println!("{same}");
    println!("{PI}, {reversed}");
    if same != 0.0 || reversed != PI {
        tracing::warn!(same, reversed, "unexpected angle");
    }

    let single = Vector2::new(-9.37_f32, 5.892)?;
    let reversed = single.angle(&single.negate()?)?;
    tracing::info!(%single, reversed, "single precision");

    let dynamic = Vector2::<Number>::from_vector(&v);
    let reversed = dynamic.angle(&dynamic.negate()?)?;
    tracing::debug!(%dynamic, %reversed, "runtime representation");

    Ok(())
}
