//! Walk through both capabilities on the plain value types.
//!
//! Run with `cargo run -p vector2d --example tour`. With
//! `--features tracing` the degenerate cases at the end also log `debug!`
//! events to stderr.

use std::f64::consts::FRAC_PI_4;

use vector2d::prelude::*;

fn main() {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt::SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let frame = Rect::from_xywh(10.0, 20.0, 300.0, 200.0);
    println!("frame        {frame:?}");
    println!("center       {:?}", frame.center());
    println!("corners      {:?}", frame.corners());
    println!("aspect ratio {}", frame.aspect_ratio());
    println!("bounding     {:?}", frame.bounding_square());
    println!("inscribed    {:?}", frame.inscribed_square());
    println!("1/3 across   {:?}", frame.point_at(1.0 / 3.0, 0.5));
    println!("trailing     {:?}", frame.point_at_unit(UnitPoint::TRAILING));

    // Rotate the frame's half-diagonal by 45° using complex multiplication.
    let half = frame.size.cast::<Vector<f64>>() / 2.0;
    let rotated = half * Vector::polar(1.0, FRAC_PI_4);
    println!("rotated      {rotated:?} (|v| = {})", rotated.magnitude());
    println!("as point     {:?}", (frame.center().cast::<Vector<f64>>() + rotated).point());

    let flat = Rect::from_xywh(0.0, 0.0, 5.0, 0.0);
    println!("flat aspect  {}", flat.aspect_ratio());
    println!("v / 0        {:?}", Vector::new(1.0, -1.0) / 0.0);
}

