//! Density-colored scatter with a 95 % confidence hull on top.
//!
//! Usage:
//!   cargo run -p macroeco --example density_hull -- [out.svg]
//!
//! Draws a seeded two-cluster point cloud, logs the hull summary and, when an
//! output path is given, writes the rendered SVG there.

use macroeco::plot::{plot_color_by_pt_dens, plot_confidence_hull, Figure, FillStyle};
use macroeco::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing_subscriber::fmt::SubscriberBuilder;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut rng = StdRng::seed_from_u64(2025);
    let (x, y): (Vec<f64>, Vec<f64>) = (0..600)
        .map(|i| {
            let (cx, cy) = if i % 3 == 0 { (6.0, 2.0) } else { (2.0, 5.0) };
            (cx + rng.gen_range(-1.5..1.5), cy + rng.gen_range(-1.5..1.5))
        })
        .unzip();

    let mut fig = Figure::default();
    fig.set_title("Point density");
    fig.set_labels("x", "y");
    plot_color_by_pt_dens(&mut fig, &x, &y, 0.5, false)?;
    let hull = plot_confidence_hull(
        &mut fig,
        &x,
        &y,
        0.5,
        HullCfg::default(),
        FillStyle::default(),
    )?;
    tracing::info!(
        selected = hull.selected,
        vertices = hull.vertices.len(),
        area = hull.area(),
        "confidence hull"
    );

    let svg = fig.render_svg()?;
    match std::env::args().nth(1) {
        Some(out) => {
            std::fs::write(&out, svg)?;
            tracing::info!(out = %out, "wrote figure");
        }
        None => println!("rendered {} bytes of SVG", svg.len()),
    }
    Ok(())
}
