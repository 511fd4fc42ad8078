//! Species-area relationship plots.

use super::style::{sar_colors, LineStyle};
use super::{check_positive, Figure, PlotError};
use crate::error::check_paired;

/// Plot several `(areas, richness)` curves on log-log axes.
///
/// Curve `i` of `N` is colored `hsv(i / N, 0.5, 0.5)`.
pub fn plot_sars<A, S>(fig: &mut Figure, series: &[(A, S)]) -> Result<(), PlotError>
where
    A: AsRef<[f64]>,
    S: AsRef<[f64]>,
{
    for (areas, richness) in series {
        let (areas, richness) = (areas.as_ref(), richness.as_ref());
        check_paired("areas", areas, "richness", richness)?;
        check_positive("areas", areas)?;
        check_positive("richness", richness)?;
    }
    let colors = sar_colors(series.len());
    for ((areas, richness), color) in series.iter().zip(colors) {
        let points = areas
            .as_ref()
            .iter()
            .copied()
            .zip(richness.as_ref().iter().copied())
            .collect();
        fig.line(points, LineStyle::solid(color));
    }
    fig.set_loglog();
    fig.set_labels("Area", "Richness");
    tracing::debug!(series = series.len(), "plotted sars");
    Ok(())
}

/// `plot_sars` into a fresh default figure.
pub fn sars_plot<A, S>(series: &[(A, S)]) -> Result<Figure, PlotError>
where
    A: AsRef<[f64]>,
    S: AsRef<[f64]>,
{
    let mut fig = Figure::default();
    plot_sars(&mut fig, series)?;
    Ok(fig)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::density::Scale;
    use crate::plot::Layer;

    fn power_law(c: f64, z: f64) -> (Vec<f64>, Vec<f64>) {
        let areas: Vec<f64> = (0..6).map(|k| 4f64.powi(k)).collect();
        let richness = areas.iter().map(|a| c * a.powf(z)).collect();
        (areas, richness)
    }

    #[test]
    fn sars_get_distinct_hues_on_loglog() {
        let series = vec![power_law(10.0, 0.25), power_law(5.0, 0.3), power_law(2.0, 0.4)];
        let fig = sars_plot(&series).unwrap();
        assert_eq!(fig.x_scale, Scale::Log);
        assert_eq!(fig.y_scale, Scale::Log);
        assert_eq!((fig.x_label.as_str(), fig.y_label.as_str()), ("Area", "Richness"));
        let colors: Vec<_> = fig
            .layers()
            .iter()
            .map(|l| match l {
                Layer::Line { style, .. } => style.color,
                other => panic!("unexpected layer {other:?}"),
            })
            .collect();
        assert_eq!(colors, sar_colors(3));
        assert!(fig.render_svg().unwrap().contains("Richness"));
    }

    #[test]
    fn sars_reject_non_positive_and_mismatched() {
        let bad = vec![(vec![0.0, 1.0], vec![1.0, 2.0])];
        assert!(sars_plot(&bad).is_err());
        let mismatched = vec![(vec![1.0, 2.0], vec![1.0])];
        assert!(sars_plot(&mismatched).is_err());
    }
}
