//! Rank-abundance plots.

use plotters::style::colors::BLUE;

use super::style::{rad_line_style, LineStyle, Marker};
use super::{Figure, PlotError};
use crate::density::Scale;
use crate::rad::{get_rad_data, sorted_descending};

/// Plot one abundance vector, sorted descending, against rank.
///
/// Blue circles joined by a solid line on linear axes. The caller's vector
/// is not reordered.
pub fn plot_rad(fig: &mut Figure, abundances: &[f64]) -> Result<(), PlotError> {
    let sorted = sorted_descending(abundances)?;
    let points = sorted
        .iter()
        .enumerate()
        .map(|(i, &n)| ((i + 1) as f64, n))
        .collect();
    fig.line(points, LineStyle::new(BLUE, Marker::Circle, false));
    fig.set_labels("Rank", "Abundance");
    Ok(())
}

/// Plot relative abundance vs rank for several communities on a log y axis.
///
/// Series `i` uses `RAD_LINE_STYLES[i % 8]`. Species with zero abundance keep
/// their rank but are left out of the drawn series.
pub fn plot_multiple_rads<V>(fig: &mut Figure, vectors: &[V]) -> Result<(), PlotError>
where
    V: AsRef<[f64]>,
{
    // Validate everything before touching the figure.
    let rads = vectors
        .iter()
        .map(|ns| get_rad_data(ns.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    fig.y_scale = Scale::Log;
    for (i, rad) in rads.iter().enumerate() {
        // Zero abundances have no place on a log axis.
        let points = rad.points().into_iter().filter(|&(_, p)| p > 0.0).collect();
        fig.line(points, rad_line_style(i));
    }
    fig.set_labels("Rank", "Abundance");
    tracing::debug!(series = rads.len(), "plotted rads");
    Ok(())
}

/// `plot_rad` into a fresh default figure.
pub fn rad_plot(abundances: &[f64]) -> Result<Figure, PlotError> {
    let mut fig = Figure::default();
    plot_rad(&mut fig, abundances)?;
    Ok(fig)
}

/// `plot_multiple_rads` into a fresh default figure.
pub fn multiple_rads_plot<V: AsRef<[f64]>>(vectors: &[V]) -> Result<Figure, PlotError> {
    let mut fig = Figure::default();
    plot_multiple_rads(&mut fig, vectors)?;
    Ok(fig)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::Layer;
    use crate::plot::style::RAD_LINE_STYLES;

    #[test]
    fn single_rad_is_sorted_copy() {
        let ns = vec![1.0, 9.0, 4.0];
        let fig = rad_plot(&ns).unwrap();
        assert_eq!(ns, vec![1.0, 9.0, 4.0]);
        match &fig.layers()[0] {
            Layer::Line { points, style } => {
                assert_eq!(points, &vec![(1.0, 9.0), (2.0, 4.0), (3.0, 1.0)]);
                assert_eq!(style.marker, Marker::Circle);
            }
            other => panic!("unexpected layer {other:?}"),
        }
        assert_eq!(fig.x_label, "Rank");
        assert_eq!(fig.y_label, "Abundance");
        assert_eq!(fig.y_scale, Scale::Linear);
    }

    #[test]
    fn multiple_rads_cycle_styles_on_semilog_axes() {
        let vectors: Vec<Vec<f64>> = (1..=9).map(|k| vec![k as f64, 1.0, 2.0]).collect();
        let fig = multiple_rads_plot(&vectors).unwrap();
        assert_eq!(fig.y_scale, Scale::Log);
        assert_eq!(fig.x_scale, Scale::Linear);
        assert_eq!(fig.layers().len(), 9);
        let styles: Vec<LineStyle> = fig
            .layers()
            .iter()
            .map(|l| match l {
                Layer::Line { style, .. } => *style,
                other => panic!("unexpected layer {other:?}"),
            })
            .collect();
        assert_eq!(styles[..8], RAD_LINE_STYLES[..]);
        assert_eq!(styles[8], RAD_LINE_STYLES[0]);
        assert!(fig.render_svg().is_ok());
    }

    #[test]
    fn zero_abundance_is_skipped_on_log_axis() {
        let fig = multiple_rads_plot(&[vec![5.0, 0.0, 3.0]]).unwrap();
        match &fig.layers()[0] {
            Layer::Line { points, .. } => {
                assert_eq!(points, &vec![(1.0, 0.625), (2.0, 0.375)]);
            }
            other => panic!("unexpected layer {other:?}"),
        }
        let ((_, _), (y0, _)) = fig.limits().unwrap();
        assert!(y0 > 0.0);
        assert!(fig.render_svg().is_ok());
    }

    #[test]
    fn multiple_rads_rejects_bad_vector_without_drawing() {
        let mut fig = Figure::default();
        let err = plot_multiple_rads(&mut fig, &[vec![1.0, 2.0], vec![0.0, 0.0]]).unwrap_err();
        assert!(matches!(err, PlotError::Analysis(e) if e.is_degenerate()));
        assert!(fig.layers().is_empty());
    }
}
