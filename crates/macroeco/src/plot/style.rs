//! Colors, markers and line styles.

use plotters::style::colors::{BLACK, BLUE, RED};
use plotters::style::RGBColor;

/// Matplotlib's `'g'` (half-intensity green), which reads better than pure green.
pub const GREEN_DARK: RGBColor = RGBColor(0, 128, 0);

/// Marker drawn at every data point of a line series.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    None,
    Circle,
    Cross,
}

/// Color, marker and dash pattern of a line series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineStyle {
    pub color: RGBColor,
    pub marker: Marker,
    pub dashed: bool,
}

impl LineStyle {
    pub const fn solid(color: RGBColor) -> Self {
        Self {
            color,
            marker: Marker::None,
            dashed: false,
        }
    }

    pub const fn new(color: RGBColor, marker: Marker, dashed: bool) -> Self {
        Self {
            color,
            marker,
            dashed,
        }
    }
}

/// Styles cycled through by `plot_multiple_rads`: blue, red, black, green with
/// circles and solid lines, then the same colors with crosses and dashes.
pub const RAD_LINE_STYLES: [LineStyle; 8] = [
    LineStyle::new(BLUE, Marker::Circle, false),
    LineStyle::new(RED, Marker::Circle, false),
    LineStyle::new(BLACK, Marker::Circle, false),
    LineStyle::new(GREEN_DARK, Marker::Circle, false),
    LineStyle::new(BLUE, Marker::Cross, true),
    LineStyle::new(RED, Marker::Cross, true),
    LineStyle::new(BLACK, Marker::Cross, true),
    LineStyle::new(GREEN_DARK, Marker::Cross, true),
];

/// Style of series `index`, wrapping around the palette.
#[inline]
pub fn rad_line_style(index: usize) -> LineStyle {
    RAD_LINE_STYLES[index % RAD_LINE_STYLES.len()]
}

/// Fill color and opacity of a confidence hull.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FillStyle {
    pub color: RGBColor,
    /// Opacity in `[0, 1]`.
    pub alpha: f64,
}

impl Default for FillStyle {
    fn default() -> Self {
        Self {
            color: BLUE,
            alpha: 0.5,
        }
    }
}

/// HSV → RGB with all channels in `[0, 1]`; hue wraps around.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }
    let h6 = h.rem_euclid(1.0) * 6.0;
    let sector = h6.floor();
    let f = h6 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match sector as u8 % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

#[inline]
fn to_channel(c: f64) -> u8 {
    (c * 255.0).round().clamp(0.0, 255.0) as u8
}

/// `n` colors evenly spaced around the hue circle at saturation and value 0.5.
pub fn sar_colors(n: usize) -> Vec<RGBColor> {
    (0..n)
        .map(|i| {
            let (r, g, b) = hsv_to_rgb(i as f64 / n as f64, 0.5, 0.5);
            RGBColor(to_channel(r), to_channel(g), to_channel(b))
        })
        .collect()
}

/// Viridis colors for `values`, normalized over their own min..max.
///
/// When every value is equal they all map to the low end of the colormap.
pub fn viridis_colors(values: &[f64]) -> Vec<RGBColor> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;
    values
        .iter()
        .map(|v| {
            let t = if span > 0.0 {
                ((v - min) / span).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let c = colorous::VIRIDIS.eval_continuous(t);
            RGBColor(c.r, c.g, c.b)
        })
        .collect()
}
