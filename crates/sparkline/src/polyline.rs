use vitals_core::{PlotPoint, Sample};

/// Map a numeric series onto a fixed logical canvas, producing polyline
/// coordinates in chronological order.
///
/// Fewer than two samples cannot form a line, so the result is empty — a
/// defined "insufficient data" outcome, not an error. When every value is
/// identical the line sits on the vertical center of the canvas. Larger
/// values plot higher (the y axis is inverted).
///
/// Pure and deterministic: identical inputs always yield identical output.
/// No resampling or interpolation is performed, however dense or sparse the
/// series is relative to `width`.
pub fn normalize(
    samples: &[Sample],
    width: f64,
    height: f64,
    vertical_margin: f64,
) -> Vec<PlotPoint> {
    if samples.len() < 2 {
        return Vec::new();
    }

    let min = samples.iter().map(|s| s.value).fold(f64::INFINITY, f64::min);
    let max = samples
        .iter()
        .map(|s| s.value)
        .fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    let n = samples.len();
    samples
        .iter()
        .enumerate()
        .map(|(i, sample)| {
            let fraction = if range == 0.0 {
                0.5
            } else {
                (sample.value - min) / range
            };
            PlotPoint {
                x: i as f64 / (n - 1) as f64 * width,
                y: height - fraction * (height - 2.0 * vertical_margin) - vertical_margin,
            }
        })
        .collect()
}

/// Render points as an SVG `<polyline>` `points` attribute (`"x,y x,y …"`).
pub fn points_attr(points: &[PlotPoint]) -> String {
    points
        .iter()
        .map(|p| format!("{:.1},{:.1}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}
