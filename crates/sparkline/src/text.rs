//! Unicode block sparklines for terminal output.

const BLOCKS: &[char] = &['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Render the last `width` values as a row of block characters.
///
/// A flat series renders the middle block; an empty series renders nothing.
pub fn render(values: &[f64], width: usize) -> String {
    if values.is_empty() || width == 0 {
        return String::new();
    }

    let start = values.len().saturating_sub(width);
    let window = &values[start..];

    let min = window.iter().copied().fold(f64::INFINITY, f64::min);
    let max = window.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    window
        .iter()
        .map(|&v| {
            if range == 0.0 {
                BLOCKS[BLOCKS.len() / 2]
            } else {
                let idx = ((v - min) / range * (BLOCKS.len() - 1) as f64).round() as usize;
                BLOCKS[idx.min(BLOCKS.len() - 1)]
            }
        })
        .collect()
}
