//! Score-ring color thresholds.

pub const GREEN: &str = "#0EFF27";
pub const YELLOW: &str = "#FCDD00";
pub const ORANGE: &str = "#FD9400";
pub const RED: &str = "#FF4500";
pub const NEUTRAL: &str = "#46494D";

/// Color for a score out of 100.
pub fn score_color(score: Option<f64>) -> &'static str {
    score_color_max(score, 100.0)
}

/// Color for a score out of `max`: green from 80 %, yellow from 60 %, orange
/// from 40 %, red below. Absent scores are neutral grey.
pub fn score_color_max(score: Option<f64>, max: f64) -> &'static str {
    let Some(score) = score else {
        return NEUTRAL;
    };
    let pct = score / max;
    if pct >= 0.8 {
        GREEN
    } else if pct >= 0.6 {
        YELLOW
    } else if pct >= 0.4 {
        ORANGE
    } else {
        RED
    }
}
