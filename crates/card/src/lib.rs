pub mod card;
pub mod format;
pub mod metric;
pub mod score;

pub use card::{Card, MetricRow, ScoreRing, SectionView};
pub use metric::{Metric, Section};
