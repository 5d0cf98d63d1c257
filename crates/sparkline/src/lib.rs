pub mod polyline;
pub mod text;

pub use polyline::{normalize, points_attr};
