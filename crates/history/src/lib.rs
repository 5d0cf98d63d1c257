pub mod cache;
pub mod source;

pub use cache::{FetchOutcome, SeriesCache};
pub use source::HistorySource;
