pub mod error;
pub mod sample;
pub mod state;

pub use error::{CardError, Result};
pub use sample::{PlotPoint, RawSample, Sample};
pub use state::{numeric_state, StateSource};
