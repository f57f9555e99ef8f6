//! Data types for fan control
//!
//! - `types` - Thresholds and the fan's logical state

mod types;

pub use types::{FanState, ThresholdConfig};
