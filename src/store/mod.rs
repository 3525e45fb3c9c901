//! Snapshot persistence - workbook files and baseline rollover

mod rollover;
mod workbook;

pub use rollover::roll_baseline;
pub use workbook::{read_snapshot, write_snapshot};
