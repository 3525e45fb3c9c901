//! Terminal status output

mod progress;

pub use progress::StatusReporter;
