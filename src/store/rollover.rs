//! Baseline rollover

use crate::types::DriftError;
use std::fs;
use std::path::Path;

/// Replace the stored baseline with the just-written snapshot.
///
/// Byte-for-byte file copy. Callers must only invoke this after every
/// report write has succeeded: a failed run that never rolls over leaves
/// the old baseline intact, so rerunning recomputes the same diff.
pub fn roll_baseline(latest: &Path, previous: &Path) -> Result<(), DriftError> {
    fs::copy(latest, previous)?;
    Ok(())
}
