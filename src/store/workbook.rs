//! Snapshot workbook read/write
//!
//! A snapshot on disk is an xlsx workbook: one worksheet per category,
//! named after the category, prefix strings in the first column starting
//! at the first row. No header row.

use crate::types::{DriftError, Prefix, Snapshot};
use calamine::{open_workbook, Data, Reader, Xlsx};
use rust_xlsxwriter::Workbook;
use std::path::Path;

/// Write a snapshot as a multi-sheet workbook.
///
/// Sheets appear in the snapshot's category order. An empty snapshot still
/// produces a valid workbook (xlsx requires at least one sheet).
pub fn write_snapshot(snapshot: &Snapshot, path: &Path) -> Result<(), DriftError> {
    let write_err = |reason: String| DriftError::WorkbookWrite {
        path: path.to_path_buf(),
        reason,
    };

    let mut workbook = Workbook::new();

    for (category, prefixes) in snapshot.iter() {
        let sheet = workbook.add_worksheet();
        sheet.set_name(category).map_err(|err| write_err(err.to_string()))?;

        for (row, prefix) in prefixes.iter().enumerate() {
            sheet
                .write_string(row as u32, 0, prefix.as_str())
                .map_err(|err| write_err(err.to_string()))?;
        }
    }

    if snapshot.is_empty() {
        workbook.add_worksheet();
    }

    workbook.save(path).map_err(|err| write_err(err.to_string()))?;
    Ok(())
}

/// Read a snapshot back from a multi-sheet workbook.
///
/// Every sheet becomes a category, in sheet order. Blank cells are
/// skipped; any other cell value passes through as its display text,
/// unvalidated.
pub fn read_snapshot(path: &Path) -> Result<Snapshot, DriftError> {
    let read_err = |reason: String| DriftError::WorkbookRead {
        path: path.to_path_buf(),
        reason,
    };

    let mut workbook: Xlsx<std::io::BufReader<std::fs::File>> =
        open_workbook(path).map_err(|err: calamine::XlsxError| read_err(err.to_string()))?;
    let mut snapshot = Snapshot::new();

    for sheet in workbook.sheet_names().to_owned() {
        let range = workbook
            .worksheet_range(&sheet)
            .map_err(|err| read_err(err.to_string()))?;

        let mut prefixes = Vec::new();
        for row in range.rows() {
            match row.first() {
                Some(Data::String(value)) if !value.trim().is_empty() => {
                    prefixes.push(Prefix::new(value.trim()));
                }
                Some(Data::Empty) | None => {}
                Some(other) => prefixes.push(Prefix::new(other.to_string())),
            }
        }

        snapshot.insert(sheet, prefixes);
    }

    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_a_read_error() {
        let dir = TempDir::new().expect("create tempdir");
        let result = read_snapshot(&dir.path().join("does_not_exist.xlsx"));

        let err = result.expect_err("missing workbook must fail");
        assert!(matches!(err, DriftError::WorkbookRead { .. }));
        assert!(err.is_persistence_error());
    }

    #[test]
    fn test_write_empty_snapshot_produces_readable_workbook() {
        let dir = TempDir::new().expect("create tempdir");
        let path = dir.path().join("empty.xlsx");

        write_snapshot(&Snapshot::new(), &path).expect("write empty snapshot");
        let back = read_snapshot(&path).expect("read empty snapshot");

        // The placeholder sheet reads back as one category with no prefixes.
        assert_eq!(back.total_prefixes(), 0);
    }
}
