//! CSV export writers for batch results.
//!
//! Two tables per run: one row per (identifier, filing) for the found side,
//! one row per identifier for the not-found side. Files are UTF-8 with a
//! leading BOM so spreadsheet tools decode accented names correctly, under
//! timestamped file names.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;
use serde::Serialize;

use crate::error::BatchError;
use crate::reshape::ExportRow;
use crate::types::NotFoundEntry;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";
const FILE_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Timestamped export file name, e.g. `cpfs_encontrados_20260807_153000.csv`.
#[must_use]
pub fn export_file_name(kind: &str) -> String {
    format!("cpfs_{kind}_{}.csv", Local::now().format(FILE_TIMESTAMP_FORMAT))
}

/// Writes the found-side table into `dir` and returns the file path.
///
/// # Errors
///
/// [`BatchError::Io`] on directory/file trouble, [`BatchError::Csv`] on
/// serialization trouble.
pub fn write_found_csv(dir: &Path, rows: &[ExportRow]) -> Result<PathBuf, BatchError> {
    write_rows(dir, &export_file_name("encontrados"), rows)
}

/// Writes the not-found-side table into `dir` and returns the file path.
///
/// # Errors
///
/// Same as [`write_found_csv`].
pub fn write_not_found_csv(dir: &Path, rows: &[NotFoundEntry]) -> Result<PathBuf, BatchError> {
    write_rows(dir, &export_file_name("nao_encontrados"), rows)
}

fn write_rows<T: Serialize>(dir: &Path, file_name: &str, rows: &[T]) -> Result<PathBuf, BatchError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(file_name);

    let mut file = File::create(&path)?;
    file.write_all(UTF8_BOM)?;

    let mut writer = csv::Writer::from_writer(file);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(path)
}
