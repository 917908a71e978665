//! Report archive reader
//!
//! Lists and extracts entries of `.zip` report archives, e.g. to check an
//! export before uploading it.

use crate::bundle::types::zip_error;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use testguide_core::{ReportError, ReportResult};
use zip::result::ZipError;
use zip::ZipArchive;

/// Reader for report archives
pub struct ReportArchiveReader;

impl ReportArchiveReader {
    /// Entry names in archive order
    pub fn entry_names(path: &Path) -> ReportResult<Vec<String>> {
        let mut archive = Self::open(path)?;
        let mut names = Vec::with_capacity(archive.len());

        for index in 0..archive.len() {
            let entry = archive
                .by_index(index)
                .map_err(|e| zip_error(&format!("entry #{}", index), e))?;
            names.push(entry.name().to_string());
        }

        Ok(names)
    }

    /// Contents of the entry called `name`
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::MissingEntry`] if the archive has no such entry.
    pub fn read_entry(path: &Path, name: &str) -> ReportResult<Vec<u8>> {
        let mut archive = Self::open(path)?;

        let mut entry = match archive.by_name(name) {
            Ok(entry) => entry,
            Err(ZipError::FileNotFound) => return Err(ReportError::missing_entry(name)),
            Err(e) => return Err(zip_error(name, e)),
        };

        let mut data = Vec::new();
        entry
            .read_to_end(&mut data)
            .map_err(|e| ReportError::compression(format!("inflate {}: {}", name, e)))?;
        Ok(data)
    }

    fn open(path: &Path) -> ReportResult<ZipArchive<BufReader<File>>> {
        let file = File::open(path)?;
        ZipArchive::new(BufReader::new(file)).map_err(|e| zip_error(&path.display().to_string(), e))
    }
}
