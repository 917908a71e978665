//! Report archive writer
//!
//! Creates `.zip` archives with deflated entries containing:
//! - the JSON report at its base name
//! - one entry per distinct artifact at its content address (`{md5}/{name}`)

use crate::bundle::types::{zip_error, ArchiveInfo};
use crate::config::DEFAULT_COMPRESSION_LEVEL;
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use testguide_core::{extended_path, Artifact, ReportResult};
use tracing::debug;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

/// Writer for report archives
///
/// Archives are written atomically: either the complete archive exists at
/// the target path or nothing does.
#[derive(Debug, Clone)]
pub struct ReportArchiveWriter {
    compression_level: i32,
}

impl ReportArchiveWriter {
    /// Create a writer with the given deflate level
    pub fn new(compression_level: i32) -> Self {
        Self { compression_level }
    }

    /// Create a writer with the default deflate level
    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_COMPRESSION_LEVEL)
    }

    /// Deflate level used for new archives
    pub fn compression_level(&self) -> i32 {
        self.compression_level
    }

    /// Write a complete report archive
    ///
    /// `report_name` and `report_data` become the first entry. Artifacts
    /// follow in the given order; an address that is already stored is
    /// skipped.
    pub fn write(
        &self,
        report_name: &str,
        report_data: &[u8],
        artifacts: &[&Artifact],
        path: &Path,
    ) -> ReportResult<ArchiveInfo> {
        let temp_path = path.with_extension("tmp");

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let written = self
            .write_inner(report_name, report_data, artifacts, &temp_path)
            .and_then(|info| {
                fs::rename(&temp_path, path)?;
                Ok(info)
            });

        match written {
            Ok(info) => Ok(ArchiveInfo {
                path: path.to_path_buf(),
                ..info
            }),
            Err(e) => {
                let _ = fs::remove_file(&temp_path);
                Err(e)
            }
        }
    }

    fn write_inner(
        &self,
        report_name: &str,
        report_data: &[u8],
        artifacts: &[&Artifact],
        path: &Path,
    ) -> ReportResult<ArchiveInfo> {
        let file = File::create(path)?;
        let mut zip = ZipWriter::new(BufWriter::new(file));

        zip.start_file(report_name, self.entry_options(false))
            .map_err(|e| zip_error(report_name, e))?;
        zip.write_all(report_data)?;

        let mut stored: HashSet<&str> = HashSet::new();
        let mut skipped_duplicates = 0;
        for artifact in artifacts {
            let address = artifact.path_in_archive();
            if !stored.insert(address) {
                debug!(entry = %address, "Artifact already in archive, skipping");
                skipped_duplicates += 1;
                continue;
            }
            let mut source = File::open(extended_path(artifact.file_path()))?;
            let large = source.metadata()?.len() >= u64::from(u32::MAX);
            zip.start_file(address, self.entry_options(large))
                .map_err(|e| zip_error(address, e))?;
            io::copy(&mut source, &mut zip)?;
        }

        let mut buf_writer = zip
            .finish()
            .map_err(|e| zip_error(&path.display().to_string(), e))?;
        buf_writer.flush()?;
        drop(buf_writer);

        let size_bytes = fs::metadata(path)?.len();

        Ok(ArchiveInfo {
            path: path.to_path_buf(),
            artifact_count: stored.len(),
            skipped_duplicates,
            size_bytes,
        })
    }

    /// Deflated, mode 0644, fixed 1980-01-01 timestamp
    fn entry_options(&self, large_file: bool) -> SimpleFileOptions {
        SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .compression_level(Some(i64::from(self.compression_level)))
            .last_modified_time(DateTime::default())
            .unix_permissions(0o644)
            .large_file(large_file)
    }
}

impl Default for ReportArchiveWriter {
    fn default() -> Self {
        Self::with_defaults()
    }
}
