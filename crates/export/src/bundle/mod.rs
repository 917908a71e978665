//! Report archive: the test.guide upload bundle
//!
//! ## Archive Structure
//!
//! ```text
//! report.zip
//! ├── report.json                # the pretty-printed report
//! └── {md5}/{file name}          # one entry per distinct artifact
//! ```
//!
//! Artifact entries are keyed by content address, so a file attached to
//! several test cases or steps is stored once. Entries are deflated and
//! carry mode 0644 and a fixed 1980-01-01 timestamp, which keeps archives
//! of the same report byte-identical.

pub mod reader;
pub mod types;
pub mod writer;

pub use reader::ReportArchiveReader;
pub use types::{archive_path_for, ArchiveInfo, ExportInfo, ExportState, REPORT_ARCHIVE_EXTENSION};
pub use writer::ReportArchiveWriter;
