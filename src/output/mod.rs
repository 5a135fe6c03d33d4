//! Reply persistence: segmentation, file materialization, and archiving.
//!
//! A reply flows through [`segment::parse`], then [`materialize::materialize`]
//! writes the requested artifacts, and [`archive::package`] optionally moves
//! them into one or more archives. [`save_reply`] runs the whole pipeline.

pub mod archive;
pub mod extension;
pub mod materialize;
pub mod segment;

use std::collections::BTreeSet;
use std::error::Error as StdError;
use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tracing::debug;

pub use archive::ArchiveKind;
pub use materialize::{Artifact, Materialized};
pub use segment::Segment;

use crate::core::config::data::path_display;

/// Prefix of generated base names when none is given.
pub const DEFAULT_OUTPUT_PREFIX: &str = "seek_output";

/// Destination kinds that can be requested for a reply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OutputKind {
    /// The whole reply as `<base>.md`.
    Markdown,
    /// The whole reply as `<base>.txt`.
    Plaintext,
    /// One `<base>_<index>.<ext>` file per code segment.
    CodeFiles,
}

impl OutputKind {
    pub fn label(self) -> &'static str {
        match self {
            OutputKind::Markdown => "markdown",
            OutputKind::Plaintext => "text",
            OutputKind::CodeFiles => "code",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OutputRequest {
    pub kinds: BTreeSet<OutputKind>,
    pub archives: BTreeSet<ArchiveKind>,
    pub base_name: Option<String>,
}

impl OutputRequest {
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Base name for artifacts, falling back to a timestamped default.
    pub fn resolve_base_name(&self, now: DateTime<Local>) -> String {
        match self.base_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => timestamped_name(DEFAULT_OUTPUT_PREFIX, now),
        }
    }
}

/// `prefix_YYYYMMDD_HHMMSS`
pub fn timestamped_name(prefix: &str, now: DateTime<Local>) -> String {
    format!("{}_{}", prefix, now.format("%Y%m%d_%H%M%S"))
}

/// Errors raised while writing artifacts or archives. All of them abort the
/// current save without cleaning up files already written.
#[derive(Debug)]
pub enum OutputError {
    /// Writing an artifact failed.
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Creating or filling a tar.gz archive failed.
    Archive {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Creating or filling a zip archive failed.
    Zip {
        path: PathBuf,
        source: zip::result::ZipError,
    },
    /// Removing an archived loose file failed.
    Remove {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputError::Write { path, source } => {
                write!(f, "Failed to write {}: {}", path_display(path), source)
            }
            OutputError::Archive { path, source } => {
                write!(f, "Failed to build archive {}: {}", path_display(path), source)
            }
            OutputError::Zip { path, source } => {
                write!(f, "Failed to build archive {}: {}", path_display(path), source)
            }
            OutputError::Remove { path, source } => {
                write!(f, "Failed to remove {}: {}", path_display(path), source)
            }
        }
    }
}

impl StdError for OutputError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            OutputError::Write { source, .. } => Some(source),
            OutputError::Archive { source, .. } => Some(source),
            OutputError::Zip { source, .. } => Some(source),
            OutputError::Remove { source, .. } => Some(source),
        }
    }
}

/// What a full save produced.
#[derive(Debug, Default)]
pub struct SaveReport {
    pub base_name: String,
    pub artifacts: Vec<Artifact>,
    pub archives: Vec<PathBuf>,
}

/// A file that reached disk during [`save_reply`].
#[derive(Clone, Copy, Debug)]
pub enum Saved<'a> {
    Artifact(&'a Artifact),
    Archive(&'a Path),
}

/// Parse `reply`, write the requested artifacts into `dir`, and package them
/// if any archive kind was requested.
///
/// `on_saved` is told about every file as it is produced, including the ones
/// written before an error aborts the save.
pub fn save_reply(
    reply: &str,
    request: &OutputRequest,
    dir: &Path,
    on_saved: &mut dyn FnMut(Saved<'_>),
) -> Result<SaveReport, OutputError> {
    let segments = segment::parse(reply);
    debug!(
        segments = segments.len(),
        code = segments.iter().filter(|s| s.is_code()).count(),
        "parsed reply"
    );

    let Materialized {
        base_name,
        artifacts,
    } = materialize::materialize(reply, &segments, request, dir, &mut |artifact| {
        on_saved(Saved::Artifact(artifact))
    })?;

    let candidates: Vec<PathBuf> = artifacts.iter().map(|a| a.path.clone()).collect();
    let archives = archive::package(
        &request.archives,
        &base_name,
        dir,
        &candidates,
        &mut |path| on_saved(Saved::Archive(path)),
    )?;

    Ok(SaveReport {
        base_name,
        artifacts,
        archives,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn fixed_time() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2024, 3, 9, 7, 5, 1)
            .single()
            .expect("unambiguous local time")
    }

    fn ignore(_: Saved<'_>) {}

    #[test]
    fn explicit_base_name_wins() {
        let request = OutputRequest {
            base_name: Some("report".to_string()),
            ..Default::default()
        };
        assert_eq!(request.resolve_base_name(fixed_time()), "report");
    }

    #[test]
    fn missing_base_name_uses_timestamp() {
        let request = OutputRequest::default();
        assert_eq!(
            request.resolve_base_name(fixed_time()),
            "seek_output_20240309_070501"
        );

        let blank = OutputRequest {
            base_name: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(
            blank.resolve_base_name(fixed_time()),
            "seek_output_20240309_070501"
        );
    }

    #[test]
    fn save_reply_archives_everything_written() {
        let dir = TempDir::new().expect("temp dir");
        let request = OutputRequest {
            kinds: [OutputKind::Markdown, OutputKind::CodeFiles]
                .into_iter()
                .collect(),
            archives: [ArchiveKind::Zip].into_iter().collect(),
            base_name: Some("bundle".to_string()),
        };
        let reply = "Here:\n```kotlin\nfun main() {}\n```";

        let report = save_reply(reply, &request, dir.path(), &mut ignore).expect("save");

        assert_eq!(report.artifacts.len(), 2);
        assert_eq!(report.archives, vec![dir.path().join("bundle.zip")]);
        assert!(!dir.path().join("bundle.md").exists());
        assert!(!dir.path().join("bundle_2.kt").exists());

        let file = std::fs::File::open(dir.path().join("bundle.zip")).unwrap();
        let zip = zip::ZipArchive::new(file).unwrap();
        let mut names: Vec<_> = zip.file_names().map(str::to_string).collect();
        names.sort();
        assert_eq!(names, vec!["bundle.md", "bundle_2.kt"]);
    }

    #[test]
    fn empty_request_writes_nothing() {
        let dir = TempDir::new().expect("temp dir");
        let request = OutputRequest {
            base_name: Some("none".to_string()),
            ..Default::default()
        };

        let report =
            save_reply("```go\nx\n```", &request, dir.path(), &mut ignore).expect("save");

        assert!(report.artifacts.is_empty());
        assert!(report.archives.is_empty());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn files_are_announced_in_the_order_they_land() {
        let dir = TempDir::new().expect("temp dir");
        let request = OutputRequest {
            kinds: [OutputKind::Plaintext, OutputKind::CodeFiles]
                .into_iter()
                .collect(),
            archives: [ArchiveKind::TarGzip].into_iter().collect(),
            base_name: Some("seq".to_string()),
        };
        let mut seen = Vec::new();

        save_reply("```sql\nselect 1;\n```", &request, dir.path(), &mut |saved| {
            seen.push(match saved {
                Saved::Artifact(artifact) => artifact.path.clone(),
                Saved::Archive(path) => path.to_path_buf(),
            })
        })
        .expect("save");

        assert_eq!(
            seen,
            vec![
                dir.path().join("seq.txt"),
                dir.path().join("seq_1.sql"),
                dir.path().join("seq.tar.gz"),
            ]
        );
    }
}
