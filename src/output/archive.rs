use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;
use tracing::{debug, info};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::OutputError;

/// Container formats for bundling artifacts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ArchiveKind {
    TarGzip,
    Zip,
}

impl ArchiveKind {
    pub fn extension(self) -> &'static str {
        match self {
            ArchiveKind::TarGzip => "tar.gz",
            ArchiveKind::Zip => "zip",
        }
    }

    pub fn archive_path(self, dir: &Path, base_name: &str) -> PathBuf {
        dir.join(format!("{}.{}", base_name, self.extension()))
    }
}

/// Bundle the existing `candidates` into one archive per requested kind and
/// then delete the loose files.
///
/// Every archive receives the full candidate set; loose files are removed
/// only after all archives are written. Candidates that do not exist are
/// skipped, and nothing is produced when none exist. Members are stored under
/// their file name. `on_archived` is called for each archive once it is
/// complete.
pub fn package(
    kinds: &BTreeSet<ArchiveKind>,
    base_name: &str,
    dir: &Path,
    candidates: &[PathBuf],
    on_archived: &mut dyn FnMut(&Path),
) -> Result<Vec<PathBuf>, OutputError> {
    if kinds.is_empty() {
        return Ok(Vec::new());
    }

    let present: Vec<&PathBuf> = candidates.iter().filter(|path| path.exists()).collect();
    if present.is_empty() {
        debug!("no artifacts on disk; skipping archive creation");
        return Ok(Vec::new());
    }

    let mut archives = Vec::with_capacity(kinds.len());
    for kind in kinds {
        let archive_path = kind.archive_path(dir, base_name);
        match kind {
            ArchiveKind::TarGzip => write_tar_gz(&archive_path, &present)
                .map_err(|source| OutputError::Archive {
                    path: archive_path.clone(),
                    source,
                })?,
            ArchiveKind::Zip => write_zip(&archive_path, &present).map_err(|source| {
                OutputError::Zip {
                    path: archive_path.clone(),
                    source,
                }
            })?,
        }
        info!(path = %archive_path.display(), members = present.len(), "wrote archive");
        on_archived(&archive_path);
        archives.push(archive_path);
    }

    for path in present {
        fs::remove_file(path).map_err(|source| OutputError::Remove {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), "removed archived file");
    }

    Ok(archives)
}

fn member_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

fn write_tar_gz(archive_path: &Path, members: &[&PathBuf]) -> io::Result<()> {
    let file = File::create(archive_path)?;
    let mut builder = tar::Builder::new(GzEncoder::new(file, Compression::default()));
    for path in members {
        builder.append_path_with_name(path, member_name(path))?;
    }
    let encoder = builder.into_inner()?;
    encoder.finish()?.sync_all()
}

fn write_zip(archive_path: &Path, members: &[&PathBuf]) -> zip::result::ZipResult<()> {
    let file = File::create(archive_path)?;
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    for path in members {
        let contents = fs::read(path)?;
        zip.start_file(member_name(path), options)?;
        zip.write_all(&contents)?;
    }
    zip.finish()?;
    Ok(())
}
