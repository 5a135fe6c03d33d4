use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::info;

use super::extension::extension_for;
use super::segment::Segment;
use super::{OutputError, OutputKind, OutputRequest};

/// A file written while materializing a reply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artifact {
    pub kind: OutputKind,
    pub path: PathBuf,
    pub bytes_written: usize,
}

#[derive(Debug)]
pub struct Materialized {
    pub base_name: String,
    pub artifacts: Vec<Artifact>,
}

/// Write the artifacts `request` asks for into `dir`.
///
/// Whole-reply kinds receive `reply` untouched. Code files are numbered by
/// their 1-based position in `segments`, so text lines count towards the
/// index. Existing files are overwritten. `on_written` sees each artifact as
/// soon as it is on disk, so files left behind by a later failure are still
/// reported.
pub fn materialize(
    reply: &str,
    segments: &[Segment],
    request: &OutputRequest,
    dir: &Path,
    on_written: &mut dyn FnMut(&Artifact),
) -> Result<Materialized, OutputError> {
    let base_name = request.resolve_base_name(Local::now());
    let mut artifacts = Vec::new();

    for kind in &request.kinds {
        match kind {
            OutputKind::Markdown => {
                let path = dir.join(format!("{base_name}.md"));
                let artifact = write_artifact(*kind, path, reply)?;
                on_written(&artifact);
                artifacts.push(artifact);
            }
            OutputKind::Plaintext => {
                let path = dir.join(format!("{base_name}.txt"));
                let artifact = write_artifact(*kind, path, reply)?;
                on_written(&artifact);
                artifacts.push(artifact);
            }
            OutputKind::CodeFiles => {
                for (index, segment) in segments.iter().enumerate() {
                    if let Segment::Code { language_tag, body } = segment {
                        let ext = extension_for(language_tag);
                        let path = dir.join(code_file_name(&base_name, index + 1, ext));
                        let artifact = write_artifact(*kind, path, body)?;
                        on_written(&artifact);
                        artifacts.push(artifact);
                    }
                }
            }
        }
    }

    Ok(Materialized {
        base_name,
        artifacts,
    })
}

pub fn code_file_name(base_name: &str, index: usize, extension: &str) -> String {
    format!("{base_name}_{index}.{extension}")
}

fn write_artifact(
    kind: OutputKind,
    path: PathBuf,
    contents: &str,
) -> Result<Artifact, OutputError> {
    fs::write(&path, contents).map_err(|source| OutputError::Write {
        path: path.clone(),
        source,
    })?;
    info!(path = %path.display(), kind = kind.label(), "wrote artifact");
    Ok(Artifact {
        kind,
        path,
        bytes_written: contents.len(),
    })
}
