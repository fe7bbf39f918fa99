use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::{info, warn};
use tempfile::{NamedTempFile, PersistError};
use thiserror::Error;

use crate::Sources;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to create output directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} exists and is not a regular file", path.display())]
    NotAFile { path: PathBuf },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to move generated output into {}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: PersistError,
    },
}

/// Write `contents` to a temporary file next to `path`.
fn stage(dir: &Path, path: &Path, contents: &str) -> Result<NamedTempFile, OutputError> {
    let write_error = |source| OutputError::Write {
        path: path.to_owned(),
        source,
    };

    let mut file = NamedTempFile::new_in(dir).map_err(write_error)?;
    file.write_all(contents.as_bytes()).map_err(write_error)?;
    file.as_file().sync_all().map_err(write_error)?;

    Ok(file)
}

/// Write both generated files into `dir`, replacing earlier versions.
///
/// Both files are staged in `dir` and only moved into place once every
/// write has succeeded, so a failure leaves the previous pair untouched.
/// Returns the paths written, header first.
pub fn write_sources(dir: &Path, sources: &Sources) -> Result<Vec<PathBuf>, OutputError> {
    fs::create_dir_all(dir).map_err(|source| OutputError::CreateDir {
        path: dir.to_owned(),
        source,
    })?;

    let files = [
        (dir.join(&sources.header_name), &sources.header),
        (dir.join(&sources.source_name), &sources.source),
    ];

    for (path, _) in &files {
        if path.exists() && !path.is_file() {
            return Err(OutputError::NotAFile { path: path.clone() });
        }
    }

    let mut staged = Vec::with_capacity(files.len());
    for (path, contents) in &files {
        staged.push((path, contents.len(), stage(dir, path, contents)?));
    }

    let mut written = Vec::with_capacity(files.len());

    for (path, len, file) in staged {
        if path.exists() {
            warn!("replacing {}", path.display());
        }

        file.persist(path).map_err(|source| OutputError::Persist {
            path: path.clone(),
            source,
        })?;

        info!("wrote {} ({} bytes)", path.display(), len);
        written.push(path.clone());
    }

    Ok(written)
}
