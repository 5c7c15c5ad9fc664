use sha2::{Digest, Sha256};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("{path} is missing; run with --write")]
    Missing { path: PathBuf },
    #[error("{path} is out of date; run with --write to regenerate")]
    Stale { path: PathBuf },
}

/// Overwrites `path` with `contents`. The parent directory must already
/// exist. The file handle is flushed and closed before this returns.
pub fn write_artifact(path: impl AsRef<Path>, contents: &str) -> Result<(), ArtifactError> {
    let path_ref = path.as_ref();
    let wrap = |source: io::Error| ArtifactError::Write {
        path: path_ref.to_path_buf(),
        source,
    };
    let mut writer = BufWriter::new(File::create(path_ref).map_err(wrap)?);
    writer.write_all(contents.as_bytes()).map_err(wrap)?;
    writer.flush().map_err(wrap)?;
    Ok(())
}

/// Verifies the artifact on disk matches `expected`, ignoring CRLF differences.
pub fn check_artifact(path: impl AsRef<Path>, expected: &str) -> Result<(), ArtifactError> {
    let path_ref = path.as_ref();
    let existing = match fs::read_to_string(path_ref) {
        Ok(existing) => existing,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(ArtifactError::Missing {
                path: path_ref.to_path_buf(),
            })
        }
        Err(source) => {
            return Err(ArtifactError::Read {
                path: path_ref.to_path_buf(),
                source,
            })
        }
    };
    if normalize(&existing) != normalize(expected) {
        return Err(ArtifactError::Stale {
            path: path_ref.to_path_buf(),
        });
    }
    Ok(())
}

/// SHA256 hex digest of the rendered artifact.
pub fn sha256_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(Sha256::digest(bytes)))
}

fn normalize(input: &str) -> String {
    input.replace("\r\n", "\n")
}
