// SPDX-FileCopyrightText: 2026 Artifex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Filesystem-backed artifact content loader.
//!
//! Exploded artifacts are read straight from disk; packaged artifacts are
//! opened as zip archives (jar files are zip archives).

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use artifex_core::ArtifactContentLoader;
use tracing::trace;
use zip::result::ZipError;
use zip::ZipArchive;

/// Reads artifact content from directories and zip-format archives.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSystemContentLoader;

impl FileSystemContentLoader {
    pub fn new() -> Self {
        Self
    }

    fn load_from_directory(directory: &Path, relative_path: &str) -> io::Result<Option<Vec<u8>>> {
        let path = relative_path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .fold(directory.to_path_buf(), |path, segment| path.join(segment));

        match std::fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn load_from_archive(archive: &Path, relative_path: &str) -> io::Result<Option<Vec<u8>>> {
        let file = File::open(archive)?;
        let mut zip = ZipArchive::new(file).map_err(zip_to_io)?;

        let mut entry = match zip.by_name(relative_path) {
            Ok(entry) => entry,
            Err(ZipError::FileNotFound) => return Ok(None),
            Err(e) => return Err(zip_to_io(e)),
        };

        let mut bytes = Vec::with_capacity(usize::try_from(entry.size()).unwrap_or_default());
        entry.read_to_end(&mut bytes)?;
        Ok(Some(bytes))
    }
}

impl ArtifactContentLoader for FileSystemContentLoader {
    fn load_content(&self, artifact: &Path, relative_path: &str) -> io::Result<Option<Vec<u8>>> {
        trace!(artifact = %artifact.display(), path = relative_path, "loading artifact content");
        if artifact.is_dir() {
            Self::load_from_directory(artifact, relative_path)
        } else {
            Self::load_from_archive(artifact, relative_path)
        }
    }
}

fn zip_to_io(err: ZipError) -> io::Error {
    match err {
        ZipError::Io(e) => e,
        other => io::Error::new(io::ErrorKind::InvalidData, other),
    }
}
