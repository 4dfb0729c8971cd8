// SPDX-FileCopyrightText: 2026 Artifex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Raw content access for directory and archive artifacts.

use std::path::Path;

/// Reads files out of an artifact without caring whether it is exploded on
/// disk or packaged as an archive.
pub trait ArtifactContentLoader: Send + Sync {
    /// Return the bytes stored at `relative_path` inside `artifact`.
    ///
    /// A missing path is `Ok(None)`; only genuine I/O failures are errors.
    /// `relative_path` always uses `/` separators.
    fn load_content(
        &self,
        artifact: &Path,
        relative_path: &str,
    ) -> std::io::Result<Option<Vec<u8>>>;
}
