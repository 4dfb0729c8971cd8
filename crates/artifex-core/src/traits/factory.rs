// SPDX-FileCopyrightText: 2026 Artifex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Factory trait for building descriptors from artifact locations.

use std::path::Path;

use crate::error::DescriptorError;

/// Creates a descriptor of type `Self::Descriptor` for an artifact.
///
/// Implementations hold no per-call state and may be shared between threads.
pub trait ArtifactDescriptorFactory: Send + Sync {
    type Descriptor;

    fn create(&self, artifact: &Path) -> Result<Self::Descriptor, DescriptorError>;
}
