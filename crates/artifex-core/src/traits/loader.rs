// SPDX-FileCopyrightText: 2026 Artifex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Base trait that all descriptor loaders must implement.

use crate::types::ArtifactType;

/// Identity shared by every loader capability.
///
/// A loader is registered once per artifact type it supports, under the id it
/// reports here. Manifests select loaders by that id.
pub trait DescriptorLoader: Send + Sync + 'static {
    /// Identifier referenced from manifests (e.g. `"mule"`).
    fn id(&self) -> &str;

    /// Whether this loader can handle artifacts of the given type.
    fn supports_artifact_type(&self, artifact_type: ArtifactType) -> bool;
}
