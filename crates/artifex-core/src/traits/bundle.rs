// SPDX-FileCopyrightText: 2026 Artifex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bundle descriptor loader capability.

use std::path::Path;

use crate::descriptor::BundleDescriptor;
use crate::error::LoaderError;
use crate::traits::loader::DescriptorLoader;
use crate::types::Attributes;

/// Produces the coordinates identifying an artifact.
pub trait BundleDescriptorLoader: DescriptorLoader {
    /// Load the bundle descriptor for the artifact at `artifact` using the
    /// attributes declared in its manifest.
    fn load(
        &self,
        artifact: &Path,
        attributes: &Attributes,
    ) -> Result<BundleDescriptor, LoaderError>;
}
