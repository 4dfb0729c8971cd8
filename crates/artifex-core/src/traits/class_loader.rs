// SPDX-FileCopyrightText: 2026 Artifex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Class loader model loader capability.

use std::path::Path;

use crate::descriptor::ClassLoaderModel;
use crate::error::LoaderError;
use crate::traits::loader::DescriptorLoader;
use crate::types::Attributes;

/// Produces the classloading model of an artifact: resource roots, exported
/// packages and resources, and dependencies.
pub trait ClassLoaderModelLoader: DescriptorLoader {
    fn load(
        &self,
        artifact: &Path,
        attributes: &Attributes,
    ) -> Result<ClassLoaderModel, LoaderError>;
}
