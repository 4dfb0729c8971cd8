// SPDX-FileCopyrightText: 2026 Artifex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for Artifex.
//!
//! This crate provides the loader capability traits, error types, and
//! descriptor types shared by the loader repository, the descriptor factory,
//! and loader implementations.

pub mod descriptor;
pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use descriptor::{
    ArtifactPluginDescriptor, BundleDependency, BundleDescriptor, BundleScope, ClassLoaderModel,
};
pub use error::{DescriptorError, LoaderError, ManifestError, RegistryError};
pub use types::{ArtifactType, Attributes, LoaderDescriber, LoaderKind};

pub use traits::{
    ArtifactContentLoader, ArtifactDescriptorFactory, BundleDescriptorLoader,
    ClassLoaderModelLoader, DescriptorLoader,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_trait_modules_are_exported() {
        fn _assert_descriptor_loader<T: DescriptorLoader>() {}
        fn _assert_bundle_loader<T: BundleDescriptorLoader>() {}
        fn _assert_class_loader_model_loader<T: ClassLoaderModelLoader>() {}
        fn _assert_content_loader<T: ArtifactContentLoader>() {}
        fn _assert_factory<T: ArtifactDescriptorFactory>() {}
    }

    #[test]
    fn capability_traits_are_object_safe() {
        fn _bundle(_: &dyn BundleDescriptorLoader) {}
        fn _class_loader(_: &dyn ClassLoaderModelLoader) {}
        fn _content(_: &dyn ArtifactContentLoader) {}
    }

    #[test]
    fn loader_kind_display() {
        assert_eq!(LoaderKind::BundleDescriptor.to_string(), "bundle descriptor loader");
        assert_eq!(LoaderKind::ClassLoaderModel.to_string(), "class loader model loader");
    }
}
