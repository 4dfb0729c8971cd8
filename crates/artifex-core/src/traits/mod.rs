// SPDX-FileCopyrightText: 2026 Artifex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Capability traits consumed by descriptor factories.
//!
//! Loaders extend the [`DescriptorLoader`] base trait, which carries the
//! identity used to register them in a loader repository.

pub mod bundle;
pub mod class_loader;
pub mod content;
pub mod factory;
pub mod loader;

pub use bundle::BundleDescriptorLoader;
pub use class_loader::ClassLoaderModelLoader;
pub use content::ArtifactContentLoader;
pub use factory::ArtifactDescriptorFactory;
pub use loader::DescriptorLoader;
