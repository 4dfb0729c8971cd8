// SPDX-FileCopyrightText: 2026 Artifex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Descriptor loader repository, plugin manifest parser, and plugin
//! descriptor factory.
//!
//! A plugin artifact carries a `META-INF/mule-artifact/mule-plugin.json`
//! manifest naming the loaders that build its bundle descriptor and class
//! loader model. The [`ArtifactPluginDescriptorFactory`] reads that manifest
//! and resolves those loaders from a [`DescriptorLoaderRepository`].

pub mod builtin;
pub mod content;
pub mod factory;
pub mod manifest;
pub mod registry;

pub use builtin::{
    builtin_repository, MuleBundleDescriptorLoader, MuleClassLoaderModelLoader, MULE_LOADER_ID,
};
pub use content::FileSystemContentLoader;
pub use factory::{ArtifactPluginDescriptorFactory, DEFAULT_PLUGIN_ARCHIVE_EXTENSION};
pub use manifest::{
    parse_plugin_manifest, parse_plugin_manifest_bytes, LoaderReference, PluginManifest,
    MULE_PLUGIN_JSON_PATH,
};
pub use registry::{DescriptorLoaderRepository, LoaderCapability, LoaderTable, RegisteredLoader};
