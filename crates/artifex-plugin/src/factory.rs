// SPDX-FileCopyrightText: 2026 Artifex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin descriptor factory.
//!
//! Turns a plugin artifact (directory or archive) into an
//! [`ArtifactPluginDescriptor`] by reading its `mule-plugin.json` manifest and
//! delegating bundle and class loader model resolution to loaders registered in
//! a [`DescriptorLoaderRepository`].

use std::path::Path;
use std::sync::Arc;

use artifex_core::{
    ArtifactContentLoader, ArtifactDescriptorFactory, ArtifactPluginDescriptor, ArtifactType,
    BundleDescriptor, BundleDescriptorLoader, ClassLoaderModel, ClassLoaderModelLoader,
    DescriptorError, LoaderDescriber, LoaderKind,
};
use tracing::{debug, info, info_span};

use crate::content::FileSystemContentLoader;
use crate::manifest::{parse_plugin_manifest_bytes, LoaderReference, MULE_PLUGIN_JSON_PATH};
use crate::registry::{DescriptorLoaderRepository, LoaderCapability};

/// Archive extension recognized for plugins when none are configured.
pub const DEFAULT_PLUGIN_ARCHIVE_EXTENSION: &str = "jar";

/// Creates [`ArtifactPluginDescriptor`] instances.
///
/// The factory keeps no per-call state; one instance can be shared between
/// threads and reused for any number of artifacts.
#[derive(Clone)]
pub struct ArtifactPluginDescriptorFactory {
    repository: Arc<DescriptorLoaderRepository>,
    content_loader: Arc<dyn ArtifactContentLoader>,
    archive_extensions: Vec<String>,
}

impl ArtifactPluginDescriptorFactory {
    /// Create a factory resolving loaders from `repository`, reading content
    /// from the filesystem, and accepting `.jar` archives.
    pub fn new(repository: Arc<DescriptorLoaderRepository>) -> Self {
        Self {
            repository,
            content_loader: Arc::new(FileSystemContentLoader::new()),
            archive_extensions: vec![DEFAULT_PLUGIN_ARCHIVE_EXTENSION.to_string()],
        }
    }

    /// Replace the collaborator used to read the manifest out of the artifact.
    pub fn with_content_loader(mut self, content_loader: Arc<dyn ArtifactContentLoader>) -> Self {
        self.content_loader = content_loader;
        self
    }

    /// Replace the set of archive extensions recognized as plugins.
    ///
    /// Extensions are compared case-insensitively and may be given with or
    /// without a leading dot.
    pub fn with_archive_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.archive_extensions = extensions
            .into_iter()
            .map(|ext| ext.as_ref().trim_start_matches('.').to_ascii_lowercase())
            .collect();
        self
    }

    fn is_plugin_artifact(&self, artifact: &Path) -> bool {
        if artifact.is_dir() {
            return true;
        }
        artifact
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                self.archive_extensions
                    .iter()
                    .any(|known| known.eq_ignore_ascii_case(ext))
            })
            .unwrap_or(false)
    }

    fn load_from_json_descriptor(
        &self,
        artifact: &Path,
        content: Vec<u8>,
    ) -> Result<ArtifactPluginDescriptor, DescriptorError> {
        let manifest = parse_plugin_manifest_bytes(content)?;
        debug!(plugin = %manifest.name, "parsed plugin manifest");

        let bundle_descriptor =
            self.bundle_descriptor(artifact, &manifest.bundle_descriptor_loader)?;
        let mut descriptor = ArtifactPluginDescriptor::new(manifest.name, bundle_descriptor);

        if let Some(reference) = &manifest.class_loader_model_loader_descriptor {
            let model = self.class_loader_model(artifact, reference)?;
            descriptor = descriptor.with_class_loader_model(model);
        }

        // Passed through as declared; no loader is resolved for the extension model.
        if let Some(reference) = manifest.extension_model_loader_descriptor {
            descriptor = descriptor
                .with_extension_model_descriptor_property(LoaderDescriber::from(reference));
        }

        Ok(descriptor)
    }

    fn bundle_descriptor(
        &self,
        artifact: &Path,
        reference: &LoaderReference,
    ) -> Result<BundleDescriptor, DescriptorError> {
        let loader = self.resolve::<dyn BundleDescriptorLoader>(artifact, reference)?;
        loader
            .load(artifact, &reference.attributes)
            .map_err(|source| DescriptorError::InvalidLoaderConfiguration {
                kind: LoaderKind::BundleDescriptor,
                id: reference.id.clone(),
                source,
            })
    }

    fn class_loader_model(
        &self,
        artifact: &Path,
        reference: &LoaderReference,
    ) -> Result<ClassLoaderModel, DescriptorError> {
        let loader = self.resolve::<dyn ClassLoaderModelLoader>(artifact, reference)?;
        loader
            .load(artifact, &reference.attributes)
            .map_err(|source| DescriptorError::InvalidLoaderConfiguration {
                kind: LoaderKind::ClassLoaderModel,
                id: reference.id.clone(),
                source,
            })
    }

    fn resolve<C>(
        &self,
        artifact: &Path,
        reference: &LoaderReference,
    ) -> Result<Arc<C>, DescriptorError>
    where
        C: LoaderCapability + ?Sized,
    {
        let kind = C::KIND;
        debug!(kind = %kind, id = %reference.id, "resolving descriptor loader");
        self.repository
            .get::<C>(&reference.id, ArtifactType::Plugin)
            .map_err(|_| DescriptorError::LoaderNotFound {
                kind,
                id: reference.id.clone(),
                artifact: artifact.to_path_buf(),
            })
    }
}

impl ArtifactDescriptorFactory for ArtifactPluginDescriptorFactory {
    type Descriptor = ArtifactPluginDescriptor;

    fn create(&self, artifact: &Path) -> Result<ArtifactPluginDescriptor, DescriptorError> {
        let span = info_span!("plugin_descriptor", artifact = %artifact.display());
        let _guard = span.enter();

        if !self.is_plugin_artifact(artifact) {
            return Err(DescriptorError::InvalidArtifact {
                artifact: artifact.to_path_buf(),
            });
        }

        let content = self
            .content_loader
            .load_content(artifact, MULE_PLUGIN_JSON_PATH)
            .map_err(|source| DescriptorError::Io {
                artifact: artifact.to_path_buf(),
                source,
            })?
            .ok_or_else(|| DescriptorError::DescriptorNotFound {
                expected_path: MULE_PLUGIN_JSON_PATH.to_string(),
                artifact: artifact.to_path_buf(),
            })?;

        let descriptor = self.load_from_json_descriptor(artifact, content)?;
        info!(
            plugin = %descriptor.name(),
            bundle = %descriptor.bundle_descriptor(),
            class_loader_model = descriptor.class_loader_model().is_some(),
            "created plugin descriptor"
        );
        Ok(descriptor)
    }
}

impl std::fmt::Debug for ArtifactPluginDescriptorFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArtifactPluginDescriptorFactory")
            .field("repository", &self.repository)
            .field("archive_extensions", &self.archive_extensions)
            .finish()
    }
}
