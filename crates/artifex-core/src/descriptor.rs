// SPDX-FileCopyrightText: 2026 Artifex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Descriptor types produced by loaders and assembled by descriptor factories.

use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::types::LoaderDescriber;

/// Default packaging type for a bundle.
pub const DEFAULT_BUNDLE_TYPE: &str = "jar";

/// Coordinates identifying an artifact bundle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleDescriptor {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    #[serde(rename = "type")]
    pub bundle_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classifier: Option<String>,
}

impl BundleDescriptor {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            bundle_type: DEFAULT_BUNDLE_TYPE.to_string(),
            classifier: None,
        }
    }

    pub fn with_type(mut self, bundle_type: impl Into<String>) -> Self {
        self.bundle_type = bundle_type.into();
        self
    }

    pub fn with_classifier(mut self, classifier: impl Into<String>) -> Self {
        self.classifier = Some(classifier.into());
        self
    }
}

impl fmt::Display for BundleDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)?;
        if let Some(classifier) = &self.classifier {
            write!(f, ":{classifier}")?;
        }
        Ok(())
    }
}

/// Dependency scope, as declared by the artifact's build.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum BundleScope {
    #[default]
    Compile,
    Provided,
    Runtime,
    Test,
    System,
    Import,
}

/// A bundle the artifact depends on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BundleDependency {
    pub descriptor: BundleDescriptor,
    #[serde(default)]
    pub scope: BundleScope,
}

/// Classloading model of an artifact: where its resources live and what it
/// exposes to other artifacts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassLoaderModel {
    pub urls: Vec<PathBuf>,
    pub exported_packages: BTreeSet<String>,
    pub exported_resources: BTreeSet<String>,
    pub privileged_exported_packages: BTreeSet<String>,
    pub privileged_artifacts: BTreeSet<String>,
    pub dependencies: Vec<BundleDependency>,
}

/// Describes a plugin artifact: its name, bundle identity, and optionally its
/// classloading model and extension model loader reference.
///
/// The bundle descriptor is required at construction, so a descriptor can
/// never be observed without one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactPluginDescriptor {
    name: String,
    bundle_descriptor: BundleDescriptor,
    #[serde(skip_serializing_if = "Option::is_none")]
    class_loader_model: Option<ClassLoaderModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    extension_model_descriptor_property: Option<LoaderDescriber>,
}

impl ArtifactPluginDescriptor {
    pub fn new(name: impl Into<String>, bundle_descriptor: BundleDescriptor) -> Self {
        Self {
            name: name.into(),
            bundle_descriptor,
            class_loader_model: None,
            extension_model_descriptor_property: None,
        }
    }

    pub fn with_class_loader_model(mut self, model: ClassLoaderModel) -> Self {
        self.class_loader_model = Some(model);
        self
    }

    pub fn with_extension_model_descriptor_property(mut self, describer: LoaderDescriber) -> Self {
        self.extension_model_descriptor_property = Some(describer);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bundle_descriptor(&self) -> &BundleDescriptor {
        &self.bundle_descriptor
    }

    pub fn class_loader_model(&self) -> Option<&ClassLoaderModel> {
        self.class_loader_model.as_ref()
    }

    pub fn extension_model_descriptor_property(&self) -> Option<&LoaderDescriber> {
        self.extension_model_descriptor_property.as_ref()
    }
}
