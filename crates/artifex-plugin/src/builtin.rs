// SPDX-FileCopyrightText: 2026 Artifex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in descriptor loaders.
//!
//! Both loaders register under the id `mule` and build their result purely
//! from the attributes declared in the manifest. They do not resolve
//! dependencies against any repository.

use std::collections::BTreeSet;
use std::path::Path;

use artifex_core::{
    ArtifactType, Attributes, BundleDependency, BundleDescriptor, BundleDescriptorLoader,
    BundleScope, ClassLoaderModel, ClassLoaderModelLoader, DescriptorLoader, LoaderError,
    RegistryError,
};
use serde_json::{Map, Value};

use crate::registry::DescriptorLoaderRepository;

/// Id under which the built-in loaders are registered.
pub const MULE_LOADER_ID: &str = "mule";

/// Folder of compiled classes inside an exploded artifact.
const CLASSES_FOLDER: &str = "classes";

/// Returns a repository populated with the built-in loaders.
pub fn builtin_repository() -> Result<DescriptorLoaderRepository, RegistryError> {
    let mut repository = DescriptorLoaderRepository::new();
    repository.register_bundle_descriptor_loader(MuleBundleDescriptorLoader)?;
    repository.register_class_loader_model_loader(MuleClassLoaderModelLoader)?;
    Ok(repository)
}

/// Reads bundle coordinates from `groupId`, `artifactId`, `version`, and the
/// optional `type` and `classifier` attributes.
#[derive(Debug, Clone, Copy, Default)]
pub struct MuleBundleDescriptorLoader;

impl DescriptorLoader for MuleBundleDescriptorLoader {
    fn id(&self) -> &str {
        MULE_LOADER_ID
    }

    fn supports_artifact_type(&self, _artifact_type: ArtifactType) -> bool {
        true
    }
}

impl BundleDescriptorLoader for MuleBundleDescriptorLoader {
    fn load(
        &self,
        _artifact: &Path,
        attributes: &Attributes,
    ) -> Result<BundleDescriptor, LoaderError> {
        bundle_from_object(|name| attributes.get(name), "")
    }
}

/// Builds a class loader model from `exportedPackages`, `exportedResources`,
/// `privilegedExportedPackages`, `privilegedArtifacts`, and `dependencies`.
///
/// The artifact root is always the first url. For exploded artifacts a
/// `classes` folder is added when present.
#[derive(Debug, Clone, Copy, Default)]
pub struct MuleClassLoaderModelLoader;

impl DescriptorLoader for MuleClassLoaderModelLoader {
    fn id(&self) -> &str {
        MULE_LOADER_ID
    }

    fn supports_artifact_type(&self, artifact_type: ArtifactType) -> bool {
        artifact_type != ArtifactType::Service
    }
}

impl ClassLoaderModelLoader for MuleClassLoaderModelLoader {
    fn load(
        &self,
        artifact: &Path,
        attributes: &Attributes,
    ) -> Result<ClassLoaderModel, LoaderError> {
        let mut urls = vec![artifact.to_path_buf()];
        let classes = artifact.join(CLASSES_FOLDER);
        if artifact.is_dir() && classes.is_dir() {
            urls.push(classes);
        }

        let dependencies = match attributes.get("dependencies") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(index, item)| dependency(index, item))
                .collect::<Result<Vec<_>, LoaderError>>()?,
            Some(_) => {
                return Err(LoaderError::InvalidAttribute {
                    attribute: "dependencies".into(),
                    reason: "expected an array of objects".into(),
                })
            }
        };

        Ok(ClassLoaderModel {
            urls,
            exported_packages: string_set(attributes, "exportedPackages")?,
            exported_resources: string_set(attributes, "exportedResources")?,
            privileged_exported_packages: string_set(attributes, "privilegedExportedPackages")?,
            privileged_artifacts: string_set(attributes, "privilegedArtifacts")?,
            dependencies,
        })
    }
}

fn dependency(index: usize, item: &Value) -> Result<BundleDependency, LoaderError> {
    let prefix = format!("dependencies[{index}].");
    let object: &Map<String, Value> = item
        .as_object()
        .ok_or_else(|| LoaderError::InvalidAttribute {
            attribute: format!("dependencies[{index}]"),
            reason: "expected an object".into(),
        })?;

    let descriptor = bundle_from_object(|name| object.get(name), &prefix)?;
    let scope = match object.get("scope") {
        None | Some(Value::Null) => BundleScope::default(),
        Some(Value::String(s)) => {
            s.parse::<BundleScope>()
                .map_err(|_| LoaderError::InvalidAttribute {
                    attribute: format!("{prefix}scope"),
                    reason: format!("unknown scope '{s}'"),
                })?
        }
        Some(_) => {
            return Err(LoaderError::InvalidAttribute {
                attribute: format!("{prefix}scope"),
                reason: "expected a string".into(),
            })
        }
    };

    Ok(BundleDependency { descriptor, scope })
}

/// Build bundle coordinates from looked-up attribute values. `prefix`
/// qualifies attribute names in error messages.
fn bundle_from_object<'a>(
    lookup: impl Fn(&str) -> Option<&'a Value>,
    prefix: &str,
) -> Result<BundleDescriptor, LoaderError> {
    let required = |name: &str| -> Result<String, LoaderError> {
        optional_string(lookup(name), prefix, name)?.ok_or_else(|| LoaderError::MissingAttribute {
            attribute: format!("{prefix}{name}"),
        })
    };

    let group_id = required("groupId")?;
    let artifact_id = required("artifactId")?;
    let version = required("version")?;

    let mut bundle = BundleDescriptor::new(group_id, artifact_id, version);
    if let Some(bundle_type) = optional_string(lookup("type"), prefix, "type")? {
        bundle = bundle.with_type(bundle_type);
    }
    if let Some(classifier) = optional_string(lookup("classifier"), prefix, "classifier")? {
        bundle = bundle.with_classifier(classifier);
    }
    Ok(bundle)
}

/// A present, non-blank string attribute. `null` counts as absent.
fn optional_string(
    value: Option<&Value>,
    prefix: &str,
    name: &str,
) -> Result<Option<String>, LoaderError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => Err(LoaderError::InvalidAttribute {
            attribute: format!("{prefix}{name}"),
            reason: "must not be blank".into(),
        }),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(LoaderError::InvalidAttribute {
            attribute: format!("{prefix}{name}"),
            reason: "expected a string".into(),
        }),
    }
}

fn string_set(attributes: &Attributes, name: &str) -> Result<BTreeSet<String>, LoaderError> {
    let invalid = || LoaderError::InvalidAttribute {
        attribute: name.to_string(),
        reason: "expected an array of strings".into(),
    };

    match attributes.get(name) {
        None | Some(Value::Null) => Ok(BTreeSet::new()),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| item.as_str().map(str::to_string).ok_or_else(invalid))
            .collect(),
        Some(_) => Err(invalid()),
    }
}
