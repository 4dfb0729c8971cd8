// SPDX-FileCopyrightText: 2026 Artifex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin manifest parsing from `mule-plugin.json` files.
//!
//! The manifest names the plugin and tells the descriptor factory which
//! registered loaders build its bundle descriptor and class loader model.
//! Keys the model does not know about are ignored so manifests can carry
//! extra metadata.

use artifex_core::{Attributes, LoaderDescriber, ManifestError};
use serde::{Deserialize, Deserializer, Serialize};

/// Path of the plugin manifest relative to the artifact root, always
/// `/`-separated.
pub const MULE_PLUGIN_JSON_PATH: &str = "META-INF/mule-artifact/mule-plugin.json";

/// Reference to a registered loader plus the configuration to pass it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoaderReference {
    pub id: String,
    /// Absent and `null` both mean no attributes.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub attributes: Attributes,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Attributes, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Attributes>::deserialize(deserializer)?.unwrap_or_default())
}

impl From<LoaderReference> for LoaderDescriber {
    fn from(reference: LoaderReference) -> Self {
        let mut describer = LoaderDescriber::new(reference.id);
        describer.add_attributes(&reference.attributes);
        describer
    }
}

/// Parsed plugin manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginManifest {
    pub name: String,
    pub bundle_descriptor_loader: LoaderReference,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_loader_model_loader_descriptor: Option<LoaderReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension_model_loader_descriptor: Option<LoaderReference>,
}

/// Parse a plugin manifest from JSON content.
///
/// Validates that the name is non-empty and that every declared loader
/// reference has a non-empty id.
pub fn parse_plugin_manifest(json_content: &str) -> Result<PluginManifest, ManifestError> {
    let manifest: PluginManifest = serde_json::from_str(json_content)?;

    if manifest.name.trim().is_empty() {
        return Err(ManifestError::Invalid("name must not be empty".to_string()));
    }

    let references = [
        ("bundleDescriptorLoader", Some(&manifest.bundle_descriptor_loader)),
        (
            "classLoaderModelLoaderDescriptor",
            manifest.class_loader_model_loader_descriptor.as_ref(),
        ),
        (
            "extensionModelLoaderDescriptor",
            manifest.extension_model_loader_descriptor.as_ref(),
        ),
    ];
    for (field, reference) in references {
        if let Some(reference) = reference {
            if reference.id.trim().is_empty() {
                return Err(ManifestError::Invalid(format!("{field}.id must not be empty")));
            }
        }
    }

    Ok(manifest)
}

/// Parse a plugin manifest from raw bytes as read out of an artifact.
pub fn parse_plugin_manifest_bytes(content: Vec<u8>) -> Result<PluginManifest, ManifestError> {
    let json = String::from_utf8(content)?;
    parse_plugin_manifest(&json)
}
