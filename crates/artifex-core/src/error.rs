// SPDX-FileCopyrightText: 2026 Artifex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for descriptor loading and plugin descriptor creation.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::{ArtifactType, LoaderKind};

/// Failure reported by a loader capability while interpreting its attributes
/// or the artifact contents.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// A required attribute was not declared.
    #[error("missing required attribute `{attribute}`")]
    MissingAttribute { attribute: String },

    /// An attribute was declared with an unusable value.
    #[error("invalid attribute `{attribute}`: {reason}")]
    InvalidAttribute { attribute: String, reason: String },

    /// Loader-specific validation failure.
    #[error("{0}")]
    Invalid(String),

    /// The loader could not read the artifact.
    #[error("I/O error while loading descriptor: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors produced while turning manifest bytes into a `PluginManifest`.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("malformed plugin manifest: {0}")]
    Json(#[from] serde_json::Error),

    #[error("plugin manifest is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    /// The document parsed but violates a manifest constraint.
    #[error("invalid plugin manifest: {0}")]
    Invalid(String),
}

/// Errors raised by the descriptor loader repository.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// No entry matches the (id, artifact type, capability) triple.
    #[error("no {kind} registered with id '{id}' for artifact type '{artifact_type}'")]
    LoaderNotFound {
        kind: LoaderKind,
        id: String,
        artifact_type: ArtifactType,
    },

    #[error("a {kind} with id '{id}' is already registered for artifact type '{artifact_type}'")]
    DuplicateLoader {
        kind: LoaderKind,
        id: String,
        artifact_type: ArtifactType,
    },

    #[error("{kind} id must not be blank or padded with whitespace")]
    InvalidLoaderId { kind: LoaderKind },
}

/// The error type returned by artifact descriptor factories.
///
/// Every variant is terminal: a factory call that produces one of these never
/// returns a partially populated descriptor.
#[derive(Debug, Error)]
pub enum DescriptorError {
    /// The location is neither a directory nor a recognized plugin archive.
    #[error("provided file is not a plugin: {}", .artifact.display())]
    InvalidArtifact { artifact: PathBuf },

    /// The manifest is absent at its fixed location inside the artifact.
    #[error(
        "the plugin descriptor '{expected_path}' on plugin file '{}' is not present",
        .artifact.display()
    )]
    DescriptorNotFound {
        expected_path: String,
        artifact: PathBuf,
    },

    /// The manifest references a loader id that is not registered.
    #[error(
        "the identifier '{id}' for a {kind} is not supported (error found while reading plugin '{}')",
        .artifact.display()
    )]
    LoaderNotFound {
        kind: LoaderKind,
        id: String,
        artifact: PathBuf,
    },

    /// A resolved loader rejected its attributes or the artifact contents.
    #[error("{kind} '{id}' failed to load descriptor: {source}")]
    InvalidLoaderConfiguration {
        kind: LoaderKind,
        id: String,
        source: LoaderError,
    },

    /// Reading the manifest bytes failed.
    #[error("I/O error reading plugin '{}': {source}", .artifact.display())]
    Io {
        artifact: PathBuf,
        source: std::io::Error,
    },

    /// The manifest could not be parsed.
    #[error(transparent)]
    Manifest(#[from] ManifestError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn descriptor_not_found_names_path_and_artifact() {
        let err = DescriptorError::DescriptorNotFound {
            expected_path: "META-INF/mule-artifact/mule-plugin.json".into(),
            artifact: PathBuf::from("/plugins/http-connector"),
        };
        assert_eq!(
            err.to_string(),
            "the plugin descriptor 'META-INF/mule-artifact/mule-plugin.json' on plugin file '/plugins/http-connector' is not present"
        );
    }

    #[test]
    fn loader_not_found_message_names_kind() {
        let err = DescriptorError::LoaderNotFound {
            kind: LoaderKind::ClassLoaderModel,
            id: "gradle".into(),
            artifact: PathBuf::from("/plugins/db"),
        };
        let msg = err.to_string();
        assert!(msg.contains("'gradle'"));
        assert!(msg.contains("class loader model loader"));
        assert!(msg.contains("/plugins/db"));
    }

    #[test]
    fn invalid_loader_configuration_keeps_source() {
        let err = DescriptorError::InvalidLoaderConfiguration {
            kind: LoaderKind::BundleDescriptor,
            id: "mule".into(),
            source: LoaderError::MissingAttribute {
                attribute: "groupId".into(),
            },
        };
        let source = err.source().expect("source should be preserved");
        assert_eq!(source.to_string(), "missing required attribute `groupId`");
    }

    #[test]
    fn manifest_error_is_transparent() {
        let err: DescriptorError = ManifestError::Invalid("name must not be empty".into()).into();
        assert_eq!(err.to_string(), "invalid plugin manifest: name must not be empty");
    }
}
