// SPDX-FileCopyrightText: 2026 Artifex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared by loaders, the loader repository, and descriptor factories.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Loader configuration as declared in a manifest: attribute name to JSON value.
pub type Attributes = BTreeMap<String, serde_json::Value>;

/// Kind of deployable artifact a loader can be scoped to.
#[derive(
    Debug,
    Clone,
    Copy,
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
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ArtifactType {
    App,
    Domain,
    Plugin,
    Policy,
    Service,
}

impl ArtifactType {
    pub const ALL: [ArtifactType; 5] = [
        ArtifactType::App,
        ArtifactType::Domain,
        ArtifactType::Plugin,
        ArtifactType::Policy,
        ArtifactType::Service,
    ];
}

/// The capability a registered loader provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
pub enum LoaderKind {
    #[strum(serialize = "bundle descriptor loader")]
    BundleDescriptor,
    #[strum(serialize = "class loader model loader")]
    ClassLoaderModel,
}

/// A loader reference carried through to the descriptor without being resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoaderDescriber {
    pub id: String,
    #[serde(default)]
    pub attributes: Attributes,
}

impl LoaderDescriber {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: Attributes::new(),
        }
    }

    /// Merge `attributes` into this describer, replacing existing keys.
    pub fn add_attributes(&mut self, attributes: &Attributes) {
        self.attributes
            .extend(attributes.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
}
