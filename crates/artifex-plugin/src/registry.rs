// SPDX-FileCopyrightText: 2026 Artifex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Descriptor loader repository.
//!
//! The `DescriptorLoaderRepository` stores loaders in one table per capability,
//! each keyed by loader id and artifact type. A lookup therefore only matches
//! when the id, the artifact type, and the requested capability all agree.
//! The repository is populated once at startup and only read afterwards, so it
//! can be shared behind an `Arc` without locking.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use artifex_core::{
    ArtifactType, BundleDescriptorLoader, ClassLoaderModelLoader, DescriptorLoader, LoaderKind,
    RegistryError,
};
use tracing::debug;

/// Loaders of a single capability, keyed by id then artifact type.
pub struct LoaderTable<L: ?Sized> {
    entries: BTreeMap<String, BTreeMap<ArtifactType, Arc<L>>>,
}

impl<L: ?Sized> LoaderTable<L> {
    fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    fn get(&self, id: &str, artifact_type: ArtifactType) -> Option<&Arc<L>> {
        self.entries.get(id).and_then(|by_type| by_type.get(&artifact_type))
    }

    fn contains(&self, id: &str, artifact_type: ArtifactType) -> bool {
        self.get(id, artifact_type).is_some()
    }

    fn len(&self) -> usize {
        self.entries.values().map(BTreeMap::len).sum()
    }

    fn keys(&self) -> impl Iterator<Item = (&str, ArtifactType)> {
        self.entries.iter().flat_map(|(id, by_type)| {
            by_type.keys().map(move |artifact_type| (id.as_str(), *artifact_type))
        })
    }
}

/// A loader capability that can be stored in and looked up from the repository.
///
/// Implemented for the capability trait objects themselves, so a lookup reads
/// `repository.get::<dyn BundleDescriptorLoader>(id, artifact_type)`.
pub trait LoaderCapability: DescriptorLoader {
    const KIND: LoaderKind;

    fn table(repository: &DescriptorLoaderRepository) -> &LoaderTable<Self>;

    fn table_mut(repository: &mut DescriptorLoaderRepository) -> &mut LoaderTable<Self>;
}

impl LoaderCapability for dyn BundleDescriptorLoader {
    const KIND: LoaderKind = LoaderKind::BundleDescriptor;

    fn table(repository: &DescriptorLoaderRepository) -> &LoaderTable<Self> {
        &repository.bundle_descriptor_loaders
    }

    fn table_mut(repository: &mut DescriptorLoaderRepository) -> &mut LoaderTable<Self> {
        &mut repository.bundle_descriptor_loaders
    }
}

impl LoaderCapability for dyn ClassLoaderModelLoader {
    const KIND: LoaderKind = LoaderKind::ClassLoaderModel;

    fn table(repository: &DescriptorLoaderRepository) -> &LoaderTable<Self> {
        &repository.class_loader_model_loaders
    }

    fn table_mut(repository: &mut DescriptorLoaderRepository) -> &mut LoaderTable<Self> {
        &mut repository.class_loader_model_loaders
    }
}

/// One (capability, id, artifact type) entry, as reported by
/// [`DescriptorLoaderRepository::entries`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct RegisteredLoader {
    pub kind: LoaderKind,
    pub id: String,
    pub artifact_type: ArtifactType,
}

/// Registry of descriptor loaders available to descriptor factories.
pub struct DescriptorLoaderRepository {
    bundle_descriptor_loaders: LoaderTable<dyn BundleDescriptorLoader>,
    class_loader_model_loaders: LoaderTable<dyn ClassLoaderModelLoader>,
}

impl DescriptorLoaderRepository {
    /// Create a new empty repository.
    pub fn new() -> Self {
        Self {
            bundle_descriptor_loaders: LoaderTable::new(),
            class_loader_model_loaders: LoaderTable::new(),
        }
    }

    /// Register `loader` for every artifact type it supports.
    ///
    /// Ids are stored exactly as reported, so a blank id or one with
    /// surrounding whitespace is rejected.
    ///
    /// Registration is all-or-nothing: if any supported type already has a
    /// loader of the same capability under the same id, nothing is inserted.
    pub fn register<C>(&mut self, loader: Arc<C>) -> Result<(), RegistryError>
    where
        C: LoaderCapability + ?Sized,
    {
        let id = loader.id().to_string();
        if id.trim().is_empty() || id.trim() != id {
            return Err(RegistryError::InvalidLoaderId { kind: C::KIND });
        }

        let supported: Vec<ArtifactType> = ArtifactType::ALL
            .into_iter()
            .filter(|artifact_type| loader.supports_artifact_type(*artifact_type))
            .collect();

        let table = C::table_mut(self);
        if let Some(artifact_type) = supported
            .iter()
            .copied()
            .find(|artifact_type| table.contains(&id, *artifact_type))
        {
            return Err(RegistryError::DuplicateLoader {
                kind: C::KIND,
                id,
                artifact_type,
            });
        }

        let kind = C::KIND;
        debug!(kind = %kind, id = %id, artifact_types = ?supported, "registered descriptor loader");
        let by_type = table.entries.entry(id).or_default();
        for artifact_type in supported {
            by_type.insert(artifact_type, Arc::clone(&loader));
        }
        Ok(())
    }

    /// Register a bundle descriptor loader.
    pub fn register_bundle_descriptor_loader(
        &mut self,
        loader: impl BundleDescriptorLoader,
    ) -> Result<(), RegistryError> {
        self.register::<dyn BundleDescriptorLoader>(Arc::new(loader))
    }

    /// Register a class loader model loader.
    pub fn register_class_loader_model_loader(
        &mut self,
        loader: impl ClassLoaderModelLoader,
    ) -> Result<(), RegistryError> {
        self.register::<dyn ClassLoaderModelLoader>(Arc::new(loader))
    }

    /// Look up the loader of capability `C` registered under `id` for `artifact_type`.
    pub fn get<C>(&self, id: &str, artifact_type: ArtifactType) -> Result<Arc<C>, RegistryError>
    where
        C: LoaderCapability + ?Sized,
    {
        C::table(self)
            .get(id, artifact_type)
            .cloned()
            .ok_or_else(|| RegistryError::LoaderNotFound {
                kind: C::KIND,
                id: id.to_string(),
                artifact_type,
            })
    }

    /// All registered entries, sorted by capability, id, then artifact type.
    pub fn entries(&self) -> Vec<RegisteredLoader> {
        let bundle = self
            .bundle_descriptor_loaders
            .keys()
            .map(|(id, artifact_type)| RegisteredLoader {
                kind: LoaderKind::BundleDescriptor,
                id: id.to_string(),
                artifact_type,
            });
        let class_loader = self
            .class_loader_model_loaders
            .keys()
            .map(|(id, artifact_type)| RegisteredLoader {
                kind: LoaderKind::ClassLoaderModel,
                id: id.to_string(),
                artifact_type,
            });
        let mut entries: Vec<RegisteredLoader> = bundle.chain(class_loader).collect();
        entries.sort();
        entries
    }

    /// Returns the number of (capability, id, artifact type) entries.
    pub fn len(&self) -> usize {
        self.bundle_descriptor_loaders.len() + self.class_loader_model_loaders.len()
    }

    /// Returns true if no loaders are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for DescriptorLoaderRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DescriptorLoaderRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DescriptorLoaderRepository")
            .field("entries", &self.entries())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use artifex_core::{Attributes, BundleDescriptor, ClassLoaderModel, LoaderError};
    use proptest::prelude::*;
    use std::path::Path;

    struct StaticBundleLoader {
        id: String,
        types: Vec<ArtifactType>,
    }

    impl DescriptorLoader for StaticBundleLoader {
        fn id(&self) -> &str {
            &self.id
        }

        fn supports_artifact_type(&self, artifact_type: ArtifactType) -> bool {
            self.types.contains(&artifact_type)
        }
    }

    impl BundleDescriptorLoader for StaticBundleLoader {
        fn load(&self, _: &Path, _: &Attributes) -> Result<BundleDescriptor, LoaderError> {
            Ok(BundleDescriptor::new("org.test", self.id.clone(), "1.0.0"))
        }
    }

    struct EmptyModelLoader;

    impl DescriptorLoader for EmptyModelLoader {
        fn id(&self) -> &str {
            "mule"
        }

        fn supports_artifact_type(&self, _: ArtifactType) -> bool {
            true
        }
    }

    impl ClassLoaderModelLoader for EmptyModelLoader {
        fn load(&self, _: &Path, _: &Attributes) -> Result<ClassLoaderModel, LoaderError> {
            Ok(ClassLoaderModel::default())
        }
    }

    fn bundle_loader(id: &str, types: &[ArtifactType]) -> StaticBundleLoader {
        StaticBundleLoader {
            id: id.to_string(),
            types: types.to_vec(),
        }
    }

    #[test]
    fn register_and_get_roundtrip() {
        let mut repository = DescriptorLoaderRepository::new();
        repository
            .register_bundle_descriptor_loader(bundle_loader("mule", &[ArtifactType::Plugin]))
            .unwrap();

        let loader = repository
            .get::<dyn BundleDescriptorLoader>("mule", ArtifactType::Plugin)
            .unwrap();
        assert_eq!(loader.id(), "mule");
        let bundle = loader.load(Path::new("/tmp"), &Attributes::new()).unwrap();
        assert_eq!(bundle.artifact_id, "mule");
    }

    #[test]
    fn lookup_is_scoped_by_artifact_type() {
        let mut repository = DescriptorLoaderRepository::new();
        repository
            .register_bundle_descriptor_loader(bundle_loader("mule", &[ArtifactType::App]))
            .unwrap();

        let err = repository
            .get::<dyn BundleDescriptorLoader>("mule", ArtifactType::Plugin)
            .err().unwrap();
        assert_eq!(
            err,
            RegistryError::LoaderNotFound {
                kind: LoaderKind::BundleDescriptor,
                id: "mule".into(),
                artifact_type: ArtifactType::Plugin,
            }
        );
    }

    #[test]
    fn lookup_is_scoped_by_capability() {
        let mut repository = DescriptorLoaderRepository::new();
        repository
            .register_bundle_descriptor_loader(bundle_loader("mule", &ArtifactType::ALL))
            .unwrap();

        let err = repository
            .get::<dyn ClassLoaderModelLoader>("mule", ArtifactType::Plugin)
            .err().unwrap();
        assert!(matches!(
            err,
            RegistryError::LoaderNotFound {
                kind: LoaderKind::ClassLoaderModel,
                ..
            }
        ));
    }

    #[test]
    fn same_id_may_serve_different_capabilities() {
        let mut repository = DescriptorLoaderRepository::new();
        repository
            .register_bundle_descriptor_loader(bundle_loader("mule", &[ArtifactType::Plugin]))
            .unwrap();
        repository
            .register_class_loader_model_loader(EmptyModelLoader)
            .unwrap();

        assert!(repository
            .get::<dyn BundleDescriptorLoader>("mule", ArtifactType::Plugin)
            .is_ok());
        assert!(repository
            .get::<dyn ClassLoaderModelLoader>("mule", ArtifactType::Plugin)
            .is_ok());
    }

    #[test]
    fn same_id_may_map_to_different_loaders_per_type() {
        let mut repository = DescriptorLoaderRepository::new();
        repository
            .register_bundle_descriptor_loader(StaticBundleLoader {
                id: "maven".into(),
                types: vec![ArtifactType::Plugin],
            })
            .unwrap();
        repository
            .register_bundle_descriptor_loader(StaticBundleLoader {
                id: "maven".into(),
                types: vec![ArtifactType::App],
            })
            .unwrap();
        assert_eq!(repository.len(), 2);
    }

    #[test]
    fn duplicate_registration_is_rejected_atomically() {
        let mut repository = DescriptorLoaderRepository::new();
        repository
            .register_bundle_descriptor_loader(bundle_loader("mule", &[ArtifactType::Plugin]))
            .unwrap();

        let err = repository
            .register_bundle_descriptor_loader(bundle_loader(
                "mule",
                &[ArtifactType::App, ArtifactType::Plugin],
            ))
            .unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateLoader { .. }));
        // The App entry must not have been inserted either.
        assert!(repository
            .get::<dyn BundleDescriptorLoader>("mule", ArtifactType::App)
            .is_err());
    }

    #[test]
    fn blank_id_is_rejected() {
        let mut repository = DescriptorLoaderRepository::new();
        let err = repository
            .register_bundle_descriptor_loader(bundle_loader("  ", &[ArtifactType::Plugin]))
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::InvalidLoaderId {
                kind: LoaderKind::BundleDescriptor
            }
        );
        assert!(repository.is_empty());
    }

    #[test]
    fn padded_id_is_rejected() {
        let mut repository = DescriptorLoaderRepository::new();
        let err = repository
            .register_bundle_descriptor_loader(bundle_loader("mule ", &[ArtifactType::Plugin]))
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::InvalidLoaderId {
                kind: LoaderKind::BundleDescriptor
            }
        );
        assert!(repository.is_empty());
    }

    #[test]
    fn entries_are_sorted() {
        let mut repository = DescriptorLoaderRepository::new();
        repository
            .register_class_loader_model_loader(EmptyModelLoader)
            .unwrap();
        repository
            .register_bundle_descriptor_loader(bundle_loader("zeta", &[ArtifactType::Plugin]))
            .unwrap();
        repository
            .register_bundle_descriptor_loader(bundle_loader("alpha", &[ArtifactType::Plugin]))
            .unwrap();

        let entries = repository.entries();
        assert_eq!(entries.len(), 2 + ArtifactType::ALL.len());
        assert_eq!(entries[0].id, "alpha");
        assert_eq!(entries[1].id, "zeta");
        assert!(entries[2..]
            .iter()
            .all(|e| e.kind == LoaderKind::ClassLoaderModel));
    }

    #[test]
    fn repository_is_send_and_sync() {
        fn _assert<T: Send + Sync>() {}
        _assert::<DescriptorLoaderRepository>();
    }

    fn artifact_type_strategy() -> impl Strategy<Value = ArtifactType> {
        prop::sample::select(ArtifactType::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn lookup_matches_only_the_registered_triple(
            id in "[a-z][a-z0-9-]{0,12}",
            registered in artifact_type_strategy(),
            queried in artifact_type_strategy(),
        ) {
            let mut repository = DescriptorLoaderRepository::new();
            repository
                .register_bundle_descriptor_loader(bundle_loader(&id, &[registered]))
                .unwrap();

            let found = repository.get::<dyn BundleDescriptorLoader>(&id, queried).is_ok();
            prop_assert_eq!(found, registered == queried);
            prop_assert!(repository.get::<dyn ClassLoaderModelLoader>(&id, queried).is_err());
            let other_id = format!("{id}-other");
            prop_assert!(repository
                .get::<dyn BundleDescriptorLoader>(&other_id, registered)
                .is_err());
        }
    }
}
