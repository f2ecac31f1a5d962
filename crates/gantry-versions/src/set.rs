//! Per-flavor version collection

use serde::{Deserialize, Serialize};

use crate::version::Version;

/// An ordered mapping from build flavor to [`Version`].
///
/// Order is insertion order, which for a set read from a version file is
/// the order flavors are declared in that file. Only flavors that actually
/// resolved to version data are present; a sparse set built by hand acts as
/// a patch set for the file adapters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionSet {
    entries: Vec<(String, Version)>,
}

impl VersionSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a flavor's version, preserving its position when
    /// already present
    pub fn insert(&mut self, flavor: impl Into<String>, version: Version) {
        let flavor = flavor.into();
        match self.entries.iter_mut().find(|(name, _)| *name == flavor) {
            Some((_, existing)) => *existing = version,
            None => self.entries.push((flavor, version)),
        }
    }

    /// Get a flavor's version
    pub fn get(&self, flavor: &str) -> Option<&Version> {
        self.entries
            .iter()
            .find(|(name, _)| name == flavor)
            .map(|(_, version)| version)
    }

    /// Whether the set contains a flavor
    pub fn contains(&self, flavor: &str) -> bool {
        self.get(flavor).is_some()
    }

    /// Flavor names in insertion order
    pub fn flavor_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Iterate over (flavor, version) pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Version)> {
        self.entries
            .iter()
            .map(|(name, version)| (name.as_str(), version))
    }

    /// Number of flavors in the set
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, Version)> for VersionSet {
    fn from_iter<I: IntoIterator<Item = (String, Version)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (flavor, version) in iter {
            set.insert(flavor, version);
        }
        set
    }
}
