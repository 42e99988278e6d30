//! This module provides the Firmata features that can be built into a sketch

use log::{debug, info};

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::fs;
use std::fmt;
use std::cmp;
use std::hash::{Hash, Hasher};

use serde::{Serialize, Deserialize};

use crate::error::{BuilderError, Result};

pub mod capability;
pub use capability::{Capability, Capabilities};

mod test;

/// A library that must be included before the feature that depends on it
/// (e.g. `Servo.h` for the servo feature).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SystemDependency {
    /// The include prefix, e.g. "" or "utility/"
    #[serde(default)]
    pub path: String,
    pub class_name: String,
}

impl SystemDependency {

    pub fn new(path: &str, class_name: &str) -> Self {
        Self {
            path: path.to_string(),
            class_name: class_name.to_string(),
        }
    }

    pub fn include_line(&self) -> String {
        format!("#include <{}{}.h>", self.path, self.class_name)
    }
}

/// The feature struct describes one Firmata feature and the code needed to use it
#[derive(Serialize, Deserialize, Clone)]
pub struct FeatureDescriptor {
    /// The unique name of the feature, e.g. "ServoFirmata"
    name: String,
    /// The include prefix of the feature's header
    #[serde(default)]
    include_path: String,
    class_name: String,
    instance_name: String,
    /// Whether the feature has a `report()` method to call when the reporting timer elapses
    #[serde(default)]
    reporting: bool,
    /// Whether the feature has an `update()` method to call on every pass of the loop
    #[serde(default)]
    update: bool,
    /// A capability that gates extra code in the sketch
    #[serde(default)]
    capability: Option<Capability>,
    /// Libraries that must be included before this feature
    #[serde(default)]
    system_dependencies: Vec<SystemDependency>,
}

impl fmt::Debug for FeatureDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Feature {} ({} {})", self.name, self.class_name, self.instance_name)?;
        if let Some(capability) = self.capability {
            write!(f, " [{}]", capability)?;
        }
        if self.reporting {
            write!(f, " reporting")?;
        }
        if self.update {
            write!(f, " update")?;
        }
        Ok(())
    }
}

/// Features are uniquely identified by their name, and thus comparable.
impl cmp::PartialEq for FeatureDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}
impl cmp::Eq for FeatureDescriptor {}

/// Features are uniquely identified by their name, and thus hashable.
impl Hash for FeatureDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl FeatureDescriptor {

    pub fn new(name: &str, include_path: &str, class_name: &str, instance_name: &str) -> Self {
        Self {
            name: name.to_string(),
            include_path: include_path.to_string(),
            class_name: class_name.to_string(),
            instance_name: instance_name.to_string(),
            reporting: false,
            update: false,
            capability: None,
            system_dependencies: Vec::new(),
        }
    }

    pub fn with_reporting(mut self) -> Self {
        self.reporting = true;
        self
    }

    pub fn with_update(mut self) -> Self {
        self.update = true;
        self
    }

    pub fn with_capability(mut self, capability: Capability) -> Self {
        self.capability = Some(capability);
        self
    }

    pub fn with_dependency(mut self, dependency: SystemDependency) -> Self {
        self.system_dependencies.push(dependency);
        self
    }

    /// Loads a feature from its toml description
    fn load_from_toml(path: &Path) -> Result<Self> {
        let toml_str = fs::read_to_string(path).map_err(|source| BuilderError::CatalogIo {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&toml_str).map_err(|source| BuilderError::CatalogParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn get_name(&self) -> &str {
        self.name.as_str()
    }

    pub fn class_name(&self) -> &str {
        self.class_name.as_str()
    }

    pub fn instance_name(&self) -> &str {
        self.instance_name.as_str()
    }

    pub fn is_reporting(&self) -> bool {
        self.reporting
    }

    pub fn is_update(&self) -> bool {
        self.update
    }

    pub fn capability(&self) -> Option<Capability> {
        self.capability
    }

    pub fn system_dependencies(&self) -> &[SystemDependency] {
        &self.system_dependencies
    }

    pub fn include_line(&self) -> String {
        format!("#include <{}{}.h>", self.include_path, self.class_name)
    }

    pub fn instance_declaration(&self) -> String {
        format!("{} {};", self.class_name, self.instance_name)
    }
}

/// The catalog of every feature that can be selected, keyed by feature name.
#[derive(Default, Clone, Debug)]
pub struct FeatureCatalog {
    features: BTreeMap<String, FeatureDescriptor>,
}

impl FeatureCatalog {

    /// Gather the features described by the toml files in `dir`. Files are read in
    /// name order, so the same directory always yields the same catalog.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let io_error = |source: std::io::Error| BuilderError::CatalogIo {
            path: dir.to_path_buf(),
            source,
        };
        let mut files: Vec<PathBuf> = Vec::new();
        for entry in fs::read_dir(dir).map_err(io_error)? {
            let path = entry.map_err(io_error)?.path();
            if path.is_file() && path.extension().unwrap_or_default() == "toml" {
                files.push(path);
            }
        }
        files.sort();

        let mut catalog = FeatureCatalog::default();
        for file in files.iter() {
            let feature = FeatureDescriptor::load_from_toml(file)?;
            debug!("loaded {:?} from {}", feature, file.display());
            if catalog.features.contains_key(feature.get_name()) {
                return Err(BuilderError::DuplicateCatalogEntry {
                    name: feature.name,
                    path: file.clone(),
                });
            }
            catalog.insert(feature);
        }
        info!("loaded {} features from {}", catalog.len(), dir.display());
        Ok(catalog)
    }

    /// Add a feature, replacing any feature with the same name.
    pub fn insert(&mut self, feature: FeatureDescriptor) {
        self.features.insert(feature.name.clone(), feature);
    }

    pub fn get(&self, name: &str) -> Option<&FeatureDescriptor> {
        self.features.get(name)
    }

    /// The feature names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.features.keys().map(|k| k.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FeatureDescriptor> {
        self.features.values()
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl FromIterator<FeatureDescriptor> for FeatureCatalog {
    fn from_iter<I: IntoIterator<Item = FeatureDescriptor>>(iter: I) -> Self {
        let mut catalog = FeatureCatalog::default();
        for feature in iter {
            catalog.insert(feature);
        }
        catalog
    }
}
