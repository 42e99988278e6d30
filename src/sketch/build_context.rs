//! Resolution of a user selection against the feature catalog.

use log::debug;

use std::collections::HashSet;

use crate::error::{BuilderError, Result};
use crate::feature::{Capability, Capabilities, FeatureCatalog, FeatureDescriptor};

/// Everything the code generator needs to know about one selection. A new
/// context is resolved for every generation run and never shared between runs.
#[derive(Clone, Debug)]
pub struct BuildContext {
    pub capabilities: Capabilities,
    /// The selected features, in selection order
    pub features: Vec<FeatureDescriptor>,
    /// The features with a `report()` method, in selection order
    pub reporting_features: Vec<FeatureDescriptor>,
    /// The features with an `update()` method, in selection order
    pub update_features: Vec<FeatureDescriptor>,
}

impl BuildContext {

    /// Look up every selected feature in the catalog and sort out which
    /// capabilities, reporting and update hooks the sketch needs.
    pub fn resolve(catalog: &FeatureCatalog, selected_features: &[String]) -> Result<Self> {
        let mut context = BuildContext {
            capabilities: Capabilities::default(),
            features: Vec::with_capacity(selected_features.len()),
            reporting_features: Vec::new(),
            update_features: Vec::new(),
        };
        let mut seen: HashSet<&str> = HashSet::new();

        for name in selected_features.iter() {
            let feature = catalog.get(name)
                .ok_or_else(|| BuilderError::UnknownFeature(name.clone()))?;
            // a repeated feature would declare and register its instance twice
            if !seen.insert(name.as_str()) {
                return Err(BuilderError::DuplicateFeature(name.clone()));
            }
            if let Some(capability) = feature.capability() {
                context.capabilities.enable(capability);
            }
            if feature.is_reporting() {
                context.reporting_features.push(feature.clone());
            }
            if feature.is_update() {
                context.update_features.push(feature.clone());
            }
            context.features.push(feature.clone());
        }

        debug!("enabled capabilities: {}", context.capabilities);
        debug!("reporting features: {:?}", names(&context.reporting_features));
        debug!("update features: {:?}", names(&context.update_features));
        Ok(context)
    }

    pub fn reporting_enabled(&self) -> bool {
        !self.reporting_features.is_empty()
    }

    pub fn update_enabled(&self) -> bool {
        !self.update_features.is_empty()
    }

    /// The instance name of the first selected feature providing `capability`.
    pub fn capability_instance(&self, capability: Capability) -> Option<&str> {
        if !self.capabilities.has(capability) {
            return None;
        }
        self.features.iter()
            .find(|f| f.capability() == Some(capability))
            .map(|f| f.instance_name())
    }
}

fn names(features: &[FeatureDescriptor]) -> Vec<&str> {
    features.iter().map(|f| f.get_name()).collect()
}
