//! Firmata Builder generates a ConfigurableFirmata sketch from a selection of features

use std::path::PathBuf;

use clap::Parser;

pub mod error;
pub use error::{BuilderError, Result};

pub mod feature;
pub use feature::{Capability, FeatureCatalog, FeatureDescriptor};

pub mod selection;
pub use selection::{Connection, UserSelection};

pub mod sketch;
pub use sketch::{generate, generate_at, DirectoryWriter, Sketch, SketchWriter};

/// Command line options for Firmata Builder
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub struct FirmataBuilderOptions {
    /// Log level (error, warn, info, debug or trace)
    #[arg(short, long)]
    pub verbosity: Option<String>,
    /// Directory of feature descriptions
    #[arg(short, long, default_value = "./features")]
    pub catalog: PathBuf,
    /// A toml file describing the selection to build
    #[arg(short, long)]
    pub selection: Option<PathBuf>,
    /// A feature to build in; may be repeated, and is appended to the selection file's features
    #[arg(short, long = "feature")]
    pub features: Vec<String>,
    /// The sketch name (without extension)
    #[arg(short = 'n', long)]
    pub filename: Option<String>,
    /// Serial baud rate
    #[arg(short, long)]
    pub baud: Option<u32>,
    /// Where to write the sketch
    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,
    /// Print the sketch instead of writing it
    #[arg(long)]
    pub stdout: bool,
    /// List the features in the catalog and exit
    #[arg(long)]
    pub list: bool,
}

impl FirmataBuilderOptions {

    /// The selection to build: the selection file if there is one, then the
    /// command line overrides on top of it.
    pub fn selection(&self) -> Result<UserSelection> {
        let mut selection = match &self.selection {
            Some(path) => UserSelection::load_from_toml(path)?,
            None => UserSelection::default(),
        };
        selection.selected_features.extend(self.features.iter().cloned());
        if let Some(filename) = &self.filename {
            selection.filename = filename.clone();
        }
        if let Some(baud) = self.baud {
            selection.set_baud(baud);
        }
        Ok(selection)
    }
}

/// A listing of the catalog, grouped by capability, then the untagged features.
pub fn describe_catalog(catalog: &FeatureCatalog) -> String {
    let mut listing = String::new();
    let describe = |feature: &FeatureDescriptor| {
        let mut line = format!("  {:<24} {} {}", feature.get_name(), feature.class_name(), feature.instance_name());
        if feature.is_reporting() {
            line.push_str(" [reporting]");
        }
        if feature.is_update() {
            line.push_str(" [update]");
        }
        line.push('\n');
        line
    };
    let groups = enum_iterator::all::<Capability>()
        .map(|c| (c.to_string(), Some(c)))
        .chain(std::iter::once((String::from("other"), None)));
    for (heading, capability) in groups {
        let features: Vec<&FeatureDescriptor> = catalog.iter()
            .filter(|f| f.capability() == capability)
            .collect();
        if features.is_empty() {
            continue;
        }
        listing.push_str(&format!("{}:\n", heading));
        for feature in features {
            listing.push_str(&describe(feature));
        }
    }
    listing
}

mod test;
