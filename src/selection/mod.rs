//! This module describes what the user asked to be built.

use log::info;

use std::fs;
use std::path::Path;

use serde::{Serialize, Deserialize};

use crate::error::{BuilderError, Result};

mod test;

pub const DEFAULT_FILENAME: &'static str = "ConfiguredFirmata";
pub const DEFAULT_BAUD: u32 = 57600;

/// How the generated sketch talks to the host
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Connection {
    Serial { baud: u32 },
}

impl Default for Connection {
    fn default() -> Self {
        Connection::Serial { baud: DEFAULT_BAUD }
    }
}

/// A UserSelection is the input to one generation run: the sketch name, the
/// connection, and the features in the order they should appear in the sketch.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct UserSelection {
    /// The sketch name, without extension
    pub filename: String,
    pub connection: Connection,
    pub selected_features: Vec<String>,
}

impl Default for UserSelection {
    fn default() -> Self {
        Self {
            filename: DEFAULT_FILENAME.to_string(),
            connection: Connection::default(),
            selected_features: Vec::new(),
        }
    }
}

impl UserSelection {

    pub fn new(filename: &str, connection: Connection, selected_features: &[&str]) -> Self {
        Self {
            filename: filename.to_string(),
            connection: connection,
            selected_features: selected_features.iter().map(|f| f.to_string()).collect(),
        }
    }

    /// Loads a selection from its toml description
    pub fn load_from_toml(path: &Path) -> Result<Self> {
        let toml_str = fs::read_to_string(path).map_err(|source| BuilderError::SelectionIo {
            path: path.to_path_buf(),
            source,
        })?;
        let selection: UserSelection = toml::from_str(&toml_str).map_err(|source| BuilderError::SelectionParse {
            path: path.to_path_buf(),
            source,
        })?;
        info!("loaded selection <{}> with {} features from {}",
              selection.filename, selection.selected_features.len(), path.display());
        Ok(selection)
    }

    pub fn set_baud(&mut self, baud: u32) {
        match &mut self.connection {
            Connection::Serial { baud: b } => *b = baud,
        }
    }
}
