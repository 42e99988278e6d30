//! This module turns a feature selection into an Arduino sketch.

use log::info;

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, FixedOffset, Local};

use crate::error::{BuilderError, Result};
use crate::feature::FeatureCatalog;
use crate::selection::UserSelection;

pub mod build_context;
pub use build_context::BuildContext;

pub mod code_generation;


/// Extension of the generated file, as expected by the Arduino toolchain
pub const SKETCH_EXTENSION: &'static str = "ino";

/// A generated sketch, ready to be written out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sketch {
    /// The sketch name, without extension
    pub filename: String,
    pub contents: String,
}

impl Sketch {

    pub fn file_name(&self) -> String {
        format!("{}.{}", self.filename, SKETCH_EXTENSION)
    }

    /// Hand the sketch to a writer.
    pub fn save<W: SketchWriter + ?Sized>(&self, writer: &W) -> Result<()> {
        writer.write(&self.file_name(), &self.contents)
    }
}

/// Generate a sketch, stamped with the current local time.
pub fn generate(catalog: &FeatureCatalog, selection: &UserSelection) -> Result<Sketch> {
    let now: DateTime<FixedOffset> = Local::now().into();
    generate_at(catalog, selection, &now)
}

/// Generate a sketch stamped with `timestamp`. Nothing is generated unless every
/// selected feature resolves.
pub fn generate_at(
    catalog: &FeatureCatalog,
    selection: &UserSelection,
    timestamp: &DateTime<FixedOffset>,
) -> Result<Sketch> {
    info!("generating sketch <{}> from {} features", selection.filename, selection.selected_features.len());
    let context = BuildContext::resolve(catalog, &selection.selected_features)?;

    let mut contents = String::new();
    contents.push_str(&code_generation::emit_header(&selection.filename, timestamp));
    contents.push_str(&code_generation::emit_includes_and_instances(&context));
    contents.push_str(&code_generation::emit_post_dependencies(&context));
    contents.push_str(&code_generation::emit_reset_callback(&context));
    contents.push_str(&code_generation::emit_setup(&context, &selection.connection));
    contents.push_str(&code_generation::emit_loop(&context));

    info!("generated sketch <{}> ({} bytes)", selection.filename, contents.len());
    Ok(Sketch {
        filename: selection.filename.clone(),
        contents,
    })
}

/// Somewhere a generated sketch can be stored.
pub trait SketchWriter {
    fn write(&self, name: &str, contents: &str) -> Result<()>;
}

/// Writes sketches as files in a directory.
#[derive(Clone, Debug)]
pub struct DirectoryWriter {
    dir: PathBuf,
}

impl DirectoryWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl SketchWriter for DirectoryWriter {
    fn write(&self, name: &str, contents: &str) -> Result<()> {
        let path = self.dir.join(name);
        info!("saving sketch to {}", path.display());
        fs::write(&path, contents).map_err(|source| BuilderError::Persistence { path, source })
    }
}
