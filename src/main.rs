use log::{info, error};
use clap::Parser;
use std::process::ExitCode;
use std::str::FromStr;

use firmata_builder::{FirmataBuilderOptions, FeatureCatalog, DirectoryWriter};

fn run(options: &FirmataBuilderOptions) -> firmata_builder::Result<()> {
    let catalog = FeatureCatalog::load_from_dir(&options.catalog)?;
    if options.list {
        print!("{}", firmata_builder::describe_catalog(&catalog));
        return Ok(());
    }

    let selection = options.selection()?;
    let sketch = firmata_builder::generate(&catalog, &selection)?;
    if options.stdout {
        print!("{}", sketch.contents);
    } else {
        sketch.save(&DirectoryWriter::new(&options.out_dir))?;
    }
    Ok(())
}

fn main() -> ExitCode {

    let options = FirmataBuilderOptions::parse();

    // Setup the subscriber with a logging level.
    let debug_level: tracing::Level = if let Some(verbosity) = options.verbosity.clone() {
        tracing::Level::from_str(&verbosity).unwrap_or_else(|_| {
            eprintln!("Unknown debug level, using INFO instead.");
            tracing::Level::INFO
        })
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(debug_level)
        .with_writer(std::io::stderr)
        .init();

    info!("Running Firmata Builder with options:\n{:?}", options);

    match run(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
