//! Generation of the sketch text, one fragment at a time.
//!
//! Every function here is pure: the same context always produces the same
//! fragment. Each fragment ends with the blank line that separates it from
//! the next one.

use std::collections::HashSet;

use chrono::{DateTime, FixedOffset};

use crate::feature::Capability;
use crate::selection::Connection;
use super::build_context::BuildContext;

/// Shape of the banner timestamp, e.g. `Sun Oct 18 2026 10:04:12 GMT+0200`
pub const TIMESTAMP_FORMAT: &'static str = "%a %b %d %Y %H:%M:%S GMT%z";

/// The banner comment and the core Firmata include.
pub fn emit_header(filename: &str, timestamp: &DateTime<FixedOffset>) -> String {
    let mut header = String::new();
    header.push_str(&format!("/*\n * {}.ino generated by FirmataBuilder\n", filename));
    header.push_str(&format!(" * {}\n */\n\n", timestamp.format(TIMESTAMP_FORMAT)));
    header.push_str("#include <Firmata.h>\n\n");
    header
}

/// Includes and global instances of the selected features, in selection order.
/// A system dependency is included once, just before the first feature that needs it.
pub fn emit_includes_and_instances(context: &BuildContext) -> String {
    let mut includes = String::new();
    let mut included_dependencies: HashSet<&str> = HashSet::new();

    for feature in context.features.iter() {
        for dependency in feature.system_dependencies() {
            if included_dependencies.insert(dependency.class_name.as_str()) {
                includes.push_str(&dependency.include_line());
                includes.push('\n');
            }
        }
        includes.push_str(&feature.include_line());
        includes.push('\n');
        includes.push_str(&feature.instance_declaration());
        includes.push_str("\n\n");
    }

    // every feature registers itself with FirmataExt, so it's always there
    includes.push_str("#include <utility/FirmataExt.h>\n");
    includes.push_str("FirmataExt firmataExt;\n\n");
    includes
}

/// Utilities that several features rely on, included after the features themselves.
pub fn emit_post_dependencies(context: &BuildContext) -> String {
    let mut includes = String::new();
    if context.capabilities.needs_analog_write() {
        includes.push_str("#include <utility/AnalogWrite.h>\n\n");
    }
    if context.reporting_enabled() {
        includes.push_str("#include <utility/FirmataReporting.h>\n");
        includes.push_str("FirmataReporting reporting;\n\n");
    }
    includes
}

/// The SYSTEM_RESET handler, which puts every pin back in its default mode.
pub fn emit_reset_callback(context: &BuildContext) -> String {
    let mut f = String::from("void systemResetCallback()\n{\n");
    f.push_str("  for (byte i = 0; i < TOTAL_PINS; i++) {\n");
    f.push_str("    if (IS_PIN_ANALOG(i)) {\n");
    if context.capabilities.analog_input {
        f.push_str("      Firmata.setPinMode(i, ANALOG);\n");
    }
    f.push_str("    } else if (IS_PIN_DIGITAL(i)) {\n");
    if context.capabilities.digital_output {
        f.push_str("      Firmata.setPinMode(i, OUTPUT);\n");
    }
    f.push_str("    }\n");
    f.push_str("  }\n");
    f.push_str("  firmataExt.reset();\n");
    f.push_str("}\n\n");
    f
}

pub fn emit_setup(context: &BuildContext, connection: &Connection) -> String {
    let mut f = String::from("void setup()\n{\n");
    f.push_str("  Firmata.setFirmwareVersion(FIRMATA_MAJOR_VERSION, FIRMATA_MINOR_VERSION);\n\n");

    if context.capabilities.needs_analog_write() {
        f.push_str("  Firmata.attach(ANALOG_MESSAGE, analogWriteCallback);\n\n");
    }

    for feature in context.features.iter() {
        f.push_str(&format!("  firmataExt.addFeature({});\n", feature.instance_name()));
    }
    if context.reporting_enabled() {
        f.push_str("  firmataExt.addFeature(reporting);\n\n");
    }

    f.push_str("  Firmata.attach(SYSTEM_RESET, systemResetCallback);\n\n");

    match connection {
        Connection::Serial { baud } => f.push_str(&format!("  Firmata.begin({});\n\n", baud)),
    }

    // establish the initial pin state before the first pass of the loop
    f.push_str("  systemResetCallback();\n");
    f.push_str("}\n\n");
    f
}

/// The phases of one drain pass over the incoming Firmata messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrainPhase<'a> {
    /// Processing input while it's available. With a scheduler, the pass leaves
    /// the loop as soon as a message boundary is reached.
    Draining { scheduler: Option<&'a str> },
    /// Between messages: the only place scheduled tasks may run.
    AtBoundary { scheduler: &'a str },
}

impl<'a> DrainPhase<'a> {

    /// The phases a context's loop goes through, in order.
    pub fn for_context(context: &'a BuildContext) -> Vec<DrainPhase<'a>> {
        match context.capability_instance(Capability::Scheduler) {
            Some(scheduler) => vec![
                DrainPhase::Draining { scheduler: Some(scheduler) },
                DrainPhase::AtBoundary { scheduler },
            ],
            None => vec![DrainPhase::Draining { scheduler: None }],
        }
    }

    pub fn emit(&self) -> String {
        let mut f = String::new();
        match self {
            DrainPhase::Draining { scheduler } => {
                f.push_str("  while(Firmata.available()) {\n");
                f.push_str("    Firmata.processInput();\n");
                if scheduler.is_some() {
                    f.push_str("    if (!Firmata.isParsingMessage()) {\n");
                    f.push_str("      break;\n");
                    f.push_str("    }\n");
                }
                f.push_str("  }\n");
            },
            DrainPhase::AtBoundary { scheduler } => {
                f.push_str("  if (!Firmata.isParsingMessage()) {\n");
                f.push_str(&format!("    {}.runTasks();\n", scheduler));
                f.push_str("  }\n");
            },
        }
        f
    }
}

/// The main loop: digital input, the drain pass, timed reporting, then updates.
pub fn emit_loop(context: &BuildContext) -> String {
    let mut f = String::from("void loop()\n{\n");

    // digital input is reported every pass, ahead of the incoming messages
    if let Some(digital_input) = context.capability_instance(Capability::DigitalInput) {
        f.push_str(&format!("  {}.report();\n\n", digital_input));
    }

    for phase in DrainPhase::for_context(context) {
        f.push_str(&phase.emit());
    }
    f.push('\n');

    if context.reporting_enabled() {
        f.push_str("  if (reporting.elapsed()) {\n");
        for feature in context.reporting_features.iter() {
            f.push_str(&format!("    {}.report();\n", feature.instance_name()));
        }
        f.push_str("  }\n\n");
    }

    for feature in context.update_features.iter() {
        f.push_str(&format!("  {}.update();\n", feature.instance_name()));
    }

    f.push_str("}\n");
    f
}
