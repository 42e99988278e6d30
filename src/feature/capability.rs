/// This module defines the capabilities a feature can provide to the generated sketch
use enum_iterator::Sequence;

use serde::{Serialize, Deserialize};
use std::fmt;

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash, Sequence)]
#[non_exhaustive]
/// Capabilities that gate code which can't be derived from the generic
/// reporting/update metadata alone (e.g. pin modes in the reset callback).
pub enum Capability {
    AnalogInput,
    AnalogOutput,
    DigitalInput,
    DigitalOutput,
    Servo,
    Scheduler,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Capability::AnalogInput => write!(f, "analog input"),
            Capability::AnalogOutput => write!(f, "analog output"),
            Capability::DigitalInput => write!(f, "digital input"),
            Capability::DigitalOutput => write!(f, "digital output"),
            Capability::Servo => write!(f, "servo"),
            Capability::Scheduler => write!(f, "scheduler"),
        }
    }
}

/// The set of capabilities enabled by a selection. Each flag starts out false.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capabilities {
    pub analog_input: bool,
    pub analog_output: bool,
    pub digital_input: bool,
    pub digital_output: bool,
    pub servo: bool,
    pub scheduler: bool,
}

impl Capabilities {

    pub fn enable(&mut self, capability: Capability) {
        *self.flag_mut(capability) = true;
    }

    pub fn has(&self, capability: Capability) -> bool {
        match capability {
            Capability::AnalogInput => self.analog_input,
            Capability::AnalogOutput => self.analog_output,
            Capability::DigitalInput => self.digital_input,
            Capability::DigitalOutput => self.digital_output,
            Capability::Servo => self.servo,
            Capability::Scheduler => self.scheduler,
        }
    }

    /// Analog writes are routed through a shared handler by both PWM output and servos.
    pub fn needs_analog_write(&self) -> bool {
        self.analog_output || self.servo
    }

    fn flag_mut(&mut self, capability: Capability) -> &mut bool {
        match capability {
            Capability::AnalogInput => &mut self.analog_input,
            Capability::AnalogOutput => &mut self.analog_output,
            Capability::DigitalInput => &mut self.digital_input,
            Capability::DigitalOutput => &mut self.digital_output,
            Capability::Servo => &mut self.servo,
            Capability::Scheduler => &mut self.scheduler,
        }
    }
}

impl fmt::Display for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let enabled: Vec<String> = enum_iterator::all::<Capability>()
            .filter(|c| self.has(*c))
            .map(|c| c.to_string())
            .collect();
        if enabled.is_empty() {
            write!(f, "none")
        } else {
            write!(f, "{}", enabled.join(", "))
        }
    }
}
