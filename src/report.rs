// Copyright (C) 2026 The ledctl project authors. Distributed under the 0BSD license.

use crate::LedDevice;
use itertools::Itertools;
use std::fmt;

const HEADER: &str = "\n----------------------------------\n\
                      LED Brightness Info Tool for Linux\n\
                      ----------------------------------\n\n\
                      Device Name\t\t\tBrightness\tMaximum Brightness\n\n";

/// LED devices in directory listing order, printable as a human-readable table
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Report {
    devices: Vec<LedDevice>,
}

impl Report {
    /// Returns the devices covered by this report
    pub fn devices(&self) -> &[LedDevice] {
        &self.devices
    }

    /// Consumes the report and returns its devices
    pub fn into_devices(self) -> Vec<LedDevice> {
        self.devices
    }
}

impl From<Vec<LedDevice>> for Report {
    fn from(devices: Vec<LedDevice>) -> Self {
        Report { devices }
    }
}

impl FromIterator<LedDevice> for Report {
    fn from_iter<I: IntoIterator<Item = LedDevice>>(iter: I) -> Self {
        Report {
            devices: iter.into_iter().collect(),
        }
    }
}

struct Row<'a>(&'a LedDevice);

impl fmt::Display for Row<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} \t\t{}\t\t{}",
            self.0.name, self.0.brightness, self.0.max_brightness
        )
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(HEADER)?;
        write!(f, "{}", self.devices.iter().map(Row).format(""))?;
        f.write_str("\n")
    }
}
