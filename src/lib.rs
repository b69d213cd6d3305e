// Copyright (C) 2026 The ledctl project authors. Distributed under the 0BSD license.

//! # Overview
//!
//! This crate inspects and sets the brightness of Linux LED class devices, as exposed under
//! `/sys/class/leds`.
//!
//! Every subdirectory of the devices root is an LED device. Each device exposes a `brightness`
//! attribute file holding the current level and a `max_brightness` file holding the ceiling set
//! by the driver. Both hold decimal ASCII, optionally surrounded by whitespace.
//!
//! # Example
//!
//! ```no_run
//! use ledctl::{blocking, Config};
//!
//! fn show_leds() -> Result<(), ledctl::Error> {
//!     let config = Config::default();
//!     print!("{}", blocking::led_info(&config)?);
//!     println!("{}", blocking::set_led_brightness(&config, "input2::scrolllock", 1)?);
//!     Ok(())
//! }
//! ```
//!
//! # Enumeration policy
//!
//! Listing is all-or-nothing: if any device's attributes cannot be read or parsed, no report is
//! produced and the originating error is returned.
//!
//! # Writing
//!
//! By default the new level is written directly to the `brightness` file, which requires
//! permission (`udev` rules can help with that). With the `logind` feature,
//! `WriteMethod::Logind` asks systemd-logind to perform the write instead and falls back to the
//! direct write if the method is not available.

#![deny(warnings)]
#![deny(missing_docs)]

use std::{
    error::Error as StdError,
    path::{Path, PathBuf},
};
use thiserror::Error;

pub mod blocking;
mod report;
mod sysfs;

cfg_if::cfg_if! {
    if #[cfg(all(feature = "logind", target_os = "linux"))] {
        mod logind;
    }
}

#[cfg(feature = "async")]
#[path = "linux.rs"]
mod platform;

#[cfg(feature = "async")]
pub use platform::{led_devices, led_info, set_led_brightness};

pub use report::Report;

/// Default directory whose subdirectories are LED class devices
pub const DEFAULT_DEVICES_ROOT: &str = "/sys/class/leds";

/// Default name of the current brightness attribute file
pub const DEFAULT_BRIGHTNESS_FILE: &str = "brightness";

/// Default name of the maximum brightness attribute file
pub const DEFAULT_MAX_BRIGHTNESS_FILE: &str = "max_brightness";

/// Snapshot of an LED device's brightness attributes
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LedDevice {
    /// Device name, trimmed of surrounding whitespace
    pub name: String,
    /// Current brightness
    pub brightness: u32,
    /// Ceiling defined by the device driver
    pub max_brightness: u32,
}

/// How a new brightness level reaches the device
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum WriteMethod {
    /// Write the level to the device's brightness file
    Sysfs,
    /// Call systemd-logind's `SetBrightness` method over D-Bus
    #[cfg(all(feature = "logind", target_os = "linux"))]
    Logind,
}

impl Default for WriteMethod {
    fn default() -> Self {
        WriteMethod::Sysfs
    }
}

/// Location of the LED devices and their attribute files
#[derive(Clone, Debug)]
pub struct Config {
    devices_root: PathBuf,
    brightness_file: String,
    max_brightness_file: String,
    write_method: WriteMethod,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            devices_root: PathBuf::from(DEFAULT_DEVICES_ROOT),
            brightness_file: DEFAULT_BRIGHTNESS_FILE.into(),
            max_brightness_file: DEFAULT_MAX_BRIGHTNESS_FILE.into(),
            write_method: WriteMethod::default(),
        }
    }
}

impl Config {
    /// Replaces the devices root directory
    pub fn with_devices_root<P: Into<PathBuf>>(mut self, root: P) -> Self {
        self.devices_root = root.into();
        self
    }

    /// Replaces the name of the current brightness attribute file
    pub fn with_brightness_file<S: Into<String>>(mut self, name: S) -> Self {
        self.brightness_file = name.into();
        self
    }

    /// Replaces the name of the maximum brightness attribute file
    pub fn with_max_brightness_file<S: Into<String>>(mut self, name: S) -> Self {
        self.max_brightness_file = name.into();
        self
    }

    /// Selects how new brightness levels are written
    pub fn with_write_method(mut self, method: WriteMethod) -> Self {
        self.write_method = method;
        self
    }

    /// Returns the devices root directory
    pub fn devices_root(&self) -> &Path {
        &self.devices_root
    }

    /// Returns the name of the current brightness attribute file
    pub fn brightness_file(&self) -> &str {
        &self.brightness_file
    }

    /// Returns the name of the maximum brightness attribute file
    pub fn max_brightness_file(&self) -> &str {
        &self.max_brightness_file
    }

    /// Returns how new brightness levels are written
    pub fn write_method(&self) -> WriteMethod {
        self.write_method
    }
}

/// Errors used in this API
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Getting the list of LED devices failed
    #[error("Failed to list LED devices")]
    ListingDevicesFailed(#[source] Box<dyn StdError + Send + Sync>),

    /// Reading or parsing a device attribute failed
    #[error("Failed to get LED device {device} information")]
    GettingDeviceInfoFailed {
        /// Device name
        device: String,
        /// Cause
        source: Box<dyn StdError + Send + Sync>,
    },

    /// Writing the new brightness failed
    #[error("Setting brightness failed for LED device {device}")]
    SettingBrightnessFailed {
        /// Device name
        device: String,
        /// Cause
        source: Box<dyn StdError + Send + Sync>,
    },

    /// The device name is empty or the level is negative
    #[error("Cannot set brightness: invalid input (device: {device:?}, level: {level})")]
    InvalidInput {
        /// Device name as given
        device: String,
        /// Requested level
        level: i64,
    },

    /// The requested level is above the device's maximum brightness
    #[error(
        "Requested brightness of ({level}) is beyond the maximum possible of the device ({max})"
    )]
    LevelExceedsMaximum {
        /// Device name
        device: String,
        /// Requested level
        level: i64,
        /// Maximum brightness of the device
        max: u32,
    },
}

/// Checks the caller's request before any filesystem access and returns the trimmed device name.
pub(crate) fn validate_request(device: &str, level: i64) -> Result<&str, Error> {
    if device.is_empty() || level < 0 {
        return Err(Error::InvalidInput {
            device: device.into(),
            level,
        });
    }
    Ok(sysfs::trim(device))
}

/// Bounds `level` by the device maximum.
pub(crate) fn check_level(device: &str, level: i64, max: u32) -> Result<u32, Error> {
    match u32::try_from(level) {
        Ok(value) if value <= max => Ok(value),
        _ => Err(Error::LevelExceedsMaximum {
            device: device.into(),
            level,
            max,
        }),
    }
}

pub(crate) fn confirmation(device: &str, level: u32) -> String {
    format!(
        "The device [{}] is now set to a brightness level of [{}]",
        device, level
    )
}
