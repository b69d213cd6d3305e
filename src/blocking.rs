// Copyright (C) 2026 The ledctl project authors. Distributed under the 0BSD license.

//! The blocking API.
//!
//! Every call opens, reads and closes the attribute files it needs; nothing is cached between
//! calls.

use crate::{
    sysfs::{self, SysError, Value},
    Config, Error, LedDevice, Report, WriteMethod,
};
use itertools::Either;
use std::{fs, iter::once};
use tracing::debug;

/// Returns the LED devices found under the devices root, in directory listing order.
///
/// Each item reads both attributes of one device. The listing itself failing yields a single
/// error item.
pub fn led_devices(config: &Config) -> impl Iterator<Item = Result<LedDevice, Error>> + '_ {
    match sysfs::list_devices(config) {
        Ok(entries) => Either::Left(entries.map(move |entry| -> Result<LedDevice, Error> {
            let entry = entry.map_err(|source| SysError::ListingFailed {
                path: config.devices_root().to_path_buf(),
                source,
            })?;
            Ok(read_device(config, entry)?)
        })),
        Err(e) => Either::Right(once(Err(Error::from(e)))),
    }
}

/// Reads every LED device and returns the report.
///
/// The first device that cannot be read or parsed aborts the whole listing.
pub fn led_info(config: &Config) -> Result<Report, Error> {
    led_devices(config).collect()
}

/// Sets the brightness of `device` to `level` and returns a confirmation message.
///
/// `device` must be non-empty and `level` non-negative; surrounding whitespace is trimmed from
/// `device` afterwards. The level is checked against the device's `max_brightness` before
/// anything is written.
pub fn set_led_brightness(config: &Config, device: &str, level: i64) -> Result<String, Error> {
    let device = crate::validate_request(device, level)?;
    let dir = sysfs::device_dir(config, device);
    let max = sysfs::read_value(config, device, &dir, Value::Max)?;
    let value = crate::check_level(device, level, max)?;
    write_level(config, device, value)?;
    debug!(device, value, "brightness set");
    Ok(crate::confirmation(device, value))
}

fn read_device(config: &Config, entry: fs::DirEntry) -> Result<LedDevice, SysError> {
    let name = sysfs::trim(&entry.file_name().to_string_lossy()).to_owned();
    let dir = entry.path();
    let brightness = sysfs::read_value(config, &name, &dir, Value::Actual)?;
    let max_brightness = sysfs::read_value(config, &name, &dir, Value::Max)?;
    Ok(LedDevice {
        name,
        brightness,
        max_brightness,
    })
}

fn write_level(config: &Config, device: &str, value: u32) -> Result<(), Error> {
    match config.write_method() {
        WriteMethod::Sysfs => sysfs::set_value(config, device, value)?,
        #[cfg(all(feature = "logind", target_os = "linux"))]
        WriteMethod::Logind => crate::logind::set_brightness(config, device, value)?,
    }
    Ok(())
}
