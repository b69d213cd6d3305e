// Copyright (C) 2026 The ledctl project authors. Distributed under the 0BSD license.

//! Asynchronous implementation on top of `tokio::fs`.

use crate::{
    sysfs::{self, SysError, Value},
    Config, Error, LedDevice, Report, WriteMethod,
};
use futures::{stream, Stream, TryStreamExt};
use std::path::Path;
use tokio::fs;
use tokio_stream::wrappers::ReadDirStream;
use tracing::debug;

/// Returns the LED devices found under the devices root, in directory listing order.
///
/// The listing itself failing yields a single error item.
pub fn led_devices(config: &Config) -> impl Stream<Item = Result<LedDevice, Error>> {
    let config = config.clone();
    let root = config.devices_root().to_path_buf();
    let entries_root = root.clone();
    stream::once(async move {
        debug!(root = %root.display(), "listing LED devices");
        fs::read_dir(&root)
            .await
            .map_err(|source| SysError::ListingFailed {
                path: root.clone(),
                source,
            })
    })
    .map_ok(move |entries| {
        let root = entries_root.clone();
        ReadDirStream::new(entries).map_err(move |source| SysError::ListingFailed {
            path: root.clone(),
            source,
        })
    })
    .try_flatten()
    .and_then(move |entry| {
        let config = config.clone();
        async move { read_device(&config, entry).await }
    })
    .map_err(Error::from)
}

/// Reads every LED device and returns the report.
///
/// The first device that cannot be read or parsed aborts the whole listing.
pub async fn led_info(config: &Config) -> Result<Report, Error> {
    led_devices(config)
        .try_collect::<Vec<_>>()
        .await
        .map(Report::from)
}

/// Sets the brightness of `device` to `level` and returns a confirmation message.
///
/// Validation happens in the same order as [`crate::blocking::set_led_brightness`].
pub async fn set_led_brightness(
    config: &Config,
    device: &str,
    level: i64,
) -> Result<String, Error> {
    let device = crate::validate_request(device, level)?;
    let dir = sysfs::device_dir(config, device);
    let max = read_value(config, device, &dir, Value::Max).await?;
    let value = crate::check_level(device, level, max)?;
    match config.write_method() {
        WriteMethod::Sysfs => write_value(config, device, value).await?,
        #[cfg(all(feature = "logind", target_os = "linux"))]
        WriteMethod::Logind => crate::logind::set_brightness_async(config, device, value).await?,
    }
    debug!(device, value, "brightness set");
    Ok(crate::confirmation(device, value))
}

async fn read_device(config: &Config, entry: fs::DirEntry) -> Result<LedDevice, SysError> {
    let name = sysfs::trim(&entry.file_name().to_string_lossy()).to_owned();
    let dir = entry.path();
    let brightness = read_value(config, &name, &dir, Value::Actual).await?;
    let max_brightness = read_value(config, &name, &dir, Value::Max).await?;
    Ok(LedDevice {
        name,
        brightness,
        max_brightness,
    })
}

async fn read_value(
    config: &Config,
    device: &str,
    device_dir: &Path,
    name: Value,
) -> Result<u32, SysError> {
    let path = sysfs::attribute_path(config, device_dir, name);
    debug!(device, path = %path.display(), "reading LED attribute");
    let contents = fs::read_to_string(&path)
        .await
        .map_err(|source| SysError::ReadingAttributeFailed {
            device: device.into(),
            path: path.clone(),
            source,
        })?;
    sysfs::parse_value(device, path, &contents)
}

pub(crate) async fn write_value(config: &Config, device: &str, value: u32) -> Result<(), SysError> {
    let path = sysfs::attribute_path(config, &sysfs::device_dir(config, device), Value::Actual);
    debug!(device, value, path = %path.display(), "writing LED brightness");
    fs::write(&path, value.to_string())
        .await
        .map_err(|source| SysError::WritingAttributeFailed {
            device: device.into(),
            path: path.clone(),
            source,
        })
}
