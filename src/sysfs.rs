// Copyright (C) 2026 The ledctl project authors. Distributed under the 0BSD license.

//! Access to the LED class attribute files.

use crate::{Config, Error};
use std::{fs, io, path::Path, path::PathBuf};
use tracing::debug;

/// Characters stripped from both ends of device names and attribute contents.
///
/// Carriage return is not part of the set.
pub(crate) const TRIM_CHARS: &[char] = &[' ', '\n', '\t', '\x0B'];

#[derive(Clone, Copy, Debug)]
pub(crate) enum Value {
    Actual,
    Max,
}

impl Value {
    pub(crate) fn file_name(self, config: &Config) -> &str {
        match self {
            Value::Actual => config.brightness_file(),
            Value::Max => config.max_brightness_file(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum SysError {
    #[error("Failed to list LED devices under {}", .path.display())]
    ListingFailed { path: PathBuf, source: io::Error },
    #[error("Failed to read {} of LED device {device}", .path.display())]
    ReadingAttributeFailed {
        device: String,
        path: PathBuf,
        source: io::Error,
    },
    #[error("{} of LED device {device} is not a brightness value: {reason}", .path.display())]
    ParsingAttributeFailed {
        device: String,
        path: PathBuf,
        reason: String,
    },
    #[error("Failed to write brightness to {}", .path.display())]
    WritingAttributeFailed {
        device: String,
        path: PathBuf,
        source: io::Error,
    },
}

impl SysError {
    fn device(&self) -> Option<&str> {
        match self {
            SysError::ListingFailed { .. } => None,
            SysError::ReadingAttributeFailed { device, .. }
            | SysError::ParsingAttributeFailed { device, .. }
            | SysError::WritingAttributeFailed { device, .. } => Some(device),
        }
    }
}

impl From<SysError> for Error {
    fn from(e: SysError) -> Self {
        let device = e.device().map(str::to_owned);
        match device {
            None => Error::ListingDevicesFailed(e.into()),
            Some(device) => {
                if let SysError::WritingAttributeFailed { .. } = e {
                    Error::SettingBrightnessFailed {
                        device,
                        source: e.into(),
                    }
                } else {
                    Error::GettingDeviceInfoFailed {
                        device,
                        source: e.into(),
                    }
                }
            }
        }
    }
}

pub(crate) fn trim(s: &str) -> &str {
    s.trim_matches(TRIM_CHARS)
}

/// Path of an attribute file of the device living in `device_dir`.
pub(crate) fn attribute_path(config: &Config, device_dir: &Path, name: Value) -> PathBuf {
    device_dir.join(name.file_name(config))
}

/// Directory of `device` below the devices root.
///
/// Leading slashes are dropped so an absolute name cannot replace the root.
pub(crate) fn device_dir(config: &Config, device: &str) -> PathBuf {
    config.devices_root().join(device.trim_start_matches('/'))
}

pub(crate) fn parse_value(device: &str, path: PathBuf, contents: &str) -> Result<u32, SysError> {
    trim(contents)
        .parse::<u32>()
        .map_err(|e| SysError::ParsingAttributeFailed {
            device: device.into(),
            path,
            reason: e.to_string(),
        })
}

pub(crate) fn list_devices(config: &Config) -> Result<fs::ReadDir, SysError> {
    let path = config.devices_root();
    debug!(root = %path.display(), "listing LED devices");
    fs::read_dir(path).map_err(|source| SysError::ListingFailed {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads an LED attribute value from the filesystem.
pub(crate) fn read_value(
    config: &Config,
    device: &str,
    device_dir: &Path,
    name: Value,
) -> Result<u32, SysError> {
    let path = attribute_path(config, device_dir, name);
    debug!(device, path = %path.display(), "reading LED attribute");
    let contents = fs::read_to_string(&path).map_err(|source| SysError::ReadingAttributeFailed {
        device: device.into(),
        path: path.clone(),
        source,
    })?;
    parse_value(device, path, &contents)
}

/// Writes the decimal representation of `value`, without a trailing newline, to the
/// brightness file of `device`.
pub(crate) fn set_value(config: &Config, device: &str, value: u32) -> Result<(), SysError> {
    let path = attribute_path(config, &device_dir(config, device), Value::Actual);
    debug!(device, value, path = %path.display(), "writing LED brightness");
    fs::write(&path, value.to_string()).map_err(|source| SysError::WritingAttributeFailed {
        device: device.into(),
        path: path.clone(),
        source,
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_exact_character_set() {
        assert_eq!(trim(" \t\x0B42\n "), "42");
        assert_eq!(trim("\r42\r"), "\r42\r");
    }

    #[test]
    fn parses_trimmed_decimal() {
        assert_eq!(parse_value("dev", PathBuf::from("x"), "3\n").unwrap(), 3);
        assert_eq!(parse_value("dev", PathBuf::from("x"), " 255 ").unwrap(), 255);
    }

    #[test]
    fn rejects_carriage_return_and_garbage() {
        assert!(matches!(
            parse_value("dev", PathBuf::from("x"), "3\r\n"),
            Err(SysError::ParsingAttributeFailed { .. })
        ));
        assert!(parse_value("dev", PathBuf::from("x"), "bright").is_err());
        assert!(parse_value("dev", PathBuf::from("x"), "-1").is_err());
        assert!(parse_value("dev", PathBuf::from("x"), "").is_err());
    }

    #[test]
    fn parse_error_names_device() {
        let e = Error::from(parse_value("red:status", PathBuf::from("x"), "nope").unwrap_err());
        match e {
            Error::GettingDeviceInfoFailed { device, .. } => assert_eq!(device, "red:status"),
            e => panic!("unexpected error: {}", e),
        }
    }

    #[test]
    fn missing_root_maps_to_listing_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = Config::default().with_devices_root(dir.path().join("missing"));
        let e = Error::from(list_devices(&config).unwrap_err());
        assert!(matches!(e, Error::ListingDevicesFailed(_)));
    }

    #[test]
    fn set_value_writes_without_newline() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("led0")).unwrap();
        let config = Config::default().with_devices_root(dir.path());
        set_value(&config, "led0", 7).unwrap();
        let written = std::fs::read_to_string(dir.path().join("led0/brightness")).unwrap();
        assert_eq!(written, "7");
    }

    #[test]
    fn absolute_device_name_stays_under_root() {
        let config = Config::default().with_devices_root("/sys/class/leds");
        assert_eq!(
            device_dir(&config, "/tmp/evil"),
            Path::new("/sys/class/leds/tmp/evil")
        );
        assert_eq!(
            device_dir(&config, "red:status"),
            Path::new("/sys/class/leds/red:status")
        );
    }

    #[test]
    fn write_failure_maps_to_setting_error() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("led0/brightness")).unwrap();
        let config = Config::default().with_devices_root(dir.path());
        let e = Error::from(set_value(&config, "led0", 1).unwrap_err());
        match e {
            Error::SettingBrightnessFailed { device, source } => {
                assert_eq!(device, "led0");
                assert!(source.to_string().contains("brightness"));
                assert!(source.source().unwrap().downcast_ref::<io::Error>().is_some());
            }
            e => panic!("unexpected error: {}", e),
        }
    }
}
