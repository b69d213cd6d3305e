// Copyright (C) 2026 The ledctl project authors. Distributed under the 0BSD license.

//! Brightness writes through systemd-logind.
//!
//! logind's `SetBrightness` accepts the `leds` subsystem and performs the write on behalf of the
//! session, so no write permission on the attribute file is needed. Systems without the method
//! (systemd older than 243) get the direct sysfs write instead.

use crate::{sysfs, Config, Error};
use tracing::warn;

pub(crate) const USER_DBUS_NAME: &str = "org.freedesktop.login1";
pub(crate) const SESSION_OBJECT_PATH: &str = "/org/freedesktop/login1/session/auto";
pub(crate) const SESSION_INTERFACE: &str = "org.freedesktop.login1.Session";
pub(crate) const SET_BRIGHTNESS_METHOD: &str = "SetBrightness";
pub(crate) const LEDS_SUBSYSTEM: &str = "leds";

fn call_failed(device: &str, e: zbus::Error) -> Error {
    Error::SettingBrightnessFailed {
        device: device.into(),
        source: e.into(),
    }
}

pub(crate) fn set_brightness(config: &Config, device: &str, value: u32) -> Result<(), Error> {
    let bus = zbus::blocking::Connection::system().map_err(|e| call_failed(device, e))?;
    let response = bus.call_method(
        Some(USER_DBUS_NAME),
        SESSION_OBJECT_PATH,
        Some(SESSION_INTERFACE),
        SET_BRIGHTNESS_METHOD,
        &(LEDS_SUBSYSTEM, device, value),
    );
    match response {
        Ok(_) => Ok(()),
        Err(zbus::Error::MethodError(..)) => {
            warn!(device, "logind SetBrightness unavailable, writing brightness file");
            Ok(sysfs::set_value(config, device, value)?)
        }
        Err(e) => Err(call_failed(device, e)),
    }
}

#[cfg(feature = "async")]
pub(crate) async fn set_brightness_async(
    config: &Config,
    device: &str,
    value: u32,
) -> Result<(), Error> {
    let bus = zbus::Connection::system()
        .await
        .map_err(|e| call_failed(device, e))?;
    let response = bus
        .call_method(
            Some(USER_DBUS_NAME),
            SESSION_OBJECT_PATH,
            Some(SESSION_INTERFACE),
            SET_BRIGHTNESS_METHOD,
            &(LEDS_SUBSYSTEM, device, value),
        )
        .await;
    match response {
        Ok(_) => Ok(()),
        Err(zbus::Error::MethodError(..)) => {
            warn!(device, "logind SetBrightness unavailable, writing brightness file");
            Ok(crate::platform::write_value(config, device, value).await?)
        }
        Err(e) => Err(call_failed(device, e)),
    }
}
