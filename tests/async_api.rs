#![cfg(feature = "async")]

use futures::TryStreamExt;
use ledctl::{Config, Error};
use std::fs;
use tempfile::TempDir;

fn red_status() -> (TempDir, Config) {
    let root = TempDir::new().unwrap();
    let dir = root.path().join("red:status");
    fs::create_dir(&dir).unwrap();
    fs::write(dir.join("brightness"), "3\n").unwrap();
    fs::write(dir.join("max_brightness"), "15").unwrap();
    let config = Config::default().with_devices_root(root.path());
    (root, config)
}

#[tokio::test]
async fn streams_devices() {
    let (_root, config) = red_status();
    let devices: Vec<_> = ledctl::led_devices(&config).try_collect().await.unwrap();
    assert_eq!(devices.len(), 1);
    assert_eq!(devices[0].name, "red:status");
    assert_eq!(devices[0].brightness, 3);
    assert_eq!(devices[0].max_brightness, 15);
}

#[tokio::test]
async fn async_report_matches_blocking_report() {
    let (_root, config) = red_status();
    let report = ledctl::led_info(&config).await.unwrap();
    assert_eq!(report, ledctl::blocking::led_info(&config).unwrap());
}

#[tokio::test]
async fn missing_root_fails() {
    let root = TempDir::new().unwrap();
    let config = Config::default().with_devices_root(root.path().join("leds"));
    assert!(matches!(
        ledctl::led_info(&config).await,
        Err(Error::ListingDevicesFailed(_))
    ));
}

#[tokio::test]
async fn sets_and_bounds_level() {
    let (root, config) = red_status();
    let brightness = root.path().join("red:status").join("brightness");

    let e = ledctl::set_led_brightness(&config, "red:status", 20)
        .await
        .unwrap_err();
    assert!(matches!(e, Error::LevelExceedsMaximum { level: 20, max: 15, .. }));
    assert_eq!(fs::read_to_string(&brightness).unwrap(), "3\n");

    let message = ledctl::set_led_brightness(&config, "red:status", 10)
        .await
        .unwrap();
    assert!(message.contains("[red:status]"));
    assert!(message.contains("[10]"));
    assert_eq!(fs::read_to_string(&brightness).unwrap(), "10");
}

#[tokio::test]
async fn invalid_input_is_refused() {
    let (_root, config) = red_status();
    assert!(matches!(
        ledctl::set_led_brightness(&config, "", 5).await,
        Err(Error::InvalidInput { .. })
    ));
}

#[tokio::test]
async fn write_failure_is_surfaced() {
    let root = TempDir::new().unwrap();
    let dir = root.path().join("led0");
    fs::create_dir_all(dir.join("brightness")).unwrap();
    fs::write(dir.join("max_brightness"), "1").unwrap();
    let config = Config::default().with_devices_root(root.path());
    let e = ledctl::set_led_brightness(&config, "led0", 1)
        .await
        .unwrap_err();
    assert!(matches!(e, Error::SettingBrightnessFailed { ref device, .. } if device == "led0"));
}
