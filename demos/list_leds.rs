use ledctl::{blocking, Config};

fn main() {
    let config = Config::default();
    let count = blocking::led_devices(&config)
        .try_fold(0, |count, dev| {
            let dev = dev?;
            println!("LED {}", dev.name);
            println!("\tBrightness = {}/{}", dev.brightness, dev.max_brightness);
            Ok::<_, ledctl::Error>(count + 1)
        })
        .unwrap();
    println!("Found {} LEDs", count);
}
