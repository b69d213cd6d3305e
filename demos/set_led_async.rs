use std::env;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let mut args = env::args().skip(1);
    let device = args.next().expect("LED device name must be given as first parameter");
    let level = args
        .next()
        .and_then(|a| a.parse().ok())
        .expect("Desired brightness level must be given as second parameter");
    let message = ledctl::set_led_brightness(&ledctl::Config::default(), &device, level)
        .await
        .unwrap();
    println!("{}", message);
}
