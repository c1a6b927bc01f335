use lazy_static::lazy_static;
use std::env;
use std::str::FromStr;

/// BCM number of the GPIO pin the DHT11 data line is wired to.
const DEFAULT_SENSOR_PIN: u64 = 14;

/// How many reads to attempt before giving up on the sensor.
const DEFAULT_SENSOR_RETRIES: u8 = 15;

/// Pause between read attempts, in milliseconds.
const DEFAULT_RETRY_PAUSE_MS: u64 = 2000;

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .unwrap_or_else(|_| panic!("Invalid value {:?} for {}", raw, name)),
        Err(_) => default,
    }
}

lazy_static! {
    pub static ref SENSOR_PIN: u64 = env_or("CLIMARGS_PIN", DEFAULT_SENSOR_PIN);
    pub static ref SENSOR_RETRIES: u8 = env_or("CLIMARGS_RETRIES", DEFAULT_SENSOR_RETRIES);
    pub static ref RETRY_PAUSE_MS: u64 = env_or("CLIMARGS_RETRY_PAUSE_MS", DEFAULT_RETRY_PAUSE_MS);
}
