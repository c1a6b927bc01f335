use std::error::Error;
use std::io::Write;
use std::time::Duration;

use linux_embedded_hal::{Delay, SysfsPin};
use sysfs_gpio::{Direction, Pin};

mod climate_data;
mod config;
mod sensor;

use sensor::{ClimateSensor, Dht11Sensor};

/// Reads one measurement and writes the report line, or propagates the
/// failure without touching the output.
fn report<TSensor, TOut>(sensor: &mut TSensor, out: &mut TOut) -> Result<(), Box<dyn Error>>
where
    TSensor: ClimateSensor,
    TOut: Write,
{
    let climate_data = sensor.measure()?;
    tracing::debug!("New climate data: {:?}", climate_data);

    writeln!(out, "{}", climate_data)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let file_appender = tracing_appender::rolling::hourly("/tmp/climargs", "climargs.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::TRACE)
        .pretty()
        .init();

    let pin_number = *config::SENSOR_PIN;
    tracing::debug!("Opening GPIO {} for the DHT11 data line", pin_number);

    let data_line = Pin::new(pin_number);
    data_line.export()?;
    data_line.set_direction(Direction::High)?;

    // the sensor ignores start signals for about a second after the line
    // is first released high
    std::thread::sleep(Duration::from_secs(1));

    let mut sensor = Dht11Sensor::new(
        SysfsPin::new(pin_number),
        Delay,
        *config::SENSOR_RETRIES,
        Duration::from_millis(*config::RETRY_PAUSE_MS),
    );

    report(&mut sensor, &mut std::io::stdout())
}
