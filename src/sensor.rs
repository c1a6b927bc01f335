use std::fmt;
use std::time::Duration;

use dht_sensor::{dht11, DhtError, DhtReading};
use embedded_hal::blocking::delay::{DelayMs, DelayUs};
use embedded_hal::digital::v2::{InputPin, OutputPin};

use crate::climate_data::ClimateData;

/// Failure of a sensor read, reported after the retry budget is spent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SensorError {
    /// The sensor never answered within the protocol timing window.
    Timeout,
    /// The transmission arrived corrupted.
    ChecksumMismatch,
    /// The GPIO data line itself failed.
    Gpio(String),
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SensorError::Timeout => write!(f, "sensor did not answer in time"),
            SensorError::ChecksumMismatch => write!(f, "sensor data failed checksum validation"),
            SensorError::Gpio(details) => write!(f, "GPIO line error: {}", details),
        }
    }
}

impl std::error::Error for SensorError {}

impl<E: fmt::Debug> From<DhtError<E>> for SensorError {
    fn from(error: DhtError<E>) -> Self {
        match error {
            DhtError::Timeout => SensorError::Timeout,
            DhtError::ChecksumMismatch => SensorError::ChecksumMismatch,
            DhtError::PinError(e) => SensorError::Gpio(format!("{:?}", e)),
        }
    }
}

/// A device that can produce one climate measurement.
pub trait ClimateSensor {
    fn measure(&mut self) -> Result<ClimateData, SensorError>;
}

/// DHT11 wired to a single GPIO data line.
///
/// The single-wire protocol itself lives in the driver crate; this type
/// owns the line, decodes driver readings into [`ClimateData`] and keeps
/// retrying until the sensor produces a checksum-valid answer or the
/// attempt budget runs out.
pub struct Dht11Sensor<TPin, TDelay> {
    pin: TPin,
    delay: TDelay,
    attempts: u8,
    retry_pause: Duration,
}

impl<TPin, TDelay, E> Dht11Sensor<TPin, TDelay>
where
    TPin: InputPin<Error = E> + OutputPin<Error = E>,
    TDelay: DelayUs<u8> + DelayMs<u8>,
    E: fmt::Debug,
{
    pub fn new(pin: TPin, delay: TDelay, attempts: u8, retry_pause: Duration) -> Self {
        Self {
            pin,
            delay,
            attempts,
            retry_pause,
        }
    }

    fn read_once(&mut self) -> Result<ClimateData, SensorError> {
        let reading = dht11::Reading::read(&mut self.delay, &mut self.pin)?;

        Ok(ClimateData {
            temperature: reading.temperature as f32,
            humidity: reading.relative_humidity as f32,
        })
    }
}

impl<TPin, TDelay, E> ClimateSensor for Dht11Sensor<TPin, TDelay>
where
    TPin: InputPin<Error = E> + OutputPin<Error = E>,
    TDelay: DelayUs<u8> + DelayMs<u8>,
    E: fmt::Debug,
{
    fn measure(&mut self) -> Result<ClimateData, SensorError> {
        let attempts = self.attempts;
        let retry_pause = self.retry_pause;

        with_retries(attempts, retry_pause, || self.read_once())
    }
}

/// Runs `read` until it succeeds, pausing between attempts.
///
/// Timeouts and checksum failures are transient on this bus and worth
/// retrying; a GPIO fault is not going to heal by waiting, so it aborts
/// the budget right away.
fn with_retries<TRead>(
    attempts: u8,
    pause: Duration,
    mut read: TRead,
) -> Result<ClimateData, SensorError>
where
    TRead: FnMut() -> Result<ClimateData, SensorError>,
{
    let mut last_error = SensorError::Timeout;

    for attempt in 1..=attempts.max(1) {
        if attempt > 1 {
            std::thread::sleep(pause);
        }

        match read() {
            Ok(climate_data) => {
                tracing::debug!(attempt, "Got climate data: {:?}", climate_data);
                return Ok(climate_data);
            }
            Err(gpio_error @ SensorError::Gpio(_)) => {
                tracing::error!(attempt, "GPIO fault while reading sensor");
                return Err(gpio_error);
            }
            Err(error) => {
                tracing::debug!(attempt, ?error, "Sensor read failed, will retry");
                last_error = error;
            }
        }
    }

    Err(last_error)
}
