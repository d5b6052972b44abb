//! Obstacle sensor input.

use embedded_hal::digital::InputPin;

/// Trait for abstracting the obstacle sensor.
pub trait ObstacleSensor {
    /// Returns true while an obstacle is detected. Polled once per tick.
    fn is_triggered(&mut self) -> bool;
}

/// Pin level that means "obstacle detected".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActiveLevel {
    #[default]
    High,
    Low,
}

/// Obstacle sensor on a digital input pin.
///
/// A failed pin read counts as "no obstacle".
pub struct DigitalSensor<P: InputPin> {
    pin: P,
    active: ActiveLevel,
}

impl<P: InputPin> DigitalSensor<P> {
    pub fn new(pin: P, active: ActiveLevel) -> Self {
        Self { pin, active }
    }

    /// Sensor that reads high when triggered.
    pub fn active_high(pin: P) -> Self {
        Self::new(pin, ActiveLevel::High)
    }

    /// Sensor that pulls the line low when triggered.
    pub fn active_low(pin: P) -> Self {
        Self::new(pin, ActiveLevel::Low)
    }

    /// Releases the pin.
    pub fn free(self) -> P {
        self.pin
    }
}

impl<P: InputPin> ObstacleSensor for DigitalSensor<P> {
    fn is_triggered(&mut self) -> bool {
        let reading = match self.active {
            ActiveLevel::High => self.pin.is_high(),
            ActiveLevel::Low => self.pin.is_low(),
        };
        reading.unwrap_or(false)
    }
}
