//! Compile-time robot configuration.
//!
//! Port numbers are consumed by the board crate when it builds the hardware
//! handles; the rest is passed to [`Robot::new`](crate::robot::Robot::new).

use crate::drive::{DriveConfig, OutputRange, PidGains};

/// Hardware port assignments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Ports {
    /// PWM header driving the LED strip data line.
    pub led_pwm: u8,
    /// Digital input the obstacle sensor is wired to.
    pub sensor_dio: u8,
    /// CAN id of the motor controller.
    pub motor_can_id: u8,
}

pub const PORTS: Ports = Ports {
    led_pwm: 1,
    sensor_dio: 1,
    motor_can_id: 1,
};

/// Pixels on the strip.
pub const STRIP_LENGTH: usize = 60;

/// Rate the scheduler calls [`Robot::tick`](crate::robot::Robot::tick) at.
pub const TICK_RATE_HZ: u32 = 50;

/// Tick period in milliseconds.
pub const TICK_PERIOD_MS: u32 = 1_000 / TICK_RATE_HZ;

pub const DRIVE: DriveConfig = DriveConfig {
    gains: PidGains {
        p: 0.0002,
        i: 0.0,
        d: 0.0,
        i_zone: 0.0,
        ff: 0.000175,
    },
    output: OutputRange { min: 0.0, max: 1.0 },
    active_duty: 0.5,
};
