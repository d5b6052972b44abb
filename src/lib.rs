#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Robot`**: One control cycle per [`Robot::tick`]: read the sensor, update the strip, drive the motor
//! - **`AnimationController`**: Edge detection, random pattern selection and frame pushes
//! - **`AnimationState`**: Everything the patterns remember between ticks
//! - **`Pattern`**: The seven animations (rainbow, blink, pulse, bounce, sparkle, lightsaber, police lights)
//! - **`PixelBuffer`**: Fixed-length frame for the strip
//! - **`LedStrip`**, **`ObstacleSensor`**, **`DriveMotor`**: Traits to implement for your hardware
//! - **`RandomSource`**: Trait for the random draws, implemented for `fastrand::Rng`
//!
//! The library uses `Srgb<f32>` (0.0-1.0 range) for all pixel colors. When
//! implementing `LedStrip` for your hardware, convert these values to the
//! strip's native format (usually 8-bit GRB).

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod animation;
pub mod colors;
pub mod config;
pub mod controller;
pub mod drive;
pub mod frame;
pub mod patterns;
pub mod random;
pub mod robot;
pub mod sensor;
pub mod types;

pub use animation::{AnimationState, Flicker, Toggle};
pub use colors::{BLACK, BLUE, GREEN, INDIGO, ORANGE, PALETTE, RED, VIOLET, YELLOW};
pub use controller::{AnimationController, LedStrip};
pub use drive::{ConfigError, DriveConfig, DriveMotor, OutputRange, PidGains};
pub use frame::PixelBuffer;
pub use random::RandomSource;
pub use robot::Robot;
pub use sensor::{ActiveLevel, DigitalSensor, ObstacleSensor};
pub use types::{Pattern, TickOutcome};
