//! # Domain Module
//!
//! Business logic for the sensor wear tracker, independent of any UI
//! framework or storage mechanism.
//!
//! ## Module Organization
//!
//! - **models**: the tracked-individual roster and sensor state machine
//! - **lifecycle**: pure classification of a sensor against the current time
//! - **time_format**: duration and instant display formatting
//! - **sensor_service**: start/reset transitions with the confirmation gate
//! - **notification_service**: lead-time settings and the startup probe
//! - **commands**: command/result types exchanged with the UI
//! - **clock**: injectable time source
//!
//! ## Core Rules
//!
//! - A sensor's official wear window is 10 days, followed by a 12-hour
//!   grace period; past that it is expired
//! - Remaining time under 24 hours counts as expiring soon
//! - Start is valid only while idle, reset only while running and only
//!   after explicit confirmation
//! - Every state change persists the whole roster before the UI refreshes

pub mod clock;
pub mod commands;
pub mod lifecycle;
pub mod models;
pub mod notification_service;
pub mod sensor_service;
pub mod time_format;

pub use notification_service::NotificationService;
pub use sensor_service::{ResetConfirmation, SensorService};
