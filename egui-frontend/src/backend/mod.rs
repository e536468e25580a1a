//! # Backend Module
//!
//! Synchronous backend for the egui frontend. All operations run on the
//! UI thread: no async runtime, no locks, direct service calls. The
//! refresh tick and user actions are serialized through the egui update
//! loop, so the roster is only ever mutated from one logical thread.

use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;

pub mod domain;
pub mod storage;

pub use storage::KvConnection;

/// Runtime configuration for the tracker.
///
/// The roster size follows the configured names: tracking more (or fewer)
/// individuals is a configuration change, not a code change.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Display names for the default roster, one individual each
    pub individual_names: Vec<String>,
    /// How often remaining time is recomputed
    pub refresh_period: Duration,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            individual_names: vec!["First child".to_string(), "Second child".to_string()],
            refresh_period: Duration::from_secs(1),
        }
    }
}

/// Main backend struct that orchestrates all services.
pub struct Backend {
    pub sensor_service: domain::SensorService,
    pub notification_service: domain::NotificationService,
    pub config: TrackerConfig,
}

impl Backend {
    /// Create a backend over the platform data directory.
    pub fn new(config: TrackerConfig) -> Result<Self> {
        let connection = Arc::new(KvConnection::new_default()?);
        Self::with_connection(connection, config)
    }

    /// Create a backend over an explicit connection (tests inject a
    /// temporary directory here).
    pub fn with_connection(connection: Arc<KvConnection>, config: TrackerConfig) -> Result<Self> {
        let sensor_service = domain::SensorService::new(connection.clone());
        let notification_service = domain::NotificationService::new(connection);

        Ok(Self {
            sensor_service,
            notification_service,
            config,
        })
    }
}
