//! Key-value storage implementation: one JSON document per key under a
//! base directory, with the whole roster stored as a single document.

pub mod connection;
pub mod roster_repository;

pub use connection::KvConnection;
pub use roster_repository::RosterRepository;
