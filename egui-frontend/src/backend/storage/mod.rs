//! # Storage Module
//!
//! Persistence for the tracker. The domain layer depends only on the
//! `RosterStorage` trait; the concrete implementation is a file-backed
//! key-value store holding the whole roster as one JSON document.

pub mod kv;
pub mod traits;

pub use kv::KvConnection;
pub use traits::RosterStorage;
