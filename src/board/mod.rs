//! Task board state and persistence.
//!
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Controller and persistence services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
