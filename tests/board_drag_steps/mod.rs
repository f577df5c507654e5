//! Step definitions for board state change scenarios.

pub mod world;

mod given;
mod then;
mod when;
