//! Task board management for Missionboard.
//!
//! This module implements the task core: creating validated task records,
//! annotating and ordering them by urgency-weighted priority score,
//! gating the `pending -> completed` transition behind the Definition of
//! Done, and breaking tasks down into subtask plans. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
