//! Conversion and transfer project lifecycle management.
//!
//! A project moves `Inactive → Active` on handover and then to exactly one
//! of `Completed`, `DaoRevoked` or `Deleted`. Completion is gated on the
//! project's checklist and its significant date. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Checklist evaluation in [`checklist`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod checklist;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
