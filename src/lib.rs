//! Casework: academy conversion and transfer project lifecycle.
//!
//! This crate tracks conversion and transfer projects from handover through
//! completion, deletion or revocation of the directive academy order. It
//! evaluates each project's checklist, decides whether a project may be
//! completed, and records every transition atomically.
//!
//! # Architecture
//!
//! Casework follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence
//! - **Adapters**: In-memory and `PostgreSQL` implementations of the ports
//!
//! # Modules
//!
//! - [`project`]: Projects, checklists, lifecycle services and storage
//! - [`config`]: Environment-driven database configuration

pub mod config;
pub mod project;
