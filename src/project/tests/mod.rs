//! Unit tests for the project module.
//!
//! Tests are organised by concern: task status evaluation, the lifecycle
//! state machine, domain validation, checklist assembly, completion
//! validation and service orchestration.
