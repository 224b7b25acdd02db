//! Application layer wiring the machine to its collaborators.
//!
//! This module defines the `MachineService`, the primary entry point for
//! driving a machine. It serializes every operation on one machine through a
//! `tokio` mutex and settles stock with the product store after each vend.

pub mod service;
