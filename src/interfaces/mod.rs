//! Adapters between the outside world and the machine service.

pub mod csv;
pub mod display;
