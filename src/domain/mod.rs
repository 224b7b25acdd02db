//! Domain layer: the denomination catalog, coin tallies and the machine's
//! transaction state, plus the ports the machine talks to.

pub mod action;
pub mod change;
pub mod denomination;
pub mod machine;
pub mod money;
pub mod ports;
pub mod product;
pub mod tally;
