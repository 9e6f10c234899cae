//! Domain layer: value types and the capability contracts consumers depend on.

pub mod email;
pub mod investor;
pub mod payment;
pub mod ports;
pub mod property;
pub mod user;
