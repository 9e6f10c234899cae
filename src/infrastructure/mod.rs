//! Concrete implementations of the domain capabilities.

pub mod avm;
pub mod email;
pub mod in_memory;
pub mod payment;
