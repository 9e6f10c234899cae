//! Application layer: the consumers.
//!
//! Every type here receives its collaborators as capabilities at construction
//! (or as trait-typed arguments) and only calls operations declared on those
//! contracts. Concrete implementations are chosen by the caller.

pub mod catalog;
pub mod notification;
pub mod payment;
pub mod portfolio;
pub mod reform;
pub mod user;
pub mod valuation;
