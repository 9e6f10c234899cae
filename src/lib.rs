pub mod application;
pub mod composition;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;
pub mod registry;
