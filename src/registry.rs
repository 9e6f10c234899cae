//! Named factories for interchangeable capability implementations.
//!
//! A composition root registers one factory per implementation name, freezes the
//! registry with [`RegistryBuilder::build`], and resolves implementations by
//! name when wiring consumers. A built registry cannot be extended or altered.

use crate::error::{CapabilityError, Result};
use std::collections::BTreeMap;
use tracing::debug;

pub type Factory<T, A> = Box<dyn Fn(&A) -> Result<Box<T>> + Send + Sync>;

pub struct RegistryBuilder<T: ?Sized, A = ()> {
    capability: String,
    factories: BTreeMap<String, Factory<T, A>>,
    duplicates: Vec<String>,
}

impl<T: ?Sized, A> RegistryBuilder<T, A> {
    /// Adds a named factory. Registering a name twice makes [`build`](Self::build) fail.
    pub fn register<F>(mut self, name: impl Into<String>, factory: F) -> Self
    where
        F: Fn(&A) -> Result<Box<T>> + Send + Sync + 'static,
    {
        let name = name.into();
        if self.factories.contains_key(&name) {
            self.duplicates.push(name);
        } else {
            self.factories.insert(name, Box::new(factory));
        }
        self
    }

    pub fn build(self) -> Result<CapabilityRegistry<T, A>> {
        if let Some(name) = self.duplicates.into_iter().next() {
            return Err(CapabilityError::DuplicateCapability {
                capability: self.capability,
                name,
            });
        }

        debug!(
            capability = %self.capability,
            implementations = self.factories.len(),
            "capability registry built"
        );
        Ok(CapabilityRegistry {
            capability: self.capability,
            factories: self.factories,
        })
    }
}

pub struct CapabilityRegistry<T: ?Sized, A = ()> {
    capability: String,
    factories: BTreeMap<String, Factory<T, A>>,
}

impl<T: ?Sized, A> CapabilityRegistry<T, A> {
    /// Starts a registry for the capability labelled `capability` (used in errors and logs).
    pub fn builder(capability: impl Into<String>) -> RegistryBuilder<T, A> {
        RegistryBuilder {
            capability: capability.into(),
            factories: BTreeMap::new(),
            duplicates: Vec::new(),
        }
    }

    pub fn capability(&self) -> &str {
        &self.capability
    }

    /// Builds the implementation registered under `name`.
    pub fn resolve(&self, name: &str, args: &A) -> Result<Box<T>> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| CapabilityError::UnknownCapability {
                capability: self.capability.clone(),
                name: name.to_string(),
                known: self.names().into_iter().map(str::to_string).collect(),
            })?;

        debug!(capability = %self.capability, name, "resolving implementation");
        factory(args)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.factories.keys().map(String::as_str).collect()
    }
}
