//! The process-wide construction option registry.
//!
//! Populated once, synchronously, before any concurrent read begins, and
//! immutable afterward: [`RegistryBuilder`] holds all mutation, the terminal
//! [`RegistryBuilder::build`] freezes it into a [`Registry`] with no
//! `&mut self` methods. Consumers receive the registry by reference
//! (dependency injection), which keeps the engine testable against small
//! synthetic data sets.

use crate::option::ConstructionOption;
use std::collections::HashMap;

/// Errors raised by registry construction and strict lookup.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// A well-known key is absent. This is a configuration-integrity
    /// failure at the caller's boundary, not a recoverable domain case.
    #[error("construction option not found: {0}")]
    NotFound(String),

    /// Two options were registered under the same key.
    #[error("duplicate construction option key: {0}")]
    DuplicateKey(String),

    /// A weight-class link points at a key that was never registered.
    #[error("option '{key}' links to unknown weight class '{link}'")]
    DanglingLink { key: String, link: String },
}

/// Builder for the immutable registry. Registration order is preserved.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    options: Vec<ConstructionOption>,
    key_to_index: HashMap<String, usize>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        RegistryBuilder::default()
    }

    /// Register an option. Keys must be unique.
    pub fn register(&mut self, option: ConstructionOption) -> Result<(), RegistryError> {
        if self.key_to_index.contains_key(&option.key) {
            return Err(RegistryError::DuplicateKey(option.key));
        }
        self.key_to_index
            .insert(option.key.clone(), self.options.len());
        self.options.push(option);
        Ok(())
    }

    /// Finalize into the immutable registry.
    pub fn build(self) -> Registry {
        Registry {
            options: self.options,
            key_to_index: self.key_to_index,
        }
    }
}

/// Immutable option lookup. Frozen after build; safe to share across
/// threads without synchronization.
#[derive(Debug)]
pub struct Registry {
    options: Vec<ConstructionOption>,
    key_to_index: HashMap<String, usize>,
}

impl Registry {
    /// Strict lookup. Every key used at compile time is guaranteed present
    /// at runtime; a miss here means the loaded data is inconsistent with
    /// the code, surfaced as a typed error for the caller to escalate.
    pub fn get(&self, key: &str) -> Result<&ConstructionOption, RegistryError> {
        self.find(key)
            .ok_or_else(|| RegistryError::NotFound(key.to_string()))
    }

    /// Non-strict lookup, used by chain navigation where an unresolved key
    /// simply means "no adjacent class".
    pub fn find(&self, key: &str) -> Option<&ConstructionOption> {
        self.key_to_index.get(key).map(|&i| &self.options[i])
    }

    /// Check that every stored weight-class link resolves. Callers that
    /// treat dangling links as a configuration defect run this once after
    /// loading.
    pub fn verify_links(&self) -> Result<(), RegistryError> {
        for option in &self.options {
            let Some(unit) = option.unit() else { continue };
            for link in [&unit.prev_weight_class, &unit.next_weight_class]
                .into_iter()
                .flatten()
            {
                if !self.key_to_index.contains_key(link) {
                    return Err(RegistryError::DanglingLink {
                        key: option.key.clone(),
                        link: link.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// All options in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ConstructionOption> {
        self.options.iter()
    }

    /// All keys in registration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(|o| o.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}
