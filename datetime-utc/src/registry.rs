//! Lookup of column types by name

use crate::types::{ColumnType, UtcDateTimeType};
use anyhow::{anyhow, Result};
use log::warn;
use std::collections::BTreeMap;

/// The stable identifier of a column type.
pub type TypeName = &'static str;
/// Builds a fresh instance of a column type.
pub type TypeConstructor = fn() -> Box<dyn ColumnType>;
/// Constructors keyed by name.
pub type TypeConstructors = BTreeMap<TypeName, TypeConstructor>;
/// (name, constructor) pairs to seed a registry with.
pub type TypeConstructorSlice = [(TypeName, TypeConstructor)];

/// The column types this crate provides, keyed by their stable names.
pub const DEFAULT_TYPES: &TypeConstructorSlice = &[
    (UtcDateTimeType::MUTABLE_TYPE_NAME, mutable_utc_datetime),
    (UtcDateTimeType::IMMUTABLE_TYPE_NAME, immutable_utc_datetime),
];

fn mutable_utc_datetime() -> Box<dyn ColumnType> {
    Box::new(UtcDateTimeType::mutable())
}

fn immutable_utc_datetime() -> Box<dyn ColumnType> {
    Box::new(UtcDateTimeType::immutable())
}

/// A registry that is able to produce a [`ColumnType`] from the name it was registered
/// under. The mapping layer looks a column's declared type name up here and converts
/// every value of that column through the resulting instance.
#[derive(Debug, Default, Clone)]
pub struct TypeRegistry {
    constructors: TypeConstructors,
}

impl TypeRegistry {
    /// A registry holding exactly the given types.
    pub fn new(constructor_slice: &TypeConstructorSlice) -> Self {
        let mut constructors = BTreeMap::new();
        for pair in constructor_slice {
            constructors.insert(pair.0, pair.1);
        }
        TypeRegistry { constructors }
    }

    /// A registry holding [`DEFAULT_TYPES`].
    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_TYPES)
    }

    /// Register a new type. Fails if `name` is already taken.
    pub fn add_type(&mut self, name: TypeName, constructor: TypeConstructor) -> Result<()> {
        if self.constructors.contains_key(name) {
            return Err(anyhow!("Type already exists: {}", name));
        }

        self.constructors.insert(name, constructor);
        Ok(())
    }

    /// Replace the constructor of a registered type. Fails if `name` is unknown.
    pub fn override_type(&mut self, name: TypeName, constructor: TypeConstructor) -> Result<()> {
        match self.constructors.get_mut(name) {
            Some(existing) => {
                warn!("Overriding column type {}", name);
                *existing = constructor;
                Ok(())
            }
            None => Err(anyhow!("Type to be overwritten does not exist: {}", name)),
        }
    }

    /// Whether a type is registered under `name`.
    pub fn has_type(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }

    /// Build the type registered under `name`.
    pub fn get_type(&self, name: &str) -> Result<Box<dyn ColumnType>> {
        match self.constructors.get(name) {
            Some(ctor) => Ok(ctor()),
            None => Err(anyhow!("Unknown column type requested: {}", name)),
        }
    }

    /// Registered names, in order.
    pub fn names(&self) -> impl Iterator<Item = TypeName> + '_ {
        self.constructors.keys().copied()
    }
}
