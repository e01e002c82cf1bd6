//! Metadata registry for documentation generators.
//!
//! Collects the [`TypeMeta`] of documented types under their documented
//! names so a generator can look metadata up by the names it encounters in
//! schemas. Registration needs `&mut self`; once built, the registry is frozen
//! with [`Registry::into_shared`] and read concurrently without locking.

use std::any::{TypeId, type_name};
use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use crate::documented::Documented;
use crate::element::Element;
use crate::error::{Error, Result};
use crate::meta::{FieldMeta, TypeMeta};

/// A registered type: its metadata plus the Rust type that supplied it.
struct Entry {
    meta: TypeMeta,
    type_id: TypeId,
    rust_name: &'static str,
}

/// Lookup table from documented type name to metadata.
#[derive(Default)]
pub struct Registry {
    entries: BTreeMap<&'static str, Entry>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the metadata of `T`.
    ///
    /// Registering the same type twice is a no-op. A different type with the
    /// same documented name is rejected.
    pub fn register<T: Documented>(&mut self) -> Result<&mut Self> {
        let meta = T::DOCS;
        let type_id = TypeId::of::<T>();
        let rust_name = type_name::<T>();

        if let Some(existing) = self.entries.get(meta.name) {
            if existing.type_id == type_id {
                return Ok(self);
            }
            debug!(
                name = meta.name,
                existing = existing.rust_name,
                incoming = rust_name,
                "rejected registration under a taken name"
            );
            return Err(Error::Conflict {
                name: meta.name,
                existing: existing.rust_name,
                incoming: rust_name,
            });
        }

        debug!(
            name = meta.name,
            rust_type = rust_name,
            fields = meta.fields.len(),
            "registered documented type"
        );
        self.entries.insert(
            meta.name,
            Entry {
                meta,
                type_id,
                rust_name,
            },
        );
        Ok(self)
    }

    /// Metadata of a type by documented name.
    pub fn get(&self, name: &str) -> Option<&TypeMeta> {
        self.entries.get(name).map(|e| &e.meta)
    }

    /// All registered types, ordered by name.
    pub fn types(&self) -> impl Iterator<Item = &TypeMeta> {
        self.entries.values().map(|e| &e.meta)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Description attached to a type or field, if any.
    pub fn description(&self, element: &Element<'_>) -> Option<&'static str> {
        match *element {
            Element::Type { ty } => self.get(ty)?.description,
            Element::Field { ty, field } => self.field(ty, field)?.description,
        }
    }

    /// Whether the element is a field explicitly marked read-only.
    ///
    /// Types are never read-only.
    pub fn is_read_only(&self, element: &Element<'_>) -> bool {
        match *element {
            Element::Type { .. } => false,
            Element::Field { ty, field } => self.field(ty, field).is_some_and(|f| f.read_only),
        }
    }

    /// Freeze the registry for shared, read-only use.
    pub fn into_shared(self) -> Arc<Registry> {
        Arc::new(self)
    }

    fn field(&self, ty: &str, field: &str) -> Option<&'static FieldMeta> {
        self.get(ty)?.field(field)
    }
}
