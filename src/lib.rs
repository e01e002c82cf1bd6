//! Route-docs - Declarative metadata for API route documentation.
//!
//! Route-docs attaches documentation metadata to data-model types and their
//! fields, and lets a documentation generator query it later:
//!
//! - **Meta**: `const`-built description and read-only records
//! - **Documented**: Trait (and `describe!` macro) binding metadata to a type
//! - **Registry**: Name-keyed lookup of description and read-only metadata
//! - **OpenAPI**: Copies registered metadata onto existing JSON schemas
//! - **Config**: Layered configuration (file → env → overrides)
//!
//! # Example
//!
//! ```ignore
//! use route_docs::{Element, Registry, describe};
//!
//! pub struct User {
//!     pub id: u64,
//!     pub email: String,
//! }
//!
//! describe! {
//!     #[description = "A registered user"]
//!     User {
//!         #[read_only]
//!         id,
//!         #[description = "User email"]
//!         email,
//!     }
//! }
//!
//! fn main() -> route_docs::Result<()> {
//!     let mut registry = Registry::new();
//!     registry.register::<User>()?;
//!     let registry = registry.into_shared();
//!
//!     assert_eq!(
//!         registry.description(&Element::field("User", "email")),
//!         Some("User email")
//!     );
//!     assert!(registry.is_read_only(&Element::field("User", "id")));
//!
//!     // Decorate a schema produced by schemars
//!     let config = route_docs::config::Loader::new("MYAPP").load(None, None, None)?;
//!     let schema = schemars::schema_for!(User);
//!     let doc = route_docs::openapi::annotate_schema(&registry, &config.schema, &schema)?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod documented;
pub mod element;
pub mod error;
pub mod meta;
pub mod openapi;
pub mod registry;

// Re-export main types at crate root
pub use config::{Config, Loader};
pub use documented::Documented;
pub use element::Element;
pub use error::{Error, Result};
pub use meta::{FieldMeta, TypeMeta};
pub use registry::Registry;
