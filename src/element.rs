//! References to documented elements, used as registry query keys.

use std::fmt;

use crate::documented::Documented;

/// A type or field that metadata can be attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element<'a> {
    /// A documented type, by documented name.
    Type { ty: &'a str },
    /// A field of a documented type, by serialized field name.
    Field { ty: &'a str, field: &'a str },
}

impl<'a> Element<'a> {
    pub fn ty(ty: &'a str) -> Self {
        Element::Type { ty }
    }

    pub fn field(ty: &'a str, field: &'a str) -> Self {
        Element::Field { ty, field }
    }

    /// Name of the type this element belongs to.
    pub fn type_name(&self) -> &'a str {
        match *self {
            Element::Type { ty } | Element::Field { ty, .. } => ty,
        }
    }
}

impl Element<'static> {
    /// Element for a documented Rust type.
    pub fn of<T: Documented>() -> Self {
        Element::Type { ty: T::DOCS.name }
    }

    /// Element for a field of a documented Rust type.
    pub fn field_of<T: Documented>(field: &'static str) -> Self {
        Element::Field {
            ty: T::DOCS.name,
            field,
        }
    }
}

impl fmt::Display for Element<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Type { ty } => write!(f, "{ty}"),
            Element::Field { ty, field } => write!(f, "{ty}.{field}"),
        }
    }
}
