//! Metadata records attached to documented types and fields.
//!
//! Both records are built with `const fn` builders so they can live in
//! `const` items and associated consts. All data they hold is `'static`.
//!
//! An element carries at most one description and one read-only marker, and a
//! type lists each field once. The builders panic otherwise, which turns the
//! mistake into a compile error when they run in `const` context.

/// Metadata for a single field of a documented type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMeta {
    /// Serialized field name, as it appears in the documented payload.
    pub name: &'static str,
    pub description: Option<&'static str>,
    /// Field must not be set through the documented interface.
    pub read_only: bool,
}

impl FieldMeta {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            description: None,
            read_only: false,
        }
    }

    pub const fn description(mut self, text: &'static str) -> Self {
        if self.description.is_some() {
            panic!("field already has a description");
        }
        self.description = Some(text);
        self
    }

    pub const fn read_only(mut self) -> Self {
        if self.read_only {
            panic!("field is already marked read-only");
        }
        self.read_only = true;
        self
    }
}

/// Metadata for a documented type.
///
/// There is no read-only flag here: read-only markers only apply to fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeMeta {
    /// Documented type name, used as the lookup key by the registry.
    pub name: &'static str,
    pub description: Option<&'static str>,
    pub fields: &'static [FieldMeta],
}

impl TypeMeta {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            description: None,
            fields: &[],
        }
    }

    pub const fn description(mut self, text: &'static str) -> Self {
        if self.description.is_some() {
            panic!("type already has a description");
        }
        self.description = Some(text);
        self
    }

    pub const fn fields(mut self, fields: &'static [FieldMeta]) -> Self {
        let mut i = 0;
        while i < fields.len() {
            let mut j = i + 1;
            while j < fields.len() {
                if str_eq(fields[i].name, fields[j].name) {
                    panic!("field listed more than once");
                }
                j += 1;
            }
            i += 1;
        }
        self.fields = fields;
        self
    }

    /// Look up a field by its serialized name.
    pub fn field(&self, name: &str) -> Option<&'static FieldMeta> {
        let fields: &'static [FieldMeta] = self.fields;
        fields.iter().find(|f| f.name == name)
    }
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}
