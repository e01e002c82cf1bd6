//! Compile-time binding of metadata to Rust types.
//!
//! A type becomes documented by implementing [`Documented`], either by hand
//! with the `const fn` builders from [`crate::meta`] or through the
//! [`describe!`](crate::describe) macro:
//!
//! ```ignore
//! use route_docs::describe;
//!
//! pub struct User {
//!     pub id: u64,
//!     pub email: String,
//!     pub display_name: String,
//! }
//!
//! describe! {
//!     #[description = "A registered user"]
//!     User {
//!         #[read_only]
//!         id,
//!         #[description = "User email"]
//!         email,
//!         #[rename = "displayName"]
//!         display_name,
//!     }
//! }
//!
//! assert_eq!(User::field_description("email"), Some("User email"));
//! assert!(User::is_read_only("id"));
//! ```

use crate::meta::TypeMeta;

/// A type with statically attached documentation metadata.
pub trait Documented: 'static {
    /// Metadata for this type and its fields.
    const DOCS: TypeMeta;

    fn type_description() -> Option<&'static str> {
        Self::DOCS.description
    }

    /// Description of a field, by serialized name.
    fn field_description(field: &str) -> Option<&'static str> {
        Self::DOCS.field(field).and_then(|f| f.description)
    }

    /// Whether a field was explicitly marked read-only. Unknown fields are not.
    fn is_read_only(field: &str) -> bool {
        Self::DOCS.field(field).is_some_and(|f| f.read_only)
    }
}

/// Implement [`Documented`] for a struct from attribute-style declarations.
///
/// Accepted attributes:
/// - on the type: `#[description = "..."]`
/// - on a field: `#[description = "..."]`, `#[read_only]`, `#[rename = "..."]`
///
/// Anything else, including `#[read_only]` on the type, fails to compile.
/// Every listed field must exist on the struct and be listed once, and each
/// attribute may appear at most once per element. `DOCS` is evaluated where
/// the macro is invoked, so these mistakes are compile errors even for types
/// that are never registered.
///
/// Read-only markers belong to fields only:
///
/// ```compile_fail
/// use route_docs::describe;
///
/// pub struct User {
///     pub id: u64,
/// }
///
/// describe! {
///     #[read_only]
///     User { id }
/// }
///
/// fn main() {}
/// ```
///
/// Unknown attributes are rejected:
///
/// ```compile_fail
/// use route_docs::describe;
///
/// pub struct User {
///     pub id: u64,
/// }
///
/// describe! {
///     User {
///         #[deprecated]
///         id,
///     }
/// }
///
/// fn main() {}
/// ```
///
/// Fields must exist on the struct:
///
/// ```compile_fail
/// use route_docs::describe;
///
/// pub struct User {
///     pub id: u64,
/// }
///
/// describe! { User { id, password } }
///
/// fn main() {}
/// ```
///
/// A type has at most one description:
///
/// ```compile_fail
/// use route_docs::describe;
///
/// pub struct User {
///     pub email: String,
/// }
///
/// describe! {
///     #[description = "first"]
///     #[description = "second"]
///     User { email }
/// }
///
/// fn main() {}
/// ```
///
/// So does a field:
///
/// ```compile_fail
/// use route_docs::describe;
///
/// pub struct User {
///     pub email: String,
/// }
///
/// describe! {
///     User {
///         #[description = "User email"]
///         #[description = "Overwritten"]
///         email,
///     }
/// }
///
/// fn main() {}
/// ```
///
/// A field is marked read-only once:
///
/// ```compile_fail
/// use route_docs::describe;
///
/// pub struct User {
///     pub id: u64,
/// }
///
/// describe! {
///     User {
///         #[read_only]
///         #[read_only]
///         id,
///     }
/// }
///
/// fn main() {}
/// ```
///
/// And renamed once:
///
/// ```compile_fail
/// use route_docs::describe;
///
/// pub struct User {
///     pub display_name: String,
/// }
///
/// describe! {
///     User {
///         #[rename = "displayName"]
///         #[rename = "name"]
///         display_name,
///     }
/// }
///
/// fn main() {}
/// ```
///
/// A field is listed once, also when renamed onto another field's name:
///
/// ```compile_fail
/// use route_docs::describe;
///
/// pub struct User {
///     pub email: String,
///     pub contact: String,
/// }
///
/// describe! { User { email, email } }
///
/// fn main() {}
/// ```
///
/// ```compile_fail
/// use route_docs::describe;
///
/// pub struct User {
///     pub email: String,
///     pub contact: String,
/// }
///
/// describe! {
///     User {
///         email,
///         #[rename = "email"]
///         contact,
///     }
/// }
///
/// fn main() {}
/// ```
///
/// The well-formed counterpart of the cases above compiles:
///
/// ```
/// use route_docs::{Documented, describe};
///
/// pub struct User {
///     pub id: u64,
///     pub email: String,
///     pub display_name: String,
/// }
///
/// describe! {
///     #[description = "A registered user"]
///     User {
///         #[read_only]
///         id,
///         #[description = "User email"]
///         email,
///         #[rename = "displayName"]
///         display_name,
///     }
/// }
///
/// fn main() {
///     assert_eq!(User::field_description("email"), Some("User email"));
///     assert!(User::is_read_only("id"));
///     assert!(User::DOCS.field("displayName").is_some());
/// }
/// ```
#[macro_export]
macro_rules! describe {
    (@type $meta:expr ;) => { $meta };
    (@type $meta:expr ; [description = $text:expr] $($rest:tt)*) => {
        $crate::describe!(@type $meta.description($text) ; $($rest)*)
    };

    // `{renamed}` records that a rename was already applied.
    (@field {$($renamed:ident)?} $meta:expr ;) => { $meta };
    (@field {$($renamed:ident)?} $meta:expr ; [description = $text:expr] $($rest:tt)*) => {
        $crate::describe!(@field {$($renamed)?} $meta.description($text) ; $($rest)*)
    };
    (@field {$($renamed:ident)?} $meta:expr ; [read_only] $($rest:tt)*) => {
        $crate::describe!(@field {$($renamed)?} $meta.read_only() ; $($rest)*)
    };
    (@field {} $meta:expr ; [rename = $name:expr] $($rest:tt)*) => {
        $crate::describe!(@field {renamed} $crate::FieldMeta { name: $name, ..$meta } ; $($rest)*)
    };
    (@field {renamed} $meta:expr ; [rename = $name:expr] $($rest:tt)*) => {
        ::core::compile_error!("field is already renamed")
    };

    (
        $(#[$($ty_attr:tt)+])*
        $ty:ident {
            $(
                $(#[$($field_attr:tt)+])*
                $field:ident
            ),* $(,)?
        }
    ) => {
        impl $crate::Documented for $ty {
            const DOCS: $crate::TypeMeta = {
                const FIELDS: &[$crate::FieldMeta] = &[
                    $(
                        $crate::describe!(@field {}
                            $crate::FieldMeta::new(::core::stringify!($field)) ;
                            $([$($field_attr)+])*
                        ),
                    )*
                ];
                $crate::describe!(@type
                    $crate::TypeMeta::new(::core::stringify!($ty)).fields(FIELDS) ;
                    $([$($ty_attr)+])*
                )
            };
        }

        const _: () = {
            #[allow(dead_code)]
            fn assert_fields_exist(value: &$ty) {
                let _ = value;
                $( let _ = &value.$field; )*
            }
        };

        const _: $crate::TypeMeta = <$ty as $crate::Documented>::DOCS;
    };
}
