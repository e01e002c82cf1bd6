//! Read-only marker lookups.

use route_docs::{Documented, Element};

use super::fixtures::{Account, Plain, registry};

#[test]
fn marked_fields_are_read_only() {
    let registry = registry();
    assert!(registry.is_read_only(&Element::field("Account", "id")));
    assert!(registry.is_read_only(&Element::field("Account", "createdAt")));
    assert!(Account::is_read_only("id"));
}

#[test]
fn unmarked_fields_are_writable() {
    let registry = registry();
    for meta in registry.types() {
        for field in meta.fields.iter().filter(|f| !f.read_only) {
            assert!(
                !registry.is_read_only(&Element::field(meta.name, field.name)),
                "{}.{} should not be read-only",
                meta.name,
                field.name
            );
        }
    }
    assert!(!Plain::is_read_only("value"));
    assert!(!Account::is_read_only("email"));
}

#[test]
fn types_and_unknown_fields_are_not_read_only() {
    let registry = registry();
    assert!(!registry.is_read_only(&Element::of::<Account>()));
    assert!(!registry.is_read_only(&Element::field("Account", "password")));
    assert!(!registry.is_read_only(&Element::field("Invoice", "id")));
}
