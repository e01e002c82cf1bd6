//! Description lookups through the registry and the `Documented` trait.

use route_docs::{Documented, Element, Error, Registry, describe};

use super::fixtures::{Account, Owner, Plain, registry};

#[test]
fn field_description_is_returned_verbatim() {
    let registry = registry();
    assert_eq!(
        registry.description(&Element::field("Account", "email")),
        Some("User email")
    );
    assert_eq!(Account::field_description("email"), Some("User email"));
}

#[test]
fn type_description_is_returned() {
    let registry = registry();
    assert_eq!(
        registry.description(&Element::of::<Account>()),
        Some("A customer account")
    );
    assert_eq!(Owner::type_description(), Some("Account owner"));
}

#[test]
fn undescribed_elements_are_absent() {
    let registry = registry();
    for element in [
        Element::of::<Plain>(),
        Element::field_of::<Plain>("value"),
        Element::field_of::<Account>("nickname"),
        Element::field_of::<Account>("owner"),
    ] {
        assert!(
            registry.description(&element).is_none(),
            "{element} should have no description"
        );
    }
}

#[test]
fn unknown_elements_are_absent() {
    let registry = registry();
    assert!(registry.description(&Element::ty("Invoice")).is_none());
    assert!(registry.description(&Element::field("Invoice", "total")).is_none());
    assert!(registry.description(&Element::field("Account", "password")).is_none());
}

#[test]
fn renamed_field_is_keyed_by_serialized_name() {
    let meta = Account::DOCS.field("createdAt").unwrap();
    assert!(meta.read_only);
    assert!(Account::DOCS.field("created_at").is_none());
}

#[test]
fn conflicting_type_name_is_rejected() {
    mod v2 {
        #[allow(dead_code)]
        pub struct Account {
            pub uuid: String,
        }

        route_docs::describe! {
            #[description = "Second account model"]
            Account { uuid }
        }
    }

    let mut registry = Registry::new();
    registry.register::<Account>().unwrap();
    let result = registry.register::<v2::Account>();
    assert!(matches!(result, Err(Error::Conflict { name: "Account", .. })));
    assert_eq!(
        registry.description(&Element::ty("Account")),
        Some("A customer account")
    );
}

#[test]
fn types_lists_every_registration() {
    #[allow(dead_code)]
    struct Tag {
        label: String,
    }

    describe! { Tag { label } }

    let mut registry = registry();
    registry.register::<Tag>().unwrap();

    let names: Vec<_> = registry.types().map(|t| t.name).collect();
    assert_eq!(names, vec!["Account", "Owner", "Plain", "Tag"]);
}
