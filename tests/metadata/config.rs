//! Configuration layering as seen by a host tool.

use std::io::Write;

use route_docs::Loader;

#[test]
fn file_then_env_then_overrides() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[schema]
overwrite_descriptions = false
emit_read_only = false
"#
    )
    .unwrap();

    // SAFETY: Test code, variable is unique to this test
    unsafe {
        std::env::set_var("SUITECFG_OVERWRITE_DESCRIPTIONS", "yes");
    }

    let loader = Loader::new("SUITECFG");
    let from_env = loader.load(Some(file.path()), None, None).unwrap();
    let overridden = loader.load(Some(file.path()), Some(false), None).unwrap();

    // SAFETY: Test code, variable is unique to this test
    unsafe {
        std::env::remove_var("SUITECFG_OVERWRITE_DESCRIPTIONS");
    }

    assert!(from_env.schema.overwrite_descriptions);
    assert!(!from_env.schema.emit_read_only);
    assert!(!overridden.schema.overwrite_descriptions);
}

#[test]
fn default_loader_uses_route_docs_prefix() {
    assert_eq!(Loader::default().env_prefix, "ROUTE_DOCS");
}
