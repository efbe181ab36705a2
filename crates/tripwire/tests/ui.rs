#![cfg(not(feature = "disable-checks"))]

#[test]
fn macro_surface() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/forms.rs");
    t.pass("tests/ui/module_handlers.rs");
}
