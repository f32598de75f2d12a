//! Compile-and-run conformance cases for `mock!`.

#[test]
fn trybuild_pass() {
    let t = trybuild::TestCases::new();
    t.pass("tests/trybuild/mock_basic.rs");
    t.pass("tests/trybuild/mock_associated_type.rs");
    t.pass("tests/trybuild/mock_empty.rs");
}
