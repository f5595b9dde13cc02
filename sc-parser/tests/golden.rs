use assert_json_diff::assert_json_eq;
use assert_matches::assert_matches;
use sc_parser::{as_dict, parse, parse_file, CompileError};
use serde_json::Value;
use std::{fs, path::PathBuf};

fn fixture(file_name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(file_name)
}

fn assert_matches_fixture(name: &str) {
    let res = parse_file(fixture(&format!("{name}.sc")));
    assert!(res.errors.is_empty(), "{name}.sc failed: {:?}", res.errors);
    let program = res.value.expect("no errors were reported");

    let expected = fs::read_to_string(fixture(&format!("{name}.json"))).unwrap();
    let expected: Value = serde_json::from_str(&expected).unwrap();
    assert_json_eq!(as_dict(&program), expected);
}

#[test]
fn types() {
    assert_matches_fixture("types");
}

#[test]
fn functions() {
    assert_matches_fixture("functions");
}

#[test]
fn serialized_program_matches_projection() {
    let program = parse_file(fixture("functions.sc")).value.unwrap();
    let serialized: Value = serde_json::from_str(&serde_json::to_string(&program).unwrap()).unwrap();
    assert_json_eq!(serialized, as_dict(&program));
}

#[test]
fn unsupported_forms_are_all_reported() {
    let res = parse_file(fixture("unsupported.sc"));
    assert!(res.value.is_none());
    let reported = res
        .errors
        .iter()
        .map(|e| match e {
            CompileError::UnsupportedConstruct { rule, span } => (rule.as_str(), span.line),
            other => panic!("unexpected error {other}"),
        })
        .collect::<Vec<_>>();
    assert_eq!(reported, [("let_initialized", 2), ("let_initialized", 3)]);
}

#[test]
fn syntax_error_location() {
    let res = parse("let x ;");
    assert_matches!(
        res.errors.as_slice(),
        [e @ CompileError::SyntaxError { .. }] if e.line_col() == (1, 7)
    );
    assert!(res.value.is_none());
}

#[test]
fn syntax_errors_inside_signatures() {
    for (source, line_col) in [
        ("let f = fn(a: u8 b: u8) -> u8;", (1, 18)),
        ("let g: fn(u8 u8) -> u8;", (1, 14)),
        ("let g: fn(u8) u8;", (1, 15)),
    ] {
        let res = parse(source);
        assert!(res.value.is_none(), "{source}");
        assert_matches!(
            res.errors.as_slice(),
            [e @ CompileError::SyntaxError { .. }] if e.line_col() == line_col,
            "{source}"
        );
    }
}

#[test]
fn unreadable_source() {
    let res = parse_file(fixture("missing.sc"));
    assert!(res.value.is_none());
    assert_matches!(res.errors.as_slice(), [CompileError::Io { .. }]);
}
