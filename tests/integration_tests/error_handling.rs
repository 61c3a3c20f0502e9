// Error reporting for malformed path data.

use assertables::{assert_contains, assert_starts_with};
use svgclip::{to_polygon_default, Error};

fn polygon_error(input: &str) -> String {
    to_polygon_default(input)
        .expect_err("conversion should fail")
        .to_string()
}

#[test]
fn test_error_unexpected_char() {
    assert_eq!(
        polygon_error("M 10 X 20"),
        "Tokenize error: unexpected character 'X' at index 5"
    );
}

#[test]
fn test_error_malformed_number() {
    assert_eq!(
        polygon_error("M 1e 2"),
        "Tokenize error: malformed number '1e' at index 2"
    );
    assert_contains!(polygon_error("M 10 -"), "malformed number '-'");
}

#[test]
fn test_error_missing_operand() {
    let err = polygon_error("M 0 0 C 1 2 3 L 4 5");
    assert_starts_with!(err, "Interpret error: ");
    assert_contains!(err, "command 'C' is missing operand 'y2' (4 of 6)");
    assert_contains!(err, "found command 'L'");

    assert_contains!(polygon_error("M 0 0 L 5"), "end of path data");
    // implicit repeats report the command that was written
    assert_contains!(polygon_error("M 0 0 1"), "command 'M' is missing operand 'y'");
}

#[test]
fn test_error_expected_command() {
    assert_contains!(polygon_error("10 10 L 20 20"), "expected a command");
    assert_contains!(polygon_error("M 0 0 L 5 5 Z 1 1"), "expected a command");
}

#[test]
fn test_error_empty() {
    assert!(matches!(to_polygon_default(""), Err(Error::Interpret(_))));
    assert!(matches!(to_polygon_default(" , "), Err(Error::Interpret(_))));
}

#[test]
fn test_error_is_first_failure() {
    // tokenizing fails before the missing operand is noticed
    assert_contains!(polygon_error("M 0 0 C 1 2 3 ?"), "Tokenize error");
}
