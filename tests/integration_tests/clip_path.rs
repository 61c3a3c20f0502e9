use svgclip::to_clip_path;

#[test]
fn test_clip_path_passthrough() {
    assert_eq!(
        to_clip_path("M 10 10 L 90 10 L 90 90 L 10 90 Z").unwrap(),
        "clip-path: path('M 10 10 L 90 10 L 90 90 L 10 90 Z');"
    );
}

#[test]
fn test_clip_path_trimmed() {
    assert_eq!(
        to_clip_path("\n   M0,0 h10 v10 z  \t").unwrap(),
        "clip-path: path('M0,0 h10 v10 z');"
    );
}

#[test]
fn test_clip_path_not_parsed() {
    // The passthrough only checks for a command letter; the interpreter
    // would reject both of these.
    assert!(to_clip_path("M 10").is_ok());
    assert!(to_clip_path("C 1 2 3").is_ok());
}

#[test]
fn test_clip_path_rejects() {
    assert!(to_clip_path("").is_err());
    assert!(to_clip_path("   \n").is_err());
    assert!(to_clip_path("10 20 30").is_err());
}

#[test]
fn test_clip_path_escaped() {
    assert_eq!(
        to_clip_path("M 0 0'); background: red; x('").unwrap(),
        r"clip-path: path('M 0 0\'); background: red; x(\'');"
    );
    assert_eq!(
        to_clip_path("M 0 0 L 10 0\n  L 10 10 Z").unwrap(),
        r"clip-path: path('M 0 0 L 10 0\a   L 10 10 Z');"
    );
}
