use svgclip::document::path_data;
use svgclip::to_polygon_default;

#[test]
fn test_document_paths() {
    let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100">
  <defs>
    <clipPath id="c"><path d="M 0 0 H 100 V 100 Z"/></clipPath>
  </defs>
  <path id="outline" d="M10 10 L 90 10 L 50 90 Z" fill="none"></path>
</svg>"##;
    let paths = path_data(svg).unwrap();
    assert_eq!(paths, vec!["M 0 0 H 100 V 100 Z", "M10 10 L 90 10 L 50 90 Z"]);
    assert_eq!(
        to_polygon_default(&paths[1]).unwrap(),
        "clip-path: polygon(0% 0%, 100% 0%, 50% 100%, 0% 0%);"
    );
}

#[test]
fn test_document_entities() {
    let svg = r#"<svg><path d="M0&#x20;0 L1 1"/></svg>"#;
    assert_eq!(path_data(svg).unwrap(), vec!["M0 0 L1 1"]);
}
