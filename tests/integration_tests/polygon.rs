use svgclip::{flatten_path, to_polygon, to_polygon_default, Point, PolygonConfig, Quality};

fn percentages(output: &str) -> Vec<(f64, f64)> {
    let list = output
        .strip_prefix("clip-path: polygon(")
        .and_then(|s| s.strip_suffix(");"))
        .expect("polygon declaration");
    list.split(", ")
        .map(|pair| {
            let (x, y) = pair.split_once(' ').expect("x y pair");
            (
                x.trim_end_matches('%').parse().expect("x value"),
                y.trim_end_matches('%').parse().expect("y value"),
            )
        })
        .collect()
}

#[test]
fn test_polygon_square() {
    assert_eq!(
        to_polygon_default("M 10 10 L 90 10 L 90 90 L 10 90 Z").unwrap(),
        "clip-path: polygon(0% 0%, 100% 0%, 100% 100%, 0% 100%, 0% 0%);"
    );
}

#[test]
fn test_polygon_relative_commands() {
    assert_eq!(
        to_polygon_default("m 10 10 h 80 v 80 h -80 z").unwrap(),
        "clip-path: polygon(0% 0%, 100% 0%, 100% 100%, 0% 100%, 0% 0%);"
    );
}

#[test]
fn test_polygon_quadratic_low() {
    assert_eq!(
        to_polygon("M0 0 Q 50 100 100 0 Z", &Quality::Low.into()).unwrap(),
        "clip-path: polygon(0% 0%, 25% 75%, 50% 100%, 75% 75%, 100% 0%, 0% 0%);"
    );
}

#[test]
fn test_polygon_insufficient_points() {
    let err = to_polygon_default("M10,10Z").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Polygon error: insufficient points (found 1, need at least 3)"
    );
    assert!(to_polygon_default("M0 0 L 10 10").is_err());
}

#[test]
fn test_polygon_bounds() {
    for input in [
        "M 0 0 C 10 -20 40 -20 50 0 S 90 20 100 0 Z",
        "M 5 5 A 20 10 30 1 1 40 30 L 5 30 Z",
        "M 3 3 q 10 20 20 0 t 20 0 t 20 0 v 30 H 3 z",
        "M 0 0 L 100 0 M 50 50 L 50 100",
    ] {
        let points = percentages(&to_polygon_default(input).unwrap());
        assert!(points.len() >= 3);
        for (x, y) in &points {
            assert!((0.0..=100.0).contains(x), "{input}: x {x} out of range");
            assert!((0.0..=100.0).contains(y), "{input}: y {y} out of range");
        }
        // The bounding box is normalized to the full range on both axes
        let min_x = points.iter().map(|p| p.0).fold(f64::MAX, f64::min);
        let max_x = points.iter().map(|p| p.0).fold(f64::MIN, f64::max);
        let min_y = points.iter().map(|p| p.1).fold(f64::MAX, f64::min);
        let max_y = points.iter().map(|p| p.1).fold(f64::MIN, f64::max);
        assert_eq!((min_x, max_x, min_y, max_y), (0., 100., 0., 100.));
    }
}

#[test]
fn test_polygon_zero_extent() {
    assert_eq!(
        to_polygon_default("M 0 5 H 10 H 20").unwrap(),
        "clip-path: polygon(0% 50%, 50% 50%, 100% 50%);"
    );
}

#[test]
fn test_flatten_quality_scaling() {
    let input = "M0 0 C 0 40 40 40 40 0";
    let low = flatten_path(input, &Quality::Low.into()).unwrap();
    let high = flatten_path(input, &Quality::High.into()).unwrap();
    assert_eq!(low.len(), 5);
    assert_eq!(high.len(), 17);
    assert_eq!(low.first(), high.first());
    assert_eq!(low.last(), Some(&Point::new(40., 0.)));
    assert_eq!(low.last(), high.last());
}

#[test]
fn test_flatten_arc() {
    let config = PolygonConfig {
        curve_segments: 8,
        arc_segments: 12,
    };
    let points = flatten_path("M 0 0 A 10 10 0 0 1 20 0", &config).unwrap();
    assert_eq!(points.len(), 13);
    assert_eq!(points.last(), Some(&Point::new(20., 0.)));

    // Zero radius degrades to a line
    let points = flatten_path("M 0 0 A 0 10 0 0 1 20 0", &config).unwrap();
    assert_eq!(points, vec![Point::new(0., 0.), Point::new(20., 0.)]);
}

#[test]
fn test_flatten_custom_segments() {
    let config = PolygonConfig {
        curve_segments: 3,
        arc_segments: 5,
    };
    let points = flatten_path("M 0 0 Q 5 10 10 0 T 20 0", &config).unwrap();
    assert_eq!(points.len(), 7);
}

#[test]
fn test_flatten_invalid_config() {
    let config = PolygonConfig {
        curve_segments: 0,
        arc_segments: 5,
    };
    assert!(flatten_path("M 0 0 L 1 1", &config).is_err());
}

#[test]
fn test_polygon_out_of_range_numbers() {
    let err = to_polygon_default("M 0 0 L 1e400 0 L 0 10 Z").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Tokenize error: malformed number '1e400' at index 8"
    );
    assert!(to_polygon_default("M 0 0 A 1e400 5 0 0 1 10 10").is_err());

    // each coordinate is finite, but the extent is not
    let err = to_polygon_default("M -1e308 0 L 1e308 0 L 0 10 Z").unwrap_err();
    assert!(err.to_string().starts_with("Geometry error: "));
}

#[test]
fn test_polygon_closed_arc_skipped() {
    assert_eq!(
        to_polygon_default("M 0 0 A 3 3 0 0 1 0 0 L 10 0 L 10 10 Z").unwrap(),
        "clip-path: polygon(0% 0%, 100% 0%, 100% 100%, 0% 0%);"
    );
}

#[test]
fn test_polygon_segment_limit() {
    let config = PolygonConfig {
        curve_segments: u32::MAX,
        arc_segments: 16,
    };
    assert!(to_polygon("M0 0 C 0 40 40 40 40 0 Z", &config).is_err());
    let config = PolygonConfig {
        curve_segments: svgclip::MAX_SEGMENTS,
        arc_segments: 16,
    };
    let points = flatten_path("M0 0 C 0 40 40 40 40 0", &config).unwrap();
    assert_eq!(points.len(), 1025);
}
