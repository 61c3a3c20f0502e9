use svgclip::{to_polygon, PolygonConfig, Quality};

#[test]
fn test_quality_affects_density_only() {
    let input = "M 0 50 A 50 50 0 0 1 100 50 A 50 50 0 0 1 0 50 Z";
    let counts: Vec<usize> = Quality::ALL
        .into_iter()
        .map(|q| {
            to_polygon(input, &q.into())
                .unwrap()
                .matches('%')
                .count()
                / 2
        })
        .collect();
    // start point and two arcs; the second arc ends exactly on the start
    // so the close adds nothing
    assert_eq!(counts, vec![1 + 8 + 8, 1 + 16 + 16, 1 + 32 + 32]);
}

#[test]
fn test_quality_straight_lines_unchanged() {
    let input = "M 0 0 L 10 0 L 10 10 Z";
    let low = to_polygon(input, &Quality::Low.into()).unwrap();
    let high = to_polygon(input, &Quality::High.into()).unwrap();
    assert_eq!(low, high);
    assert_eq!(low, to_polygon(input, &PolygonConfig::default()).unwrap());
}
