use vecdraw::element::{Circle, FilledCircle, Line};
use vecdraw::format::{parse_document, parse_line, serialize_shape};
use vecdraw::{Color, Document, DrawError, Point, Shape, ShapeKind};

#[test]
fn test_line_round_trip() {
    let cases = [
        (Point::new(0, 0), Point::new(0, 1)),
        (Point::new(1, 2), Point::new(3, 4)),
        (Point::new(640, 480), Point::new(0, 0)),
        (Point::new(i32::MAX, 7), Point::new(12, i32::MAX)),
    ];
    for (start, end) in cases {
        let line: ShapeKind = Line::new(start, end, Color::new(12, 34, 56)).into();
        let text = serialize_shape(&line);
        assert!(text.ends_with('\n'));
        assert_eq!(parse_line(1, text.trim_end()).unwrap(), line);
    }
}

#[test]
fn test_circle_round_trip_normalizes_edge() {
    let circle: ShapeKind = Circle::new(Point::new(50, 50), Point::new(53, 54), Color::RED).into();
    let parsed = parse_line(1, serialize_shape(&circle).trim_end()).unwrap();
    assert_eq!(parsed.start_point(), Point::new(50, 50));
    assert_eq!(parsed.end_point(), Point::new(50, 55));
    assert_eq!(serialize_shape(&parsed), serialize_shape(&circle));
}

#[test]
fn test_load_single_line() {
    let shapes = parse_document("LINE 1 2 3 4 255 0 0\n").unwrap();
    assert_eq!(shapes.len(), 1);
    let line = shapes[0];
    assert_eq!(line.start_point(), Point::new(1, 2));
    assert_eq!(line.end_point(), Point::new(3, 4));
    assert_eq!(line.fg_color(), Color::new(255, 0, 0));
}

#[test]
fn test_load_line_missing_color_fails() {
    assert!(matches!(
        parse_document("LINE 1 2 3 4\n"),
        Err(DrawError::Format { line: 1, .. })
    ));
}

#[test]
fn test_mixed_document() {
    let text = "LINE 0 0 10 0 0 0 0\nCIRCLE 5 5 3 0 0 255\nFCIRCLE 20 20 4 255 0 0 0 255 0\n";
    let shapes = parse_document(text).unwrap();
    assert_eq!(
        shapes,
        vec![
            Line::new(Point::new(0, 0), Point::new(10, 0), Color::BLACK).into(),
            Circle::new(Point::new(5, 5), Point::new(5, 8), Color::BLUE).into(),
            FilledCircle::new(Point::new(20, 20), Point::new(20, 24), Color::RED, Color::new(0, 255, 0)).into(),
        ]
    );

    let rewritten: String = shapes.iter().map(serialize_shape).collect();
    assert_eq!(rewritten, text);
}

#[test]
fn test_format_error_is_user_facing() {
    let err = parse_document("LINE 0 0 1 1 0 0 0\nHEXAGON 1 2 3\n").unwrap_err();
    assert!(err.is_user_facing());
    assert!(err.to_string().starts_with("Line 2:"));
}

#[test]
fn test_circles_at_the_coordinate_limits_measure_without_overflow() {
    let shapes = parse_document("CIRCLE 0 0 1500000000 0 0 0\nCIRCLE 2147483647 0 1 0 0 0\n").unwrap();
    let document = Document::new();
    for kind in shapes {
        document.add(Shape::new(kind)).unwrap();
    }

    let bounds = document.bounding_box().unwrap();
    assert_eq!((bounds.x, bounds.y), (-1_500_000_000, -1_500_000_000));
    assert_eq!(bounds.right(), i64::from(i32::MAX) + 1);
    assert_eq!(bounds.bottom(), 1_500_000_000);
}
