use std::cell::RefCell;
use std::rc::Rc;

use vecdraw::element::factory;
use vecdraw::event::DocumentEvent;
use vecdraw::{Color, Document, DrawError, Point, ShapeEditor};

#[test]
fn test_circle_edit_notifies_document_once_at_current_index() {
    let document = Document::new();
    document
        .add(factory::create_line(Point::new(0, 0), Point::new(9, 9), Color::RED))
        .unwrap();
    let circle = factory::create_circle(Point::new(10, 10), Point::new(10, 20), Color::RED);
    document.add(Rc::clone(&circle)).unwrap();

    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    document.subscribe(move |event: &DocumentEvent| sink.borrow_mut().push(*event));

    let mut editor = circle.create_editor();
    editor.set_field("radius", "0").unwrap();
    assert!(matches!(editor.validate(), Err(DrawError::Validation(_))));

    editor.set_field("center x", "3").unwrap();
    editor.set_field("center y", "3").unwrap();
    editor.set_field("radius", "5").unwrap();
    editor.validate().unwrap();
    editor.commit().unwrap();

    assert_eq!(circle.kind().end_point(), Point::new(3, 8));
    assert_eq!(*events.borrow(), vec![DocumentEvent::Changed { first: 1, last: 1 }]);
    assert_eq!(document.serialize().lines().nth(1), Some("CIRCLE 3 3 5 255 0 0"));
}

#[test]
fn test_validation_errors_are_user_facing() {
    let line = factory::create_line(Point::new(0, 0), Point::new(9, 9), Color::RED);
    let mut editor = line.create_editor();

    for (field, value) in [("start x", "-1"), ("end y", "ten"), ("color", "#12")] {
        editor.set_field(field, value).unwrap();
        let err = editor.validate().unwrap_err();
        assert!(err.is_user_facing(), "{field}: {err}");
        // Restore a valid value before probing the next field
        let valid = match field {
            "color" => "#FF0000",
            _ => "1",
        };
        editor.set_field(field, valid).unwrap();
    }
    editor.validate().unwrap();
}

#[test]
fn test_commit_without_validation_leaves_shape_alone() {
    let filled = factory::create_filled_circle(Point::new(5, 5), Point::new(5, 9), Color::RED, Color::BLUE);
    let before = filled.kind();
    let mut editor = filled.create_editor();
    editor.set_field("fill", "blue").unwrap();

    let err = editor.commit().unwrap_err();
    assert!(matches!(err, DrawError::Precondition(_)));
    assert_eq!(filled.kind(), before);
}

#[test]
fn test_short_hex_color_expands() {
    let line = factory::create_line(Point::new(0, 0), Point::new(9, 9), Color::RED);
    let mut editor = line.create_editor();
    editor.set_field("color", "#0af").unwrap();
    editor.validate().unwrap();
    editor.commit().unwrap();
    assert_eq!(line.kind().fg_color(), Color::new(0x00, 0xaa, 0xff));
}
