use std::cell::RefCell;
use std::rc::Rc;

use vecdraw::document::{SHIFT_DOWN, SHIFT_UP};
use vecdraw::element::factory;
use vecdraw::event::DocumentEvent;
use vecdraw::{Color, Document, DrawError, Point, ShapeRef};

fn sample_shapes() -> Vec<ShapeRef> {
    vec![
        factory::create_line(Point::new(0, 0), Point::new(10, 0), Color::RED),
        factory::create_circle(Point::new(5, 5), Point::new(5, 8), Color::BLUE),
        factory::create_filled_circle(Point::new(20, 20), Point::new(20, 25), Color::RED, Color::BLUE),
        factory::create_line(Point::new(3, 3), Point::new(7, 9), Color::BLACK),
    ]
}

fn filled_document() -> (Document, Vec<ShapeRef>) {
    let document = Document::new();
    let shapes = sample_shapes();
    for shape in &shapes {
        document.add(Rc::clone(shape)).unwrap();
    }
    (document, shapes)
}

fn record(document: &Document) -> Rc<RefCell<Vec<DocumentEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    document.subscribe(move |event: &DocumentEvent| sink.borrow_mut().push(*event));
    events
}

#[test]
fn test_add_grows_by_one_and_last_is_added() {
    let document = Document::new();
    for shape in sample_shapes() {
        let before = document.len();
        document.add(Rc::clone(&shape)).unwrap();
        assert_eq!(document.len(), before + 1);
        assert!(Rc::ptr_eq(&document.get(document.len() - 1).unwrap(), &shape));
    }
}

#[test]
fn test_change_order_up_then_down_restores_order() {
    let (document, shapes) = filled_document();
    let before = document.serialize();

    for interior in &shapes[1..3] {
        document.change_order(interior, SHIFT_UP).unwrap();
        assert_ne!(document.serialize(), before);
        document.change_order(interior, SHIFT_DOWN).unwrap();
        assert_eq!(document.serialize(), before);
    }
}

#[test]
fn test_change_order_at_extremum_is_noop() {
    let (document, shapes) = filled_document();
    let events = record(&document);
    let before = document.serialize();

    document.change_order(&shapes[0], SHIFT_DOWN).unwrap();
    document.change_order(&shapes[3], SHIFT_UP).unwrap();

    assert_eq!(document.serialize(), before);
    assert!(events.borrow().is_empty());
}

#[test]
fn test_remove_then_add_identical_shape() {
    let (document, shapes) = filled_document();
    let before = document.serialize();
    let last = &shapes[3];

    document.remove(last).unwrap();
    assert_eq!(last.listener_count(), 0);

    let replacement = factory::create_line(Point::new(3, 3), Point::new(7, 9), Color::BLACK);
    document.add(Rc::clone(&replacement)).unwrap();
    assert_eq!(document.serialize(), before);
    assert_eq!(replacement.listener_count(), 1);

    // Only the new instance reaches the document
    let events = record(&document);
    last.notify_attribute_changed();
    assert!(events.borrow().is_empty());
    replacement.notify_attribute_changed();
    assert_eq!(*events.borrow(), vec![DocumentEvent::Changed { first: 3, last: 3 }]);
}

#[test]
fn test_event_ranges() {
    let document = Document::new();
    let events = record(&document);
    let shapes = sample_shapes();

    document.add(Rc::clone(&shapes[0])).unwrap();
    document.add(Rc::clone(&shapes[1])).unwrap();
    document.change_order(&shapes[0], SHIFT_UP).unwrap();
    document.remove(&shapes[0]).unwrap();

    assert_eq!(
        *events.borrow(),
        vec![
            DocumentEvent::Added { first: 0, last: 0 },
            DocumentEvent::Added { first: 1, last: 1 },
            DocumentEvent::Changed { first: 0, last: 1 },
            DocumentEvent::Removed { first: 1, last: 1 },
        ]
    );
}

#[test]
fn test_caller_bugs_are_not_user_facing() {
    let (document, shapes) = filled_document();

    let bounds = document.get(10).unwrap_err();
    assert!(matches!(bounds, DrawError::Bounds { index: 10, len: 4 }));
    assert!(!bounds.is_user_facing());

    let offset = document.change_order(&shapes[1], 2).unwrap_err();
    assert!(!offset.is_user_facing());

    let stranger = factory::create_line(Point::new(0, 0), Point::new(1, 1), Color::RED);
    assert!(matches!(document.remove(&stranger), Err(DrawError::Precondition(_))));
    assert_eq!(document.len(), 4);
}

#[test]
fn test_listener_may_read_document_during_notification() {
    let (document, shapes) = filled_document();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let handle = document.clone();
    document.subscribe(move |event: &DocumentEvent| {
        let (first, _) = event.range();
        sink.borrow_mut().push(handle.get(first).map(|shape| shape.to_string()).ok());
    });

    shapes[2].notify_attribute_changed();
    document.remove(&shapes[1]).unwrap();

    assert_eq!(
        *seen.borrow(),
        vec![
            Some("Filled circle (20,20), 5, #0000FF".to_string()),
            Some("Circle (5,5), 3".to_string()),
        ]
    );
}

#[test]
fn test_bounding_box_of_line_and_circle() {
    let document = Document::new();
    document
        .add(factory::create_line(Point::new(0, 0), Point::new(10, 0), Color::RED))
        .unwrap();
    document
        .add(factory::create_circle(Point::new(5, 5), Point::new(5, 8), Color::RED))
        .unwrap();

    let bounds = document.bounding_box().unwrap();
    assert_eq!((bounds.x, bounds.right()), (0, 10));
    assert_eq!((bounds.y, bounds.bottom()), (0, 8));
}
