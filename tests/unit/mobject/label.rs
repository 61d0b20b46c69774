use super::*;

#[test]
fn coordinates_format_without_negative_zero() {
    assert_eq!(format_coordinate(-0.0001, 2), "0.00");
    assert_eq!(format_coordinate(-0.4, 0), "0");
    assert_eq!(format_coordinate(-3.0, 0), "-3");
    assert_eq!(format_coordinate(1.23456, 2), "1.23");
}

#[test]
fn column_matrix_shape() {
    let m = MatrixLabel::column(&[-3.0, -2.0], 0, Point::ORIGIN);
    assert_eq!(m.rows(), 2);
    assert_eq!(m.cols(), 1);
    assert_eq!(m.entries, vec![vec!["-3".to_string()], vec!["-2".to_string()]]);
}

#[test]
fn text_switches_only_at_the_end() {
    let a = Label::new("a", Point::ORIGIN);
    let b = Label::new("b", Point::new(1.0, 0.0)).with_color(Color::RED);
    assert_eq!(Label::lerp(&a, &b, 0.99).text, "a");
    assert_eq!(Label::lerp(&a, &b, 0.5).center, Point::new(0.5, 0.0));
    assert_eq!(Label::lerp(&a, &b, 1.0), b);
}

#[test]
fn matrix_center_moves_while_entries_hold() {
    let a = MatrixLabel::column(&[1.0, 2.0], 0, Point::ORIGIN);
    let b = MatrixLabel::column(&[3.0, 4.0], 0, Point::new(0.0, 2.0));
    let mid = MatrixLabel::lerp(&a, &b, 0.5);
    assert_eq!(mid.center, Point::new(0.0, 1.0));
    assert_eq!(mid.entries, a.entries);
}
