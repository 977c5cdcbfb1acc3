use super::*;

#[test]
fn test_format_fill() {
    assert_eq!(format_fill(80.0), "80%");
    assert_eq!(format_fill(120.0), "120%");
    assert_eq!(format_fill(200.0 / 3.0), "66.7%");
    assert_eq!(format_fill(0.0), "0%");
}

#[test]
fn test_filled_cells() {
    assert_eq!(filled_cells(100.0, 20), 20);
    assert_eq!(filled_cells(75.0, 20), 15);
    assert_eq!(filled_cells(120.0, 20), 24);
    assert_eq!(filled_cells(-50.0, 20), 0);
    assert_eq!(filled_cells(0.0, 20), 0);
}
