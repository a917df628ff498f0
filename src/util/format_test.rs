use super::*;

#[test]
fn format_points_passes_small_numbers_through() {
    assert_eq!(format_points(0), "0");
    assert_eq!(format_points(7), "7");
    assert_eq!(format_points(999), "999");
}

#[test]
fn format_points_groups_thousands() {
    assert_eq!(format_points(1_000), "1,000");
    assert_eq!(format_points(2_450), "2,450");
    assert_eq!(format_points(1_234_567), "1,234,567");
}

#[test]
fn format_points_handles_negative_totals() {
    assert_eq!(format_points(-1_500), "-1,500");
    assert_eq!(format_points(-12), "-12");
}
