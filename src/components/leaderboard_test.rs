use super::*;

#[test]
fn seed_entries_are_ranked_from_one() {
    let entries = seed_entries();
    assert_eq!(entries.len(), 5);
    assert_eq!(entries[0].rank, 1);
    assert_eq!(entries[4].rank, 5);
}

#[test]
fn seed_entries_are_sorted_by_points_descending() {
    let entries = seed_entries();
    for pair in entries.windows(2) {
        assert!(pair[0].points >= pair[1].points);
    }
}

#[test]
fn row_class_highlights_the_podium() {
    assert_eq!(row_class(1), "leaderboard__row leaderboard__row--top-1");
    assert_eq!(row_class(3), "leaderboard__row leaderboard__row--top-3");
}

#[test]
fn row_class_leaves_the_rest_plain() {
    assert_eq!(row_class(4), "leaderboard__row");
    assert_eq!(row_class(42), "leaderboard__row");
}
