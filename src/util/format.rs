//! Formatting helpers for gamified stats.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format a point total with `,` thousands separators.
pub fn format_points(points: i64) -> String {
    let raw = points.unsigned_abs().to_string();
    let mut reversed = String::with_capacity(raw.len() + raw.len() / 3 + 1);
    for (i, digit) in raw.chars().rev().enumerate() {
        if i != 0 && i % 3 == 0 {
            reversed.push(',');
        }
        reversed.push(digit);
    }
    if points < 0 {
        reversed.push('-');
    }
    reversed.chars().rev().collect()
}
