use super::*;

#[test]
fn formats_epoch_as_short_display_date() {
    // 2025-01-15T00:00:00Z
    assert_eq!(format_epoch_date(1_736_899_200), "Jan 15, 2025");
}

#[test]
fn single_digit_days_are_unpadded() {
    // 2024-07-04T12:00:00Z
    assert_eq!(format_epoch_date(1_720_094_400), "Jul 4, 2024");
}

#[test]
fn out_of_range_timestamps_render_empty() {
    assert_eq!(format_epoch_date(i64::MAX), "");
}
