use super::*;

#[test]
fn home_is_root() {
    assert_eq!(HOME, "/");
}

#[test]
fn music_sheet_path_matches_its_segment() {
    assert_eq!(MUSIC_SHEET, format!("/{MUSIC_SHEET_SEGMENT}"));
}

#[test]
fn paths_are_absolute_and_distinct() {
    assert!(HOME.starts_with('/'));
    assert!(MUSIC_SHEET.starts_with('/'));
    assert_ne!(HOME, MUSIC_SHEET);
}
