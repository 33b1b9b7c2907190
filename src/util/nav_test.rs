use super::*;

#[test]
fn assign_outside_browser_is_noop() {
    assign(crate::routes::HOME);
}

#[test]
fn assign_accepts_nested_paths() {
    assign(crate::routes::MUSIC_SHEET);
}
