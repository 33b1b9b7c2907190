//! Route paths shared by the router table and navigation controls.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Application home route.
pub const HOME: &str = "/";

/// Path segment under which the music sheet page is mounted.
pub const MUSIC_SHEET_SEGMENT: &str = "musicSheet";

/// Full path of the music sheet page.
pub const MUSIC_SHEET: &str = "/musicSheet";
