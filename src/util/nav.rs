//! Browser-level navigation.
//!
//! Wraps `window.location` so pages can trigger a full page load instead of
//! a client-side route transition. Requires a browser environment; outside
//! one (SSR, native tests) the calls are no-ops.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Navigate by assigning the browser location to `path`.
///
/// Unlike a router transition this reloads the whole page, discarding all
/// in-memory application state. The location is only written, never read,
/// and failures from the browser call are ignored.
pub fn assign(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().assign(path);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}
