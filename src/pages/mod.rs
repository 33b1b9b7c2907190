//! Page components, one per routed view.

pub mod home;
pub mod music_sheet;
