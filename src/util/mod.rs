//! Small browser-environment helpers.

pub mod nav;
