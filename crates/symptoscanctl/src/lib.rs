//! SymptoScan control CLI library - exposes modules for testing.

pub mod cards;
pub mod check;
pub mod client;
pub mod logging;
