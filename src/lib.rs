// Library module for osu-sweep
// Re-exports modules for use in integration tests and the binary

pub mod app;
pub mod cli;
pub mod events;
pub mod logging;
pub mod sweep;
pub mod ui;
