//! CLI commands for graphwalk

pub mod dispatch;
pub mod find;
pub mod format;
pub mod interactive;
pub mod show;
