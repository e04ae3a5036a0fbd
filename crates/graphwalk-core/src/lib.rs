//! Graphwalk Core Library
//!
//! Traversal engine and file collaborators for the graphwalk CLI.

pub mod config;
pub mod error;
pub mod graph;
pub mod loader;
pub mod logging;
pub mod render;
