//! CLI commands for graphkit

pub mod build;
pub mod dispatch;
pub mod render;
pub mod script;
