// pluck/src/commands/mod.rs
//! Command implementations for the pluck CLI.

pub mod extract;
pub mod patterns;
pub mod sample;
