// pluck/src/ui/mod.rs
//! User-facing output rendering for the pluck CLI.

pub mod output;
