// pluck/src/lib.rs
//! # Pluck CLI Application
//!
//! This crate provides the command-line interface for the pluck extraction
//! engine: input handling, report rendering, and JSON export around the
//! `pluck-core` library.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
