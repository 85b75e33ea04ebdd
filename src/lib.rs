//! ascii-cam library crate.
//!
//! This module exposes the internal components for integration testing.

pub mod app;
pub mod ascii;
pub mod camera;
pub mod cli;
pub mod config;
pub mod renderer;
