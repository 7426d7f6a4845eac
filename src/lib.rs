//! Screendex Library
//!
//! This module exposes the data-access layer (API client, response cache,
//! favorites store, facade) and the CLI definitions for use in integration
//! tests.

pub mod app;
pub mod cache;
pub mod cli;
pub mod data;
pub mod favorites;
