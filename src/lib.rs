//! SimpleBrowser, a minimal browser shell with raw-HTML page loads, linear
//! back/forward history, favorites and bulk download reports.
//!
//! This library crate exposes all modules for use by the binaries and integration tests.

pub mod app;
pub mod managers;
pub mod platform;
pub mod rpc_handler;
pub mod services;
pub mod types;
