//! Common utilities shared by the scrawl crates.
//!
//! - **Warning System** - deduplicated, colored diagnostics on stderr

pub mod warning;
