//! User-facing build output
//!
//! The lifecycle streams a phase's stdout into the build log, so everything a
//! user is meant to read goes through [`BuildLogger`]. Diagnostics use
//! `tracing` instead.

mod logger;

pub use logger::BuildLogger;
