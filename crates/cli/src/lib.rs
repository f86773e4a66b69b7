//! Command-line front end for the `signon` login core.
//!
//! Owns everything the core leaves out: the config file, the Chromium
//! session behind [`signon::Page`], logging and the output envelope.

pub mod browser;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
