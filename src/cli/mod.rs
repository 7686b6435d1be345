//! Command-line interface module
//!
//! Implements the CLI commands:
//! - collect (default): gather matching files into the output file
//! - config init: Initialize configuration file
pub mod collect;
pub mod config;
