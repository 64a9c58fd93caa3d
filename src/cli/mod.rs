//! Command Line Interface (CLI) layer for gamethumbs.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for the crop and download procedures.
//! It wires user-provided options to the library functionality exposed via
//! `gamethumbs::api`.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
