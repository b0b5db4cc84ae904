//! Command-line front end
//!
//! The `botr` binary parses its arguments with `clap` and hands them to the
//! mode functions here.

pub mod upload;

pub use upload::{UploadArgs, run_upload};
