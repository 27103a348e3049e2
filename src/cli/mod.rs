//! Command-line interface: argument parsing and output rendering

pub mod args;
pub mod output;
