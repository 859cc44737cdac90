//! CLI support for the `gconv` binary.

pub mod commands;
