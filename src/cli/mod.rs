//! Command implementations behind the `igraph` binary.

pub mod commands;
