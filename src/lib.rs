//! dhall-to-ds — split a three-level configuration record into files.
//!
//! A record evaluates to `component → kind → name → contents`. Every leaf is
//! written to `<output>/<lowercase component>/<name>.<kind>.yaml`.

pub mod cli;
pub mod core;
pub mod loader;
