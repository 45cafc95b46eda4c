//! Core library for the `strest-dapr` CLI.
//!
//! A load-test harness hands over a flat `key=value` parameter string; this
//! crate parses it ([`params`]), checks the capability/target pair and builds
//! the matching Dapr gRPC request once ([`resolver::prepare`]), then fires
//! exactly one unary call per [`resolver::execute`]. The [`dapr`] module
//! holds the protobuf messages, the stubs, and the reqwest-backed channel.
pub mod args;
pub mod config;
pub mod dapr;
pub mod error;
pub mod params;
pub mod resolver;

#[cfg(feature = "fuzzing")]
pub mod fuzzing;
