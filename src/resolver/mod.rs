//! Turns a [`ParameterSet`](crate::params::ParameterSet) into one prepared
//! Dapr call and fires it.
//!
//! `prepare` validates the (capability, target) pair against the
//! compatibility matrix and builds the request once. `execute` checks the
//! pair again and issues exactly one unary call per invocation; it never
//! mutates the prepared value, so a harness can call it in a loop.

mod execute;
mod matrix;
mod prepare;
mod types;


pub use execute::execute;
pub use matrix::{Route, route};
pub use prepare::{PLAIN_TEXT_CONTENT_TYPE, prepare};
pub use types::{PreparedCall, PreparedRequest};
