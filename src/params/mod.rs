//! Flat `key=value` load-test parameters.
//!
//! The harness hands over a single comma separated string such as
//! `capability=state,target=dapr,method=get,store=statestore,key=k1`. Parsing
//! only splits and classifies entries; which fields are required depends on
//! the capability and is checked by the resolver.

mod parse;
mod types;


pub use parse::parse_parameters;
pub use types::{Capability, ParameterSet, Target};
