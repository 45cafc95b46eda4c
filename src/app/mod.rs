mod payload;
mod runner;

#[cfg(test)]
mod tests;

pub(crate) use payload::load_payload;
pub(crate) use runner::{RunOutcome, run_local};
