mod cli;
mod parsers;


pub use cli::TesterArgs;
pub(crate) use parsers::parse_duration_arg;
