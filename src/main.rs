mod app;
mod args;
mod config;
mod dapr;
mod entry;
mod error;
mod logger;
mod params;
mod resolver;
mod shutdown;

use error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
