mod app;
mod cli;
mod config;
mod consts;
mod error;
mod report;
mod tracker;
mod utils;

use clap::{CommandFactory, Parser};

use cli::Cli;
use utils::init_logging;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(e) = app::run(&cli) {
        eprintln!("{e}");
        eprintln!("{}", Cli::command().render_help());
        std::process::exit(1);
    }
}
