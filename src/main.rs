use clap::Parser;

use pairdist::cli::Cli;
use pairdist::runner;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = runner::run(&cli) {
        eprintln!("pairdist: error: {:#}", err);
        std::process::exit(1);
    }
}
